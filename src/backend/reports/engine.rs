/**
 * Aggregation Engine
 *
 * Pure reductions from the fetched project and task collections to the
 * report payloads. Nothing here performs I/O or mutates its input; every
 * function sees the full collections fetched for one request.
 *
 * # Join Keys
 *
 * - `task.project_id` against `project.id`
 * - `task.assigned_to.id` against the user id
 *
 * Neither key is guaranteed to resolve. A task whose project no longer
 * exists simply contributes to no project's progress.
 *
 * # Ordering
 *
 * Project progress follows the input project order. Per-user reports list
 * users in the order their first task appears.
 */

use std::collections::HashMap;

use crate::shared::report::{
    Percentage, PriorityCounts, PriorityDistribution, ProjectProgress, StatusCounts,
    UserTaskDistribution, UserWorkload,
};
use crate::shared::workboard::{Project, Task};

/// Completion of every project
///
/// For each project, the tasks whose `project_id` equals the project id are
/// counted, and those with status `done` are counted as completed. A project
/// without tasks reports 0 of 0 and a progress of zero.
pub fn project_progress(projects: &[Project], tasks: &[Task]) -> Vec<ProjectProgress> {
    let mut counts: HashMap<u64, (usize, usize)> = HashMap::new();
    for task in tasks {
        let entry = counts.entry(task.project_id).or_default();
        entry.0 += 1;
        if task.is_done() {
            entry.1 += 1;
        }
    }

    projects
        .iter()
        .map(|project| {
            let (total_tasks, completed_tasks) =
                counts.get(&project.id).copied().unwrap_or_default();

            ProjectProgress {
                project_id: project.id,
                name: project.name.clone(),
                status: project.status,
                start_date: project.start_date,
                end_date: project.end_date,
                total_tasks,
                completed_tasks,
                progress: Percentage::of(completed_tasks, total_tasks),
            }
        })
        .collect()
}

/// Task counts per assignee, broken down by status and priority
///
/// The display name comes from the first task seen for each user; later
/// tasks with a different recorded name do not change it.
pub fn user_workload(tasks: &[Task]) -> Vec<UserWorkload> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut workloads: Vec<UserWorkload> = Vec::new();

    for task in tasks {
        let assignee = &task.assigned_to;
        let slot = *index.entry(assignee.id.as_str()).or_insert_with(|| {
            workloads.push(UserWorkload {
                user_id: assignee.id.clone(),
                name: assignee.name.clone(),
                total_tasks: 0,
                by_status: StatusCounts::default(),
                by_priority: PriorityCounts::default(),
            });
            workloads.len() - 1
        });

        let workload = &mut workloads[slot];
        workload.total_tasks += 1;
        workload.by_status.record(task.status);
        workload.by_priority.record(task.priority);
    }

    workloads
}

/// Task counts per priority; every priority is present, zero if unused
pub fn priority_distribution(tasks: &[Task]) -> PriorityDistribution {
    let mut distribution = PriorityDistribution::default();
    for task in tasks {
        distribution.record(task.priority);
    }
    distribution
}

/// Number of tasks per assignee
///
/// Each user's name is looked up as the name on the first task in the whole
/// task list assigned to that user id.
pub fn user_task_distribution(tasks: &[Task]) -> Vec<UserTaskDistribution> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for task in tasks {
        let user_id = task.assigned_to.id.as_str();
        let count = counts.entry(user_id).or_insert_with(|| {
            order.push(user_id);
            0
        });
        *count += 1;
    }

    order
        .into_iter()
        .map(|user_id| UserTaskDistribution {
            user_id: user_id.to_string(),
            name: first_recorded_name(tasks, user_id),
            task_count: counts[user_id],
        })
        .collect()
}

fn first_recorded_name(tasks: &[Task], user_id: &str) -> Option<String> {
    tasks
        .iter()
        .find(|task| task.assigned_to.id == user_id)
        .and_then(|task| task.assigned_to.name.clone())
}
