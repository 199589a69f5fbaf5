//! Property-based tests for the aggregation engine

use std::collections::HashSet;

use proptest::prelude::*;
use workboard_reports::backend::reports::engine::{
    priority_distribution, project_progress, user_task_distribution, user_workload,
};
use workboard_reports::shared::{Project, Task, TaskPriority, TaskStatus, UserRef};

fn arb_status() -> impl Strategy<Value = TaskStatus> {
    prop_oneof![
        Just(TaskStatus::ToDo),
        Just(TaskStatus::InProgress),
        Just(TaskStatus::Done),
    ]
}

fn arb_priority() -> impl Strategy<Value = TaskPriority> {
    prop_oneof![
        Just(TaskPriority::Low),
        Just(TaskPriority::Medium),
        Just(TaskPriority::High),
    ]
}

// Project ids 0..8 and users u0..u4 overlap often enough to exercise joins
// as well as dangling references.
fn arb_task() -> impl Strategy<Value = Task> {
    (0u64..1000, 0u64..8, 0u8..5, arb_status(), arb_priority()).prop_map(
        |(id, project_id, user, status, priority)| {
            Task::new(id, project_id, UserRef::new(format!("u{}", user), format!("User {}", user)))
                .with_status(status)
                .with_priority(priority)
        },
    )
}

fn arb_tasks() -> impl Strategy<Value = Vec<Task>> {
    prop::collection::vec(arb_task(), 0..40)
}

fn arb_projects() -> impl Strategy<Value = Vec<Project>> {
    prop::collection::vec(0u64..10, 0..6).prop_map(|ids| {
        ids.into_iter()
            .map(|id| Project::new(id, format!("Project {}", id)))
            .collect()
    })
}

proptest! {
    #[test]
    fn test_one_progress_entry_per_project(projects in arb_projects(), tasks in arb_tasks()) {
        let report = project_progress(&projects, &tasks);

        prop_assert_eq!(report.len(), projects.len());
        for (entry, project) in report.iter().zip(&projects) {
            prop_assert_eq!(entry.project_id, project.id);
            prop_assert!(entry.completed_tasks <= entry.total_tasks);
            prop_assert!((0.0..=100.0).contains(&entry.progress.value()));
            if entry.total_tasks == 0 {
                prop_assert_eq!(entry.progress.value(), 0.0);
            }
        }
    }

    #[test]
    fn test_progress_counts_match_tasks(projects in arb_projects(), tasks in arb_tasks()) {
        for entry in project_progress(&projects, &tasks) {
            let matching: Vec<&Task> =
                tasks.iter().filter(|t| t.project_id == entry.project_id).collect();
            prop_assert_eq!(entry.total_tasks, matching.len());
            prop_assert_eq!(
                entry.completed_tasks,
                matching.iter().filter(|t| t.status == TaskStatus::Done).count()
            );
        }
    }

    #[test]
    fn test_priority_distribution_sums_to_task_count(tasks in arb_tasks()) {
        let distribution = priority_distribution(&tasks);
        prop_assert_eq!(distribution.total(), tasks.len());
        for priority in TaskPriority::ALL {
            prop_assert_eq!(
                distribution.get(priority),
                tasks.iter().filter(|t| t.priority == priority).count()
            );
        }
    }

    #[test]
    fn test_workload_buckets_sum_to_total(tasks in arb_tasks()) {
        let report = user_workload(&tasks);

        let mut seen = HashSet::new();
        for workload in &report {
            prop_assert!(seen.insert(workload.user_id.clone()), "duplicate user");
            prop_assert!(workload.total_tasks > 0);
            prop_assert_eq!(workload.by_status.total(), workload.total_tasks);
            prop_assert_eq!(workload.by_priority.total(), workload.total_tasks);
        }
        prop_assert_eq!(report.iter().map(|w| w.total_tasks).sum::<usize>(), tasks.len());
    }

    #[test]
    fn test_user_distribution_agrees_with_workload(tasks in arb_tasks()) {
        let workload = user_workload(&tasks);
        let distribution = user_task_distribution(&tasks);

        prop_assert_eq!(workload.len(), distribution.len());
        for (w, d) in workload.iter().zip(&distribution) {
            prop_assert_eq!(&w.user_id, &d.user_id);
            prop_assert_eq!(&w.name, &d.name);
            prop_assert_eq!(w.total_tasks, d.task_count);
        }
    }
}
