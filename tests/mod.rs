//! Test suite for the reports service
//!
//! This module organizes all tests

pub mod common;
pub mod property;
