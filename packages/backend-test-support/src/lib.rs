//! Backend test support utilities
//!
//! This crate provides utilities specifically for backend testing:
//! unique test data generation, Problem Details assertions and unified
//! logging initialization.

pub mod problem_details;
pub mod test_logging;
pub mod unique_helpers;
