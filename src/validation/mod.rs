//! Validation functionality
//!
//! Every table is validated before it reaches a renderer; a failure aborts
//! the run.

pub mod tables;

pub use tables::{TableValidationError, TableValidator};
