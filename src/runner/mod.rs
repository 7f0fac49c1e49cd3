//! Bootstrap run orchestration.

pub mod workflow;

pub use workflow::{report_failure, Bootstrap, RunOutcome};
