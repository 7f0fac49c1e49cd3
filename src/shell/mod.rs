//! Shell command execution.

pub mod command;
pub mod mock;

pub use command::{execute, CommandOptions, CommandResult, CommandRunner, ShellRunner};
pub use mock::MockRunner;
