//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] and records every invocation
//! for later assertion. Responses are matched by command prefix; commands
//! with no configured response succeed with empty output.
//!
//! # Example
//!
//! ```
//! use outfitter::shell::{CommandOptions, CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new();
//! runner.fail_matching("npm ci", "npm error EUSAGE");
//!
//! let result = runner.run("npm ci", &CommandOptions::captured()).unwrap();
//! assert!(!result.success);
//! assert_eq!(runner.calls_matching("npm ci"), 1);
//! ```

use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use crate::error::Result;

use super::{CommandOptions, CommandResult, CommandRunner};

/// One recorded invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// The full command line.
    pub command: String,
    /// Working directory, if one was set.
    pub cwd: Option<PathBuf>,
}

/// A canned response keyed by command prefix.
struct CannedResponse {
    prefix: String,
    result: CommandResult,
    consumed: bool,
}

/// Mock command runner that records calls and replays canned results.
#[derive(Default)]
pub struct MockRunner {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<Vec<CannedResponse>>,
}

impl MockRunner {
    /// Create a mock runner where every command succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an exact result for commands starting with `prefix`.
    ///
    /// Responses are consumed in registration order; a prefix registered
    /// twice answers the first two matching calls with the two results.
    pub fn respond_matching(&self, prefix: &str, result: CommandResult) {
        self.responses.lock().unwrap().push(CannedResponse {
            prefix: prefix.to_string(),
            result,
            consumed: false,
        });
    }

    /// Queue a failure (exit code 1) with the given stderr text.
    pub fn fail_matching(&self, prefix: &str, stderr: &str) {
        self.respond_matching(
            prefix,
            CommandResult::failure(
                Some(1),
                String::new(),
                stderr.to_string(),
                Duration::ZERO,
            ),
        );
    }

    /// All recorded invocations, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of invocations whose command starts with `prefix`.
    pub fn calls_matching(&self, prefix: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.command.starts_with(prefix))
            .count()
    }

    /// Working directory of the first invocation matching `prefix`.
    pub fn cwd_of(&self, prefix: &str) -> Option<PathBuf> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.command.starts_with(prefix))
            .and_then(|c| c.cwd.clone())
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, command: &str, options: &CommandOptions) -> Result<CommandResult> {
        self.calls.lock().unwrap().push(RecordedCall {
            command: command.to_string(),
            cwd: options.cwd.clone(),
        });

        let mut responses = self.responses.lock().unwrap();
        if let Some(canned) = responses
            .iter_mut()
            .find(|r| !r.consumed && command.starts_with(&r.prefix))
        {
            canned.consumed = true;
            return Ok(canned.result.clone());
        }

        Ok(CommandResult::success(
            String::new(),
            String::new(),
            Duration::ZERO,
        ))
    }
}
