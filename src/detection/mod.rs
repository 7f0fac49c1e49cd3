//! Toolchain and filesystem pre-flight checks.
//!
//! [`check_toolchain`] probes the external tools the pipeline depends on;
//! absence is data, not an error. [`directory_exists`] is the filesystem
//! pre-check guarding against clobbering an existing target.

use std::path::Path;

use tracing::debug;

use crate::shell::{CommandOptions, CommandRunner};

/// Version-control probe command.
pub const GIT_PROBE: &str = "git --version";

/// Package-manager probe command.
pub const NPM_PROBE: &str = "npm --version";

/// Availability of the external tools the pipeline can use.
///
/// `npm_available` is a hard requirement for the run; `git_available`
/// only selects the acquisition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolchainReport {
    /// `git --version` exited zero.
    pub git_available: bool,
    /// `npm --version` exited zero.
    pub npm_available: bool,
}

/// Probe both tools. Never fails; a spawn error or non-zero exit marks
/// the tool unavailable.
pub fn check_toolchain(runner: &dyn CommandRunner) -> ToolchainReport {
    let report = ToolchainReport {
        git_available: probe(runner, GIT_PROBE),
        npm_available: probe(runner, NPM_PROBE),
    };
    debug!(?report, "toolchain probe complete");
    report
}

/// Run a single probe command, collapsing every failure mode to `false`.
fn probe(runner: &dyn CommandRunner, command: &str) -> bool {
    runner
        .run(command, &CommandOptions::captured())
        .map(|r| r.success)
        .unwrap_or(false)
}

/// Return true only if `path` resolves to a directory.
///
/// Missing path, permission errors, and non-directory entries all collapse
/// to `false`: each means the run may proceed as if the target is absent.
pub fn directory_exists(path: &Path) -> bool {
    path.is_dir()
}
