//! Source acquisition.
//!
//! Picks one of two mutually exclusive acquisition paths per run: a git
//! clone when git is available, otherwise the archive snapshot fallback.
//! There is no mid-run switch from clone to download; a failed clone is a
//! failed run.

use tracing::debug;

use crate::config::RunConfig;
use crate::detection::ToolchainReport;
use crate::error::{OutfitterError, Result};
use crate::fetch::ArchiveFetcher;
use crate::shell::{CommandOptions, CommandRunner};

/// Marker git/curl print when the repository host cannot be resolved.
const HOST_RESOLUTION_MARKER: &str = "could not resolve host";

/// How the source tree was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquisitionOutcome {
    /// `git clone` succeeded.
    Cloned,
    /// The archive snapshot was downloaded and extracted.
    Downloaded,
}

/// Acquire the target source tree at `config.path`.
pub fn acquire(
    report: ToolchainReport,
    config: &RunConfig,
    runner: &dyn CommandRunner,
    fetcher: &dyn ArchiveFetcher,
) -> Result<AcquisitionOutcome> {
    if report.git_available {
        clone(config, runner)
    } else {
        debug!("git unavailable, falling back to archive download");
        fetcher.fetch_and_extract(&config.archive_url, &config.path)?;
        Ok(AcquisitionOutcome::Downloaded)
    }
}

fn clone(config: &RunConfig, runner: &dyn CommandRunner) -> Result<AcquisitionOutcome> {
    let command = format!("git clone {} {}", config.repo_url, config.name);
    let options = CommandOptions::captured_in(config.parent_dir());

    let result = runner.run(&command, &options)?;
    if result.success {
        return Ok(AcquisitionOutcome::Cloned);
    }

    let message = result.error_text().trim().to_string();
    if message.to_lowercase().contains(HOST_RESOLUTION_MARKER) {
        Err(OutfitterError::Network { message })
    } else {
        Err(OutfitterError::Clone { message })
    }
}
