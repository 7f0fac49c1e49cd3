//! Run configuration.
//!
//! A [`RunConfig`] is built once from the single optional CLI argument and is
//! immutable for the lifetime of the run.

use std::path::PathBuf;

use anyhow::anyhow;

use crate::error::Result;

/// Default directory name when no argument is given.
pub const DEFAULT_DIR_NAME: &str = "trailhead";

/// Repository URL used for `git clone`.
pub const REPO_URL: &str = "https://github.com/trailhead-dev/trailhead.git";

/// Archive snapshot URL used when git is unavailable.
pub const ARCHIVE_URL: &str =
    "https://github.com/trailhead-dev/trailhead/archive/refs/heads/main.zip";

/// Prefix of the wrapper directory inside the archive (`<repo>-<branch>`).
pub const ARCHIVE_DIR_PREFIX: &str = "trailhead-";

/// Immutable configuration for one bootstrap run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Directory name the target project will be created under.
    pub name: String,
    /// Absolute path of the target directory.
    pub path: PathBuf,
    /// Clone URL.
    pub repo_url: String,
    /// Archive fallback URL.
    pub archive_url: String,
}

impl RunConfig {
    /// Build a config from the optional positional argument, resolving the
    /// target path against the current working directory.
    pub fn from_arg(directory: Option<String>) -> Result<Self> {
        let name = directory.unwrap_or_else(|| DEFAULT_DIR_NAME.to_string());
        validate_name(&name)?;

        let cwd = std::env::current_dir()?;
        Ok(Self {
            path: cwd.join(&name),
            name,
            repo_url: REPO_URL.to_string(),
            archive_url: ARCHIVE_URL.to_string(),
        })
    }

    /// The directory the target will be created inside.
    pub fn parent_dir(&self) -> PathBuf {
        self.path
            .parent()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Reject names that would escape the working directory or be unusable
/// as a single path component.
fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(anyhow!("target directory name must not be empty").into());
    }
    if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
        return Err(
            anyhow!("target directory name must be a plain name, not a path: '{name}'").into(),
        );
    }
    Ok(())
}
