//! Error types for Outfitter operations.
//!
//! This module defines [`OutfitterError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `OutfitterError` for failure classes that need distinct handling
//!   (fallback eligibility, remediation hints)
//! - Use `anyhow::Error` (via `OutfitterError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Outfitter operations.
#[derive(Debug, Error)]
pub enum OutfitterError {
    /// The package manager is not on PATH. Hard requirement, no fallback.
    #[error("'{tool}' is required but was not found on PATH")]
    MissingPackageManager { tool: String },

    /// The target directory already exists.
    #[error("Directory '{path}' already exists")]
    DirectoryExists { path: PathBuf },

    /// The version-control clone failed for a non-network reason.
    #[error("git clone failed: {message}")]
    Clone { message: String },

    /// The version-control clone failed because the host could not be reached.
    #[error("Network error while cloning: {message}")]
    Network { message: String },

    /// The archive fallback download or extraction failed.
    #[error("Download failed: {message}")]
    Download { message: String },

    /// Dependency installation failed with no recognized recovery path.
    #[error("Dependency installation failed: {message}")]
    Install { message: String },

    /// Dependency installation hit a permission problem. The fallback
    /// install would fail the same way, so it is never attempted.
    #[error("Dependency installation failed with a permission error: {message}")]
    PermissionInstall { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl OutfitterError {
    /// Remediation hint for the failure class, where one is known.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::MissingPackageManager { .. } => {
                Some("Install Node.js (which includes npm) from https://nodejs.org and re-run.")
            }
            Self::DirectoryExists { .. } => {
                Some("Remove the directory or pass a different name as the first argument.")
            }
            Self::Network { .. } => Some("Check your internet connection and try again."),
            Self::PermissionInstall { .. } => {
                Some("Check write permissions on the target directory; avoid running as root.")
            }
            _ => None,
        }
    }
}

/// Result type alias for Outfitter operations.
pub type Result<T> = std::result::Result<T, OutfitterError>;
