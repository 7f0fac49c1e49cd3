//! Outfitter - bootstrap a local, runnable copy of the Trailhead app.
//!
//! Outfitter fetches the Trailhead source tree (git clone, or a ZIP
//! snapshot when git is missing) and installs its dependencies with a
//! reproducible `npm ci`, falling back to `npm install` on lockfile drift.
//!
//! # Modules
//!
//! - [`acquire`] - Source acquisition (clone vs. archive fallback)
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Run configuration and fixed project literals
//! - [`detection`] - Toolchain probes and filesystem pre-checks
//! - [`error`] - Error types and result aliases
//! - [`fetch`] - HTTP archive download and extraction
//! - [`install`] - Dependency installation and failure classification
//! - [`runner`] - Run orchestration
//! - [`shell`] - Shell command execution
//! - [`ui`] - Prompts, spinners, and terminal output

pub mod acquire;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod fetch;
pub mod install;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{OutfitterError, Result};
