//! Dependency installation.
//!
//! Runs the reproducible install (`npm ci`) in the acquired tree. A
//! lockfile-classified failure triggers exactly one fallback to the looser
//! `npm install`; a permission-classified failure aborts without the
//! fallback, since it would fail the same way.

pub mod patterns;

use std::path::Path;

use tracing::debug;

use crate::error::{OutfitterError, Result};
use crate::shell::{CommandOptions, CommandRunner};

pub use patterns::{classify_install_error, Classifier, InstallFailure};

/// Reproducible install command (strict lockfile).
pub const PRIMARY_INSTALL: &str = "npm ci";

/// Looser fallback install command (tolerates lockfile drift).
pub const FALLBACK_INSTALL: &str = "npm install";

/// How the dependencies were installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The reproducible install succeeded.
    Clean,
    /// The reproducible install failed on the lockfile and the fallback
    /// install succeeded.
    Fallback,
}

/// Installs dependencies into an acquired project tree.
pub struct Installer<'a> {
    runner: &'a dyn CommandRunner,
    classifier: Classifier,
}

impl<'a> Installer<'a> {
    /// Create an installer with the default npm output classifier.
    pub fn new(runner: &'a dyn CommandRunner) -> Self {
        Self::with_classifier(runner, classify_install_error)
    }

    /// Create an installer with a custom failure classifier.
    pub fn with_classifier(runner: &'a dyn CommandRunner, classifier: Classifier) -> Self {
        Self { runner, classifier }
    }

    /// Install dependencies in `project_path`.
    ///
    /// Stdin is inherited so npm lifecycle scripts that prompt still work;
    /// stdout/stderr are captured for classification.
    pub fn install(&self, project_path: &Path) -> Result<InstallOutcome> {
        let options = CommandOptions {
            cwd: Some(project_path.to_path_buf()),
            capture_stdout: true,
            capture_stderr: true,
            inherit_stdin: true,
        };

        let primary = self.runner.run(PRIMARY_INSTALL, &options)?;
        if primary.success {
            return Ok(InstallOutcome::Clean);
        }

        let error_text = primary.error_text().trim().to_string();
        match (self.classifier)(&error_text) {
            InstallFailure::Permission => Err(OutfitterError::PermissionInstall {
                message: error_text,
            }),
            InstallFailure::Lockfile => {
                debug!("lockfile mismatch, retrying with fallback install");
                let fallback = self.runner.run(FALLBACK_INSTALL, &options)?;
                if fallback.success {
                    Ok(InstallOutcome::Fallback)
                } else {
                    // Surface the fallback's output, not the primary's.
                    Err(OutfitterError::Install {
                        message: fallback.error_text().trim().to_string(),
                    })
                }
            }
            InstallFailure::Other => Err(OutfitterError::Install {
                message: error_text,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::MockRunner;
    use std::path::PathBuf;

    const LOCKFILE_ERROR: &str = "npm error `npm ci` can only install packages \
        when your package.json and package-lock.json are in sync.";

    fn project() -> PathBuf {
        PathBuf::from("/work/my-app")
    }

    #[test]
    fn clean_install_succeeds() {
        let runner = MockRunner::new();
        let installer = Installer::new(&runner);

        let outcome = installer.install(&project()).unwrap();

        assert_eq!(outcome, InstallOutcome::Clean);
        assert_eq!(runner.calls_matching(PRIMARY_INSTALL), 1);
        assert_eq!(runner.calls_matching(FALLBACK_INSTALL), 0);
    }

    #[test]
    fn install_runs_in_project_directory() {
        let runner = MockRunner::new();
        let installer = Installer::new(&runner);

        installer.install(&project()).unwrap();

        assert_eq!(runner.cwd_of(PRIMARY_INSTALL), Some(project()));
    }

    #[test]
    fn lockfile_failure_triggers_single_fallback() {
        let runner = MockRunner::new();
        runner.fail_matching(PRIMARY_INSTALL, LOCKFILE_ERROR);
        let installer = Installer::new(&runner);

        let outcome = installer.install(&project()).unwrap();

        assert_eq!(outcome, InstallOutcome::Fallback);
        assert_eq!(runner.calls_matching(PRIMARY_INSTALL), 1);
        assert_eq!(runner.calls_matching(FALLBACK_INSTALL), 1);
    }

    #[test]
    fn failed_fallback_surfaces_fallback_error_text() {
        let runner = MockRunner::new();
        runner.fail_matching(PRIMARY_INSTALL, LOCKFILE_ERROR);
        runner.fail_matching(FALLBACK_INSTALL, "npm error ERESOLVE unable to resolve dependency tree");
        let installer = Installer::new(&runner);

        let err = installer.install(&project()).unwrap_err();

        assert!(matches!(err, OutfitterError::Install { .. }));
        assert!(err.to_string().contains("ERESOLVE"));
        assert!(!err.to_string().contains("package-lock.json"));
        // One fallback attempt only, no retry loop.
        assert_eq!(runner.calls_matching(FALLBACK_INSTALL), 1);
    }

    #[test]
    fn permission_failure_skips_fallback() {
        let runner = MockRunner::new();
        runner.fail_matching(
            PRIMARY_INSTALL,
            "npm error Error: EACCES: permission denied, mkdir '/work/my-app/node_modules'",
        );
        let installer = Installer::new(&runner);

        let err = installer.install(&project()).unwrap_err();

        assert!(matches!(err, OutfitterError::PermissionInstall { .. }));
        assert_eq!(runner.calls_matching(FALLBACK_INSTALL), 0);
    }

    #[test]
    fn unclassified_failure_skips_fallback() {
        let runner = MockRunner::new();
        runner.fail_matching(PRIMARY_INSTALL, "npm error code E500");
        let installer = Installer::new(&runner);

        let err = installer.install(&project()).unwrap_err();

        assert!(matches!(err, OutfitterError::Install { .. }));
        assert_eq!(runner.calls_matching(FALLBACK_INSTALL), 0);
    }

    #[test]
    fn custom_classifier_is_honored() {
        fn always_lockfile(_: &str) -> InstallFailure {
            InstallFailure::Lockfile
        }

        let runner = MockRunner::new();
        runner.fail_matching(PRIMARY_INSTALL, "some opaque failure");
        let installer = Installer::with_classifier(&runner, always_lockfile);

        let outcome = installer.install(&project()).unwrap();

        assert_eq!(outcome, InstallOutcome::Fallback);
    }
}
