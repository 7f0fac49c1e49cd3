//! Bootstrap workflow orchestration.
//!
//! Sequences the pipeline: toolchain probe, target-directory pre-check,
//! confirmation gate, source acquisition, dependency install, success
//! report. Any unrecovered failure surfaces as an error; a declined
//! confirmation is a normal outcome, not an error.

use tracing::debug;

use crate::acquire::{acquire, AcquisitionOutcome};
use crate::config::RunConfig;
use crate::detection::{check_toolchain, directory_exists, ToolchainReport};
use crate::error::{OutfitterError, Result};
use crate::fetch::ArchiveFetcher;
use crate::install::{InstallOutcome, Installer};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

/// Terminal outcome of a bootstrap run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// All steps completed; the target project is ready.
    Completed,
    /// The user declined the confirmation gate. Not an error.
    Declined,
}

/// Orchestrates one bootstrap run.
pub struct Bootstrap<'a> {
    config: &'a RunConfig,
    runner: &'a dyn CommandRunner,
    fetcher: &'a dyn ArchiveFetcher,
}

impl<'a> Bootstrap<'a> {
    /// Create a bootstrap over the given process and fetch seams.
    pub fn new(
        config: &'a RunConfig,
        runner: &'a dyn CommandRunner,
        fetcher: &'a dyn ArchiveFetcher,
    ) -> Self {
        Self {
            config,
            runner,
            fetcher,
        }
    }

    /// Run the pipeline to completion, declination, or failure.
    pub fn run(&self, ui: &mut dyn UserInterface) -> Result<RunOutcome> {
        ui.show_header("Outfitter · Trailhead bootstrap");

        let report = self.check_prerequisites(ui)?;
        self.check_target_directory(ui)?;

        if !self.confirm(ui, report)? {
            ui.message("Aborted. Nothing was changed.");
            return Ok(RunOutcome::Declined);
        }

        self.acquire_source(ui, report)?;
        self.install_dependencies(ui)?;

        ui.success(&format!(
            "Trailhead is ready in '{}'.",
            self.config.name
        ));
        ui.message(&format!("Next: cd {} && npm start", self.config.name));
        Ok(RunOutcome::Completed)
    }

    fn check_prerequisites(&self, ui: &mut dyn UserInterface) -> Result<ToolchainReport> {
        ui.message("Checking prerequisites...");
        let report = check_toolchain(self.runner);

        if !report.npm_available {
            return Err(OutfitterError::MissingPackageManager { tool: "npm".into() });
        }
        ui.success("npm is available");

        if report.git_available {
            ui.success("git is available");
        } else {
            ui.warning("git not found; a ZIP snapshot will be downloaded instead");
        }

        Ok(report)
    }

    fn check_target_directory(&self, ui: &mut dyn UserInterface) -> Result<()> {
        if directory_exists(&self.config.path) {
            return Err(OutfitterError::DirectoryExists {
                path: self.config.path.clone(),
            });
        }
        debug!(path = %self.config.path.display(), "target directory is free");
        ui.message(&format!("Target directory: {}", self.config.path.display()));
        Ok(())
    }

    fn confirm(&self, ui: &mut dyn UserInterface, report: ToolchainReport) -> Result<bool> {
        let acquisition = if report.git_available {
            format!("clone {}", self.config.repo_url)
        } else {
            format!("download {}", self.config.archive_url)
        };
        ui.message(&format!(
            "This will {} into '{}' and install its dependencies.",
            acquisition, self.config.name
        ));
        ui.confirm("Proceed? (y/N)")
    }

    fn acquire_source(&self, ui: &mut dyn UserInterface, report: ToolchainReport) -> Result<()> {
        let mut spinner = if report.git_available {
            ui.start_spinner("Cloning repository...")
        } else {
            ui.start_spinner("Downloading archive snapshot...")
        };

        match acquire(report, self.config, self.runner, self.fetcher) {
            Ok(AcquisitionOutcome::Cloned) => {
                spinner.finish_success("Repository cloned");
                Ok(())
            }
            Ok(AcquisitionOutcome::Downloaded) => {
                spinner.finish_success("Archive downloaded and extracted");
                Ok(())
            }
            Err(e) => {
                spinner.finish_error("Source acquisition failed");
                Err(e)
            }
        }
    }

    fn install_dependencies(&self, ui: &mut dyn UserInterface) -> Result<()> {
        let mut spinner = ui.start_spinner("Installing dependencies (npm ci)...");
        let installer = Installer::new(self.runner);

        match installer.install(&self.config.path) {
            Ok(InstallOutcome::Clean) => {
                spinner.finish_success("Dependencies installed");
                Ok(())
            }
            Ok(InstallOutcome::Fallback) => {
                spinner.finish_success("Dependencies installed (fallback)");
                ui.warning("Lockfile was out of sync; used 'npm install' instead of 'npm ci'");
                Ok(())
            }
            Err(e) => {
                spinner.finish_error("Dependency installation failed");
                Err(e)
            }
        }
    }
}

/// Report a fatal failure through the UI: the diagnosis line, then the
/// remediation hint when the failure class has one.
pub fn report_failure(ui: &mut dyn UserInterface, err: &OutfitterError) {
    ui.error(&err.to_string());
    if let Some(hint) = err.hint() {
        ui.hint(hint);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::{GIT_PROBE, NPM_PROBE};
    use crate::fetch::MockFetcher;
    use crate::shell::MockRunner;
    use crate::ui::MockUI;
    use std::path::PathBuf;

    fn config_in(dir: &std::path::Path) -> RunConfig {
        RunConfig {
            name: "my-app".to_string(),
            path: dir.join("my-app"),
            repo_url: "https://example.test/repo.git".to_string(),
            archive_url: "https://example.test/main.zip".to_string(),
        }
    }

    #[test]
    fn missing_npm_aborts_before_acquisition() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = config_in(temp.path());
        let runner = MockRunner::new();
        runner.fail_matching(NPM_PROBE, "npm: command not found");
        let fetcher = MockFetcher::new();
        let mut ui = MockUI::new();
        ui.queue_confirm(true);

        let err = Bootstrap::new(&config, &runner, &fetcher)
            .run(&mut ui)
            .unwrap_err();

        assert!(matches!(err, OutfitterError::MissingPackageManager { .. }));
        assert_eq!(runner.calls_matching("git clone"), 0);
        assert_eq!(fetcher.call_count(), 0);
        assert!(ui.confirms_shown().is_empty());
    }

    #[test]
    fn existing_directory_aborts_before_prompt() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = config_in(temp.path());
        std::fs::create_dir(&config.path).unwrap();
        let runner = MockRunner::new();
        let fetcher = MockFetcher::new();
        let mut ui = MockUI::new();
        ui.queue_confirm(true);

        let err = Bootstrap::new(&config, &runner, &fetcher)
            .run(&mut ui)
            .unwrap_err();

        assert!(matches!(err, OutfitterError::DirectoryExists { .. }));
        assert!(ui.confirms_shown().is_empty());
        assert_eq!(runner.calls_matching("git clone"), 0);
    }

    #[test]
    fn declination_is_a_clean_outcome() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = config_in(temp.path());
        let runner = MockRunner::new();
        let fetcher = MockFetcher::new();
        let mut ui = MockUI::new();
        // No queued answer: the mock declines.

        let outcome = Bootstrap::new(&config, &runner, &fetcher)
            .run(&mut ui)
            .unwrap();

        assert_eq!(outcome, RunOutcome::Declined);
        assert_eq!(runner.calls_matching("git clone"), 0);
        assert_eq!(runner.calls_matching("npm ci"), 0);
        assert_eq!(fetcher.call_count(), 0);
    }

    #[test]
    fn summary_names_the_acquisition_path() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = config_in(temp.path());
        let runner = MockRunner::new();
        runner.fail_matching(GIT_PROBE, "git: command not found");
        let fetcher = MockFetcher::new();
        let mut ui = MockUI::new();

        Bootstrap::new(&config, &runner, &fetcher)
            .run(&mut ui)
            .unwrap();

        assert!(ui
            .messages()
            .iter()
            .any(|m| m.contains("download https://example.test/main.zip")));
    }

    #[test]
    fn report_failure_emits_error_and_hint() {
        let mut ui = MockUI::new();
        let err = OutfitterError::MissingPackageManager { tool: "npm".into() };

        report_failure(&mut ui, &err);

        assert_eq!(ui.errors().len(), 1);
        assert!(ui.errors()[0].contains("npm"));
        assert_eq!(ui.hints().len(), 1);
    }

    #[test]
    fn report_failure_omits_hint_when_unknown() {
        let mut ui = MockUI::new();
        let err = OutfitterError::Install {
            message: "exit 1".into(),
        };

        report_failure(&mut ui, &err);

        assert!(ui.hints().is_empty());
    }

    #[test]
    fn fallback_install_warns_about_lockfile() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = config_in(temp.path());
        let runner = MockRunner::new();
        runner.fail_matching(
            "npm ci",
            "npm error `npm ci` can only install packages when your package.json and package-lock.json are in sync.",
        );
        let fetcher = MockFetcher::new();
        let mut ui = MockUI::new();
        ui.queue_confirm(true);

        let outcome = Bootstrap::new(&config, &runner, &fetcher)
            .run(&mut ui)
            .unwrap();

        assert_eq!(outcome, RunOutcome::Completed);
        assert!(ui.warnings().iter().any(|w| w.contains("npm install")));
    }

    #[test]
    fn clone_failure_propagates() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = config_in(temp.path());
        let runner = MockRunner::new();
        runner.fail_matching("git clone", "fatal: repository not found");
        let fetcher = MockFetcher::new();
        let mut ui = MockUI::new();
        ui.queue_confirm(true);

        let err = Bootstrap::new(&config, &runner, &fetcher)
            .run(&mut ui)
            .unwrap_err();

        assert!(matches!(err, OutfitterError::Clone { .. }));
        assert_eq!(runner.calls_matching("npm ci"), 0);
    }

    #[test]
    fn uses_config_path_even_when_cwd_differs() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = config_in(temp.path());
        let runner = MockRunner::new();
        let fetcher = MockFetcher::new();
        let mut ui = MockUI::new();
        ui.queue_confirm(true);

        Bootstrap::new(&config, &runner, &fetcher)
            .run(&mut ui)
            .unwrap();

        assert_eq!(runner.cwd_of("npm ci"), Some(config.path.clone()));
        assert_eq!(runner.cwd_of("git clone"), Some(PathBuf::from(temp.path())));
    }
}
