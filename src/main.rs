//! Outfitter CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use outfitter::cli::Cli;
use outfitter::config::{RunConfig, ARCHIVE_DIR_PREFIX};
use outfitter::fetch::HttpArchiveFetcher;
use outfitter::runner::{report_failure, Bootstrap, RunOutcome};
use outfitter::shell::ShellRunner;
use outfitter::ui::{OutputMode, TerminalUI};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. Default is INFO
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("outfitter=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("outfitter=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    tracing::debug!("Outfitter starting with args: {:?}", cli);

    let output_mode = if cli.quiet {
        OutputMode::Quiet
    } else if cli.verbose {
        OutputMode::Verbose
    } else {
        OutputMode::Normal
    };

    if cli.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    let mut ui = TerminalUI::new(output_mode).with_assume_yes(cli.yes);

    let config = match RunConfig::from_arg(cli.directory) {
        Ok(config) => config,
        Err(e) => {
            report_failure(&mut ui, &e);
            return ExitCode::from(1);
        }
    };

    let runner = ShellRunner;
    let fetcher = HttpArchiveFetcher::new(ARCHIVE_DIR_PREFIX);
    let bootstrap = Bootstrap::new(&config, &runner, &fetcher);

    match bootstrap.run(&mut ui) {
        Ok(RunOutcome::Completed) | Ok(RunOutcome::Declined) => ExitCode::SUCCESS,
        Err(e) => {
            report_failure(&mut ui, &e);
            ExitCode::from(1)
        }
    }
}
