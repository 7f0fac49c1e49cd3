//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;

/// Outfitter - Bootstrap a local Trailhead development copy.
#[derive(Debug, Parser)]
#[command(name = "outfitter")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Directory name to create the project under
    pub directory: Option<String>,

    /// Answer yes to the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Show verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_args_parses() {
        let cli = Cli::parse_from(["outfitter"]);
        assert!(cli.directory.is_none());
        assert!(!cli.yes);
    }

    #[test]
    fn positional_directory_parses() {
        let cli = Cli::parse_from(["outfitter", "my-app"]);
        assert_eq!(cli.directory.as_deref(), Some("my-app"));
    }

    #[test]
    fn yes_flag_parses() {
        let cli = Cli::parse_from(["outfitter", "-y"]);
        assert!(cli.yes);
    }

    #[test]
    fn verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["outfitter", "-v", "-q"]).is_err());
    }
}
