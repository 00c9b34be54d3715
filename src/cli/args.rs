//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Hookstrap - Scaffold and verify pre-commit git hooks.
#[derive(Debug, Parser)]
#[command(name = "hookstrap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output (including hook manager output)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold the pre-commit config and install git hooks
    Setup(SetupArgs),

    /// Verify the hook setup and report missing pieces
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `setup` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SetupArgs {
    /// Overwrite existing config and guide files
    #[arg(long)]
    pub overwrite: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Exit non-zero when the report contains errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_verifies() {
        Cli::command().debug_assert();
    }

    #[test]
    fn setup_parses_overwrite_flag() {
        let cli = Cli::try_parse_from(["hookstrap", "setup", "--overwrite"]).unwrap();
        match cli.command {
            Commands::Setup(args) => assert!(args.overwrite),
            _ => panic!("expected setup"),
        }
    }

    #[test]
    fn check_parses_json_and_strict() {
        let cli = Cli::try_parse_from(["hookstrap", "check", "--json", "--strict"]).unwrap();
        match cli.command {
            Commands::Check(args) => {
                assert!(args.json);
                assert!(args.strict);
            }
            _ => panic!("expected check"),
        }
    }

    #[test]
    fn global_flags_apply_after_subcommand() {
        let cli = Cli::try_parse_from(["hookstrap", "check", "--quiet", "--no-color"]).unwrap();
        assert!(cli.quiet);
        assert!(cli.no_color);
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["hookstrap"]).is_err());
    }
}
