//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. The mode argument is the
//! closed [`Commands`] enum, so an unrecognized mode is rejected by the
//! parser before any filesystem or network work happens.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::targets::DEFAULT_TARGET;

/// Downcheck - downstream test-suite runner for CI.
#[derive(Debug, Parser)]
#[command(name = "downcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a targets file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory the downstream checkout lives under (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Clone the downstream project and install its dependencies
    Install(InstallArgs),

    /// Run the downstream project's test suite
    Run(RunArgs),

    /// List known downstream targets
    List,
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InstallArgs {
    /// Downstream target to install
    #[arg(short, long, default_value = DEFAULT_TARGET)]
    pub target: String,
}

impl Default for InstallArgs {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
        }
    }
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RunArgs {
    /// Downstream target whose tests to run
    #[arg(short, long, default_value = DEFAULT_TARGET)]
    pub target: String,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_string(),
        }
    }
}
