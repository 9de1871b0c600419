//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config;
use crate::error::Result;
use crate::targets::TargetRegistry;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, returning its exit outcome.
    fn execute(&self) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Dispatch and execute a command.
    ///
    /// Builds the target registry (builtins plus the optional targets
    /// file) and routes the subcommand to its implementation.
    pub fn dispatch(&self, cli: &Cli) -> Result<CommandResult> {
        let mut registry = TargetRegistry::builtin();
        if let Some(path) = &cli.config {
            registry = registry.merge(config::load_targets(path)?);
        }

        match &cli.command {
            Commands::Install(args) => {
                let cmd =
                    super::install::InstallCommand::new(&self.project_root, registry, args.clone());
                cmd.execute()
            }
            Commands::Run(args) => {
                let cmd = super::run::RunCommand::new(&self.project_root, registry, args.clone());
                cmd.execute()
            }
            Commands::List => {
                let cmd = super::list::ListCommand::new(registry, cli.quiet);
                cmd.execute()
            }
        }
    }
}
