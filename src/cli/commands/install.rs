//! The `install` command: prepare the downstream checkout.

use std::path::{Path, PathBuf};

use crate::cli::args::InstallArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::runner;
use crate::targets::TargetRegistry;
use crate::toolchain::SystemToolchain;

pub struct InstallCommand {
    project_root: PathBuf,
    registry: TargetRegistry,
    args: InstallArgs,
}

impl InstallCommand {
    pub fn new(project_root: &Path, registry: TargetRegistry, args: InstallArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            registry,
            args,
        }
    }
}

impl Command for InstallCommand {
    fn execute(&self) -> Result<CommandResult> {
        let target = self.registry.get(&self.args.target)?;
        let tools = SystemToolchain::new();

        let workdir = runner::install(target, &self.project_root, &tools)?;
        tracing::debug!("downstream checkout ready at {}", workdir.path().display());

        Ok(CommandResult::success())
    }
}
