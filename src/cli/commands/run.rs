//! The `run` command: execute the downstream test suite.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::runner;
use crate::targets::TargetRegistry;
use crate::toolchain::SystemToolchain;

pub struct RunCommand {
    project_root: PathBuf,
    registry: TargetRegistry,
    args: RunArgs,
}

impl RunCommand {
    pub fn new(project_root: &Path, registry: TargetRegistry, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            registry,
            args,
        }
    }
}

impl Command for RunCommand {
    fn execute(&self) -> Result<CommandResult> {
        let target = self.registry.get(&self.args.target)?;
        let tools = SystemToolchain::new();

        // Test failures are an exit code, not an error: the runner's
        // exit status must equal the test tool's, verbatim.
        let code = runner::run(target, &self.project_root, &tools)?;
        if code == 0 {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(code))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DowncheckError;
    use tempfile::TempDir;

    #[test]
    fn unknown_target_fails_before_any_io() {
        let temp = TempDir::new().unwrap();
        let cmd = RunCommand::new(
            temp.path(),
            TargetRegistry::builtin(),
            RunArgs {
                target: "nope".to_string(),
            },
        );

        let err = cmd.execute().unwrap_err();
        assert!(matches!(err, DowncheckError::UnknownTarget { .. }));
    }

    #[test]
    fn missing_checkout_fails_with_path_error() {
        let temp = TempDir::new().unwrap();
        let cmd = RunCommand::new(temp.path(), TargetRegistry::builtin(), RunArgs::default());

        let err = cmd.execute().unwrap_err();
        assert!(matches!(err, DowncheckError::CheckoutMissing { .. }));
    }
}
