//! Subprocess-backed toolchain.

use std::path::Path;
use std::process::Command;

use crate::error::{DowncheckError, Result};
use crate::toolchain::Toolchain;

/// Invokes git, pip, and pytest as blocking subprocesses.
///
/// Stdio is inherited from the parent, so each tool's own diagnostics
/// reach the CI log unmodified. Any credentials or proxy settings in
/// the environment pass through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemToolchain;

impl SystemToolchain {
    pub fn new() -> Self {
        Self
    }
}

impl Toolchain for SystemToolchain {
    fn clone_shallow(&self, url: &str, dest: &Path) -> Result<()> {
        tracing::debug!("git clone --depth 1 {} {}", url, dest.display());

        let status = Command::new("git")
            .args(["clone", "--depth", "1"])
            .arg(url)
            .arg(dest)
            .status()
            .map_err(|_| DowncheckError::CloneFailed {
                url: url.to_string(),
                code: None,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(DowncheckError::CloneFailed {
                url: url.to_string(),
                code: status.code(),
            })
        }
    }

    fn install_requirements(&self, workdir: &Path, manifest: &str) -> Result<()> {
        let command = format!("pip install -r {manifest}");
        tracing::debug!("{} (in {})", command, workdir.display());

        let status = Command::new("pip")
            .args(["install", "-r", manifest])
            .current_dir(workdir)
            .status()
            .map_err(|_| DowncheckError::DependencyInstall {
                command: command.clone(),
                code: None,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(DowncheckError::DependencyInstall {
                command,
                code: status.code(),
            })
        }
    }

    fn install_editable(&self, workdir: &Path, extras: &str) -> Result<()> {
        let spec = format!(".[{extras}]");
        let command = format!("pip install -e {spec}");
        tracing::debug!("{} (in {})", command, workdir.display());

        let status = Command::new("pip")
            .args(["install", "-e", &spec])
            .current_dir(workdir)
            .status()
            .map_err(|_| DowncheckError::DependencyInstall {
                command: command.clone(),
                code: None,
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(DowncheckError::DependencyInstall {
                command,
                code: status.code(),
            })
        }
    }

    fn run_tests(&self, workdir: &Path, test_path: &str) -> Result<i32> {
        tracing::debug!("pytest {} (in {})", test_path, workdir.display());

        let status = Command::new("pytest")
            .arg(test_path)
            .current_dir(workdir)
            .status()?;

        // Killed by signal leaves no code; report failure.
        Ok(status.code().unwrap_or(1))
    }
}
