//! Call-recording toolchain for tests.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::error::{DowncheckError, Result};
use crate::toolchain::Toolchain;

/// One recorded collaborator invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolCall {
    Clone { url: String, dest: PathBuf },
    InstallRequirements { workdir: PathBuf, manifest: String },
    InstallEditable { workdir: PathBuf, extras: String },
    RunTests { workdir: PathBuf, test_path: String },
}

/// Toolchain double that records every call and returns scripted results.
///
/// A successful `clone_shallow` creates the destination directory so
/// pipelines that resolve the checkout afterwards see it on disk, the
/// same observable effect a real clone has.
#[derive(Debug, Default)]
pub struct MockToolchain {
    calls: RefCell<Vec<ToolCall>>,
    clone_fails_with: Option<i32>,
    requirements_fails_with: Option<i32>,
    editable_fails_with: Option<i32>,
    test_exit_code: i32,
}

impl MockToolchain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a clone failure with the given tool exit code.
    pub fn fail_clone(mut self, code: i32) -> Self {
        self.clone_fails_with = Some(code);
        self
    }

    /// Script a requirements-install failure with the given exit code.
    pub fn fail_requirements(mut self, code: i32) -> Self {
        self.requirements_fails_with = Some(code);
        self
    }

    /// Script an editable-install failure with the given exit code.
    pub fn fail_editable(mut self, code: i32) -> Self {
        self.editable_fails_with = Some(code);
        self
    }

    /// Script the test runner's exit code.
    pub fn with_test_exit_code(mut self, code: i32) -> Self {
        self.test_exit_code = code;
        self
    }

    /// All calls recorded so far, in invocation order.
    pub fn calls(&self) -> Vec<ToolCall> {
        self.calls.borrow().clone()
    }

    /// Number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    fn record(&self, call: ToolCall) {
        self.calls.borrow_mut().push(call);
    }
}

impl Toolchain for MockToolchain {
    fn clone_shallow(&self, url: &str, dest: &Path) -> Result<()> {
        self.record(ToolCall::Clone {
            url: url.to_string(),
            dest: dest.to_path_buf(),
        });

        if let Some(code) = self.clone_fails_with {
            return Err(DowncheckError::CloneFailed {
                url: url.to_string(),
                code: Some(code),
            });
        }

        std::fs::create_dir_all(dest)?;
        Ok(())
    }

    fn install_requirements(&self, workdir: &Path, manifest: &str) -> Result<()> {
        self.record(ToolCall::InstallRequirements {
            workdir: workdir.to_path_buf(),
            manifest: manifest.to_string(),
        });

        match self.requirements_fails_with {
            Some(code) => Err(DowncheckError::DependencyInstall {
                command: format!("pip install -r {manifest}"),
                code: Some(code),
            }),
            None => Ok(()),
        }
    }

    fn install_editable(&self, workdir: &Path, extras: &str) -> Result<()> {
        self.record(ToolCall::InstallEditable {
            workdir: workdir.to_path_buf(),
            extras: extras.to_string(),
        });

        match self.editable_fails_with {
            Some(code) => Err(DowncheckError::DependencyInstall {
                command: format!("pip install -e .[{extras}]"),
                code: Some(code),
            }),
            None => Ok(()),
        }
    }

    fn run_tests(&self, workdir: &Path, test_path: &str) -> Result<i32> {
        self.record(ToolCall::RunTests {
            workdir: workdir.to_path_buf(),
            test_path: test_path.to_string(),
        });

        Ok(self.test_exit_code)
    }
}
