//! External tool invocation.
//!
//! The pipelines talk to source control, the package installer, and the
//! test runner through the [`Toolchain`] trait. [`SystemToolchain`] is
//! the real subprocess-backed implementation; [`MockToolchain`] records
//! calls for tests.

pub mod mock;
pub mod system;

use std::path::Path;

use crate::error::Result;

pub use mock::{MockToolchain, ToolCall};
pub use system::SystemToolchain;

/// The external collaborators the pipelines depend on.
///
/// Tool output is never captured or reformatted: implementations let
/// the invoked tools write directly to the inherited stdout/stderr.
pub trait Toolchain {
    /// Shallow-clone (depth 1) `url` into `dest`.
    fn clone_shallow(&self, url: &str, dest: &Path) -> Result<()>;

    /// Install the packages listed in `manifest`, relative to `workdir`.
    fn install_requirements(&self, workdir: &Path, manifest: &str) -> Result<()>;

    /// Install the package at `workdir` in editable mode with `extras` enabled.
    fn install_editable(&self, workdir: &Path, extras: &str) -> Result<()>;

    /// Run the test suite at `test_path`, relative to `workdir`.
    ///
    /// Returns the test runner's raw exit code. A non-zero code is a
    /// test outcome, not a toolchain error, and is passed through to
    /// the caller verbatim.
    fn run_tests(&self, workdir: &Path, test_path: &str) -> Result<i32>;
}
