//! Install and run pipelines.
//!
//! Each pipeline is a fixed step sequence with fail-fast `Result`
//! propagation: the first failing step aborts the remainder, nothing is
//! retried or rolled back, and execution is fully sequential and
//! blocking. The two pipelines map onto the two CI phases: `install`
//! prepares the downstream checkout, a later `run` invocation executes
//! its test suite.

use std::path::Path;

use crate::error::{DowncheckError, Result};
use crate::targets::DownstreamTarget;
use crate::toolchain::Toolchain;
use crate::workdir::WorkingDirectory;

/// Clone the downstream project and install its dependencies.
///
/// Steps, in order: shallow clone into `<root>/<checkout_dir>`, install
/// the dependency manifest, install the checkout itself in editable
/// mode with the target's extras enabled.
///
/// A leftover checkout from a prior install fails deterministically
/// before any subprocess is spawned; CI jobs start from a clean
/// workspace, so an existing directory means something is wrong.
pub fn install(
    target: &DownstreamTarget,
    root: &Path,
    tools: &dyn Toolchain,
) -> Result<WorkingDirectory> {
    let dest = root.join(&target.checkout_dir);
    if dest.exists() {
        return Err(DowncheckError::CheckoutExists { path: dest });
    }

    tracing::debug!("installing downstream target '{}'", target.name);
    tools.clone_shallow(&target.repo_url, &dest)?;

    let workdir = WorkingDirectory::resolve(root, &target.checkout_dir)?;
    tools.install_requirements(workdir.path(), &target.requirements)?;
    tools.install_editable(workdir.path(), &target.extras)?;

    Ok(workdir)
}

/// Run the downstream project's test suite.
///
/// Requires a checkout left behind by a prior [`install`] invocation.
/// The test runner's exit code is returned verbatim; interpreting it is
/// the caller's job.
pub fn run(target: &DownstreamTarget, root: &Path, tools: &dyn Toolchain) -> Result<i32> {
    let workdir = WorkingDirectory::resolve(root, &target.checkout_dir)?;

    tracing::debug!("running test suite for downstream target '{}'", target.name);
    tools.run_tests(workdir.path(), &target.test_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::TargetRegistry;
    use crate::toolchain::{MockToolchain, ToolCall};
    use tempfile::TempDir;

    fn pyopenssl() -> DownstreamTarget {
        TargetRegistry::builtin().get("pyopenssl").unwrap().clone()
    }

    #[test]
    fn install_invokes_steps_in_order() {
        let temp = TempDir::new().unwrap();
        let mock = MockToolchain::new();
        let target = pyopenssl();

        let workdir = install(&target, temp.path(), &mock).unwrap();
        assert_eq!(workdir.path(), temp.path().join("pyopenssl"));

        let checkout = temp.path().join("pyopenssl");
        assert_eq!(
            mock.calls(),
            vec![
                ToolCall::Clone {
                    url: "https://github.com/pyca/pyopenssl".to_string(),
                    dest: checkout.clone(),
                },
                ToolCall::InstallRequirements {
                    workdir: checkout.clone(),
                    manifest: "requirements.txt".to_string(),
                },
                ToolCall::InstallEditable {
                    workdir: checkout,
                    extras: "test".to_string(),
                },
            ]
        );
    }

    #[test]
    fn failed_clone_skips_dependency_install() {
        let temp = TempDir::new().unwrap();
        let mock = MockToolchain::new().fail_clone(128);
        let target = pyopenssl();

        let err = install(&target, temp.path(), &mock).unwrap_err();
        assert_eq!(err.exit_code(), 128);
        assert_eq!(mock.call_count(), 1);
        assert!(matches!(mock.calls()[0], ToolCall::Clone { .. }));
    }

    #[test]
    fn failed_requirements_install_skips_editable_install() {
        let temp = TempDir::new().unwrap();
        let mock = MockToolchain::new().fail_requirements(2);
        let target = pyopenssl();

        let err = install(&target, temp.path(), &mock).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(mock.call_count(), 2);
        assert!(!mock
            .calls()
            .iter()
            .any(|c| matches!(c, ToolCall::InstallEditable { .. })));
    }

    #[test]
    fn failed_editable_install_propagates_tool_code() {
        let temp = TempDir::new().unwrap();
        let mock = MockToolchain::new().fail_editable(3);
        let target = pyopenssl();

        let err = install(&target, temp.path(), &mock).unwrap_err();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(mock.call_count(), 3);
    }

    #[test]
    fn second_install_fails_before_any_subprocess() {
        let temp = TempDir::new().unwrap();
        let target = pyopenssl();

        let first = MockToolchain::new();
        install(&target, temp.path(), &first).unwrap();

        let second = MockToolchain::new();
        let err = install(&target, temp.path(), &second).unwrap_err();
        assert!(matches!(err, DowncheckError::CheckoutExists { .. }));
        assert_eq!(second.call_count(), 0);
    }

    #[test]
    fn run_invokes_test_runner_once_with_test_path() {
        let temp = TempDir::new().unwrap();
        let checkout = temp.path().join("pyopenssl");
        std::fs::create_dir(&checkout).unwrap();

        let mock = MockToolchain::new();
        let code = run(&pyopenssl(), temp.path(), &mock).unwrap();

        assert_eq!(code, 0);
        assert_eq!(
            mock.calls(),
            vec![ToolCall::RunTests {
                workdir: checkout,
                test_path: "tests".to_string(),
            }]
        );
    }

    #[test]
    fn run_passes_test_exit_code_through() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("pyopenssl")).unwrap();

        let mock = MockToolchain::new().with_test_exit_code(5);
        let code = run(&pyopenssl(), temp.path(), &mock).unwrap();
        assert_eq!(code, 5);
    }

    #[test]
    fn run_without_prior_install_fails_without_invoking_tools() {
        let temp = TempDir::new().unwrap();
        let mock = MockToolchain::new();

        let err = run(&pyopenssl(), temp.path(), &mock).unwrap_err();
        assert!(matches!(err, DowncheckError::CheckoutMissing { .. }));
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn install_then_run_uses_same_checkout() {
        let temp = TempDir::new().unwrap();
        let target = pyopenssl();
        let mock = MockToolchain::new();

        let workdir = install(&target, temp.path(), &mock).unwrap();
        let code = run(&target, temp.path(), &mock).unwrap();

        assert_eq!(code, 0);
        match mock.calls().last().unwrap() {
            ToolCall::RunTests { workdir: w, .. } => assert_eq!(w, workdir.path()),
            other => panic!("expected RunTests, got {other:?}"),
        }
    }
}
