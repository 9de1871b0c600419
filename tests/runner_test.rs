//! Integration tests for the install/run pipelines through the public API.

use downcheck::error::DowncheckError;
use downcheck::runner;
use downcheck::targets::{DownstreamTarget, TargetRegistry, DEFAULT_TARGET};
use downcheck::toolchain::{MockToolchain, ToolCall};
use tempfile::TempDir;

fn default_target() -> DownstreamTarget {
    TargetRegistry::builtin().get(DEFAULT_TARGET).unwrap().clone()
}

#[test]
fn install_performs_clone_then_both_installs() {
    let temp = TempDir::new().unwrap();
    let mock = MockToolchain::new();

    let workdir = runner::install(&default_target(), temp.path(), &mock).unwrap();

    assert_eq!(workdir.path(), temp.path().join("pyopenssl"));
    let kinds: Vec<&str> = mock
        .calls()
        .iter()
        .map(|c| match c {
            ToolCall::Clone { .. } => "clone",
            ToolCall::InstallRequirements { .. } => "requirements",
            ToolCall::InstallEditable { .. } => "editable",
            ToolCall::RunTests { .. } => "tests",
        })
        .collect();
    assert_eq!(kinds, vec!["clone", "requirements", "editable"]);
}

#[test]
fn clone_failure_stops_the_pipeline() {
    let temp = TempDir::new().unwrap();
    let mock = MockToolchain::new().fail_clone(128);

    let err = runner::install(&default_target(), temp.path(), &mock).unwrap_err();

    assert!(matches!(err, DowncheckError::CloneFailed { .. }));
    assert_eq!(err.exit_code(), 128);
    assert_eq!(mock.call_count(), 1);
}

#[test]
fn test_exit_code_five_passes_through() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("pyopenssl")).unwrap();
    let mock = MockToolchain::new().with_test_exit_code(5);

    let code = runner::run(&default_target(), temp.path(), &mock).unwrap();
    assert_eq!(code, 5);
}

#[test]
fn test_exit_code_zero_passes_through() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir(temp.path().join("pyopenssl")).unwrap();
    let mock = MockToolchain::new();

    let code = runner::run(&default_target(), temp.path(), &mock).unwrap();
    assert_eq!(code, 0);
}

#[test]
fn install_twice_fails_deterministically() {
    let temp = TempDir::new().unwrap();
    let target = default_target();

    runner::install(&target, temp.path(), &MockToolchain::new()).unwrap();

    let second = MockToolchain::new();
    let err = runner::install(&target, temp.path(), &second).unwrap_err();
    assert!(matches!(err, DowncheckError::CheckoutExists { .. }));
    assert_eq!(second.call_count(), 0);
}

#[test]
fn custom_target_coordinates_flow_through_pipeline() {
    let temp = TempDir::new().unwrap();
    let target = DownstreamTarget {
        name: "twisted".to_string(),
        repo_url: "https://github.com/twisted/twisted".to_string(),
        checkout_dir: "twisted".to_string(),
        requirements: "requirements.txt".to_string(),
        extras: "tls".to_string(),
        test_path: "src/twisted/test".to_string(),
    };
    let mock = MockToolchain::new().with_test_exit_code(0);

    runner::install(&target, temp.path(), &mock).unwrap();
    runner::run(&target, temp.path(), &mock).unwrap();

    let calls = mock.calls();
    assert!(matches!(
        &calls[2],
        ToolCall::InstallEditable { extras, .. } if extras == "tls"
    ));
    assert!(matches!(
        &calls[3],
        ToolCall::RunTests { test_path, .. } if test_path == "src/twisted/test"
    ));
}
