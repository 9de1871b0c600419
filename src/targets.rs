//! Downstream target definitions and the builtin registry.
//!
//! A target names a third-party project whose test suite validates the
//! current checkout. Each target carries the fixed coordinates the
//! pipelines need: where to clone from, the directory name of the
//! checkout, the dependency manifest, the extras set for the editable
//! install, and the test directory.

use crate::error::{DowncheckError, Result};

/// Name of the target used when `--target` is not given.
pub const DEFAULT_TARGET: &str = "pyopenssl";

/// Coordinates of one downstream project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownstreamTarget {
    /// Registry name, also the default checkout directory name.
    pub name: String,

    /// Repository URL for the shallow clone.
    pub repo_url: String,

    /// Directory name the clone lands in, relative to the project root.
    pub checkout_dir: String,

    /// Dependency manifest path relative to the checkout.
    pub requirements: String,

    /// Extras set enabled for the editable install.
    pub extras: String,

    /// Test directory path relative to the checkout.
    pub test_path: String,
}

/// Registry of known downstream targets.
///
/// Builtins come first; targets loaded from a file override builtins
/// with the same name.
#[derive(Debug, Clone, Default)]
pub struct TargetRegistry {
    targets: Vec<DownstreamTarget>,
}

impl TargetRegistry {
    /// Registry containing only the compiled-in targets.
    pub fn builtin() -> Self {
        Self {
            targets: vec![DownstreamTarget {
                name: "pyopenssl".to_string(),
                repo_url: "https://github.com/pyca/pyopenssl".to_string(),
                checkout_dir: "pyopenssl".to_string(),
                requirements: "requirements.txt".to_string(),
                extras: "test".to_string(),
                test_path: "tests".to_string(),
            }],
        }
    }

    /// Merge additional targets into the registry.
    ///
    /// A target whose name matches an existing entry replaces it.
    pub fn merge(mut self, extra: Vec<DownstreamTarget>) -> Self {
        for target in extra {
            if let Some(existing) = self.targets.iter_mut().find(|t| t.name == target.name) {
                *existing = target;
            } else {
                self.targets.push(target);
            }
        }
        self
    }

    /// Look up a target by name.
    pub fn get(&self, name: &str) -> Result<&DownstreamTarget> {
        self.targets
            .iter()
            .find(|t| t.name == name)
            .ok_or_else(|| DowncheckError::UnknownTarget {
                name: name.to_string(),
            })
    }

    /// All registered targets, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DownstreamTarget> {
        self.targets.iter()
    }

    /// Number of registered targets.
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
