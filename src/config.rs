//! Targets file loading and schema.
//!
//! The targets file is an optional YAML document mapping target names
//! to checkout coordinates. Entries extend the builtin registry or
//! override a builtin with the same name:
//!
//! ```yaml
//! targets:
//!   pyopenssl:
//!     repo: https://github.com/pyca/pyopenssl
//!   twisted:
//!     repo: https://github.com/twisted/twisted
//!     requirements: requirements.txt
//!     extras: tls
//!     tests: src/twisted/test
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{DowncheckError, Result};
use crate::targets::DownstreamTarget;

/// Top-level targets file schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetsFile {
    /// Target name to coordinates. A BTreeMap keeps load order stable.
    #[serde(default)]
    pub targets: BTreeMap<String, TargetSpec>,
}

/// Coordinates of one target as written in the file.
///
/// Only the repository URL is required; everything else defaults to
/// the conventions the builtin targets use.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetSpec {
    /// Repository URL for the shallow clone.
    pub repo: String,

    /// Checkout directory name; defaults to the target name.
    #[serde(default)]
    pub dir: Option<String>,

    /// Dependency manifest path relative to the checkout.
    #[serde(default = "default_requirements")]
    pub requirements: String,

    /// Extras set for the editable install.
    #[serde(default = "default_extras")]
    pub extras: String,

    /// Test directory path relative to the checkout.
    #[serde(default = "default_tests")]
    pub tests: String,
}

fn default_requirements() -> String {
    "requirements.txt".to_string()
}

fn default_extras() -> String {
    "test".to_string()
}

fn default_tests() -> String {
    "tests".to_string()
}

impl TargetSpec {
    fn into_target(self, name: &str) -> DownstreamTarget {
        DownstreamTarget {
            name: name.to_string(),
            repo_url: self.repo,
            checkout_dir: self.dir.unwrap_or_else(|| name.to_string()),
            requirements: self.requirements,
            extras: self.extras,
            test_path: self.tests,
        }
    }
}

/// Load targets from a YAML file.
pub fn load_targets(path: &Path) -> Result<Vec<DownstreamTarget>> {
    let contents = std::fs::read_to_string(path)?;
    parse_targets(&contents).map_err(|message| DowncheckError::ConfigParseError {
        path: path.to_path_buf(),
        message,
    })
}

fn parse_targets(contents: &str) -> std::result::Result<Vec<DownstreamTarget>, String> {
    let file: TargetsFile = serde_yaml::from_str(contents).map_err(|e| e.to_string())?;
    Ok(file
        .targets
        .into_iter()
        .map(|(name, spec)| spec.into_target(&name))
        .collect())
}
