//! Explicit working-directory handling.
//!
//! The pipelines never mutate the process-global current directory.
//! Each step receives a validated [`WorkingDirectory`] and passes it to
//! subprocesses via their own working-directory option, so a failed
//! step cannot leave the process somewhere unexpected.

use std::path::{Path, PathBuf};

use crate::error::{DowncheckError, Result};

/// A checkout directory that has been verified to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingDirectory(PathBuf);

impl WorkingDirectory {
    /// Resolve the checkout directory under `root`.
    ///
    /// Fails with `CheckoutMissing` when the directory is absent, which
    /// covers both a failed clone and a `run` invoked before `install`.
    pub fn resolve(root: &Path, checkout_dir: &str) -> Result<Self> {
        let path = root.join(checkout_dir);
        if path.is_dir() {
            Ok(Self(path))
        } else {
            Err(DowncheckError::CheckoutMissing { path })
        }
    }

    /// The validated path.
    pub fn path(&self) -> &Path {
        &self.0
    }
}
