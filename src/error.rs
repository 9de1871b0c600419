//! Error types for downcheck operations.
//!
//! This module defines [`DowncheckError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `DowncheckError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `DowncheckError::Other`) for unexpected errors
//! - No error is retried or recovered internally: the first failure
//!   terminates the process with [`DowncheckError::exit_code`]

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for downcheck operations.
#[derive(Debug, Error)]
pub enum DowncheckError {
    /// Requested downstream target is not in the registry.
    #[error("Unknown target: {name}")]
    UnknownTarget { name: String },

    /// Failed to parse the targets file.
    #[error("Failed to parse targets file at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Clone destination already exists from a prior install.
    #[error("Checkout already exists at {path}; remove it and re-run install")]
    CheckoutExists { path: PathBuf },

    /// Expected checkout directory is missing.
    #[error("Checkout not found at {path}; run 'downcheck install' first")]
    CheckoutMissing { path: PathBuf },

    /// Source-control checkout failed.
    #[error("Clone of {url} failed with exit code {code:?}")]
    CloneFailed { url: String, code: Option<i32> },

    /// Package installer exited non-zero.
    #[error("Dependency install failed with exit code {code:?}: {command}")]
    DependencyInstall { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DowncheckError {
    /// Process exit code for this error.
    ///
    /// External-tool failures surface the tool's own exit code when the
    /// tool produced one; everything else (usage, missing paths, signal
    /// terminations) maps to 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::CloneFailed { code, .. } | Self::DependencyInstall { code, .. } => {
                code.unwrap_or(1)
            }
            _ => 1,
        }
    }
}

/// Result type alias for downcheck operations.
pub type Result<T> = std::result::Result<T, DowncheckError>;
