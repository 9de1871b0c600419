//! Downcheck - downstream test-suite runner for CI.
//!
//! Downcheck validates the current checkout of a parent project against
//! a dependent third-party project's own test suite. CI invokes it in
//! two phases: `install` shallow-clones the downstream project and
//! installs its dependencies plus itself in editable mode, and a later
//! `run` executes the downstream test suite, propagating its exit code
//! verbatim.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Targets file loading and schema
//! - [`error`] - Error types and result aliases
//! - [`runner`] - Install and run pipelines
//! - [`targets`] - Downstream target definitions and the builtin registry
//! - [`toolchain`] - External tool invocation (git, pip, pytest)
//! - [`workdir`] - Explicit working-directory handling
//!
//! # Example
//!
//! ```
//! use downcheck::targets::TargetRegistry;
//!
//! let registry = TargetRegistry::builtin();
//! let target = registry.get("pyopenssl").unwrap();
//! assert_eq!(target.checkout_dir, "pyopenssl");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod runner;
pub mod targets;
pub mod toolchain;
pub mod workdir;

pub use error::{DowncheckError, Result};
