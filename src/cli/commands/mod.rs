//! CLI command implementations.

pub mod dispatcher;
pub mod install;
pub mod list;
pub mod run;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
