//! Command-line interface: argument parsing and command dispatch.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, InstallArgs, RunArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
