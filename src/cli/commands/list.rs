//! The `list` command: show known downstream targets.

use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::targets::TargetRegistry;

pub struct ListCommand {
    registry: TargetRegistry,
    quiet: bool,
}

impl ListCommand {
    pub fn new(registry: TargetRegistry, quiet: bool) -> Self {
        Self { registry, quiet }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        for target in self.registry.iter() {
            if self.quiet {
                out.push_str(&target.name);
            } else {
                out.push_str(&format!("{}  {}", target.name, target.repo_url));
            }
            out.push('\n');
        }
        out
    }
}

impl Command for ListCommand {
    fn execute(&self) -> Result<CommandResult> {
        print!("{}", self.render());
        Ok(CommandResult::success())
    }
}
