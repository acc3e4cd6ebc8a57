use clap::Args;
use eyre::{Context, Result};
use javax_codegen::{CommandEntry, CommandRegistry};

use crate::reports::{ListReport, Report, TerminalOutput};

#[derive(Args)]
pub struct ListCommand {
    /// Print the generators as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let registry = CommandRegistry::builtin();

        if self.json {
            let entries: Vec<CommandEntry<'_>> = registry.entries().collect();
            let json =
                serde_json::to_string_pretty(&entries).wrap_err("Failed to serialize generators")?;
            println!("{}", json);
        } else {
            ListReport {
                registry: &registry,
            }
            .render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
