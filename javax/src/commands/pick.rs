use clap::Args;
use dialoguer::{Select, theme::ColorfulTheme};
use eyre::{Context, Result, eyre};
use javax_codegen::CommandRegistry;
use javax_core::DeclarationKind;

use super::generate::GenerateArgs;

#[derive(Args)]
pub struct PickCommand {
    #[command(flatten)]
    pub args: GenerateArgs,
}

impl PickCommand {
    pub fn run(&self) -> Result<()> {
        let registry = CommandRegistry::builtin();
        let kind = Self::prompt_kind(&registry)?;
        self.args.run(kind)
    }

    fn prompt_kind(registry: &CommandRegistry) -> Result<DeclarationKind> {
        let labels: Vec<&str> = registry.labels().collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What should be generated?")
            .items(&labels)
            .default(0)
            .interact()
            .wrap_err("Failed to get generator selection")?;

        registry
            .get(selection)
            .map(|entry| entry.kind)
            .ok_or_else(|| eyre!("no generator at menu position {}", selection))
    }
}
