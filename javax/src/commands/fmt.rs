use std::{
    io::{self, Read},
    num::NonZeroUsize,
    path::PathBuf,
};

use clap::Args;
use eyre::{Context, Result};
use javax_codegen::{Formatter, builder::Indent, extract::infer_indent_size};
use javax_config::{CONFIG_FILE, Config, JavaxToml};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct FmtCommand {
    /// Snippet to re-indent (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Spaces per indent level (defaults to javax.toml, then the input, then 2)
    #[arg(short, long)]
    pub indent: Option<NonZeroUsize>,

    /// Indent level of the outermost lines (defaults to javax.toml)
    #[arg(short, long)]
    pub level: Option<usize>,

    /// Path to javax.toml (defaults to ./javax.toml, optional)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Check if the input is formatted without making changes (exit 1 if not)
    #[arg(long)]
    pub check: bool,
}

impl FmtCommand {
    pub fn run(&self) -> Result<()> {
        let javax_toml = JavaxToml::open_or_default(&self.config).unwrap_or_exit();
        let config = javax_toml.config();
        let input = self.read_input()?;

        let indent = self
            .indent
            .map(NonZeroUsize::get)
            .or(config.format.indent_size)
            .or_else(|| infer_indent_size(&input))
            .unwrap_or(Config::DEFAULT_INDENT_SIZE);
        let level = self.level.unwrap_or(config.format.initial_indent);

        let formatted: javax_codegen::Result<String> = Formatter::new(Indent::spaces(indent), level)
            .format(&input)
            .map_err(Into::into);
        let formatted = formatted.unwrap_or_exit();
        let name = self.display_name();

        if self.check {
            if input != formatted {
                eprintln!("error: {} is not formatted", name);
                eprintln!("Run `javax fmt` to fix.");
                std::process::exit(1);
            }
            println!("{} is formatted", name);
        } else if let Some(path) = &self.file {
            if input == formatted {
                println!("{} is already formatted", name);
            } else {
                std::fs::write(path, &formatted)
                    .wrap_err_with(|| format!("Failed to write {}", name))?;
                println!("Formatted {}", name);
            }
        } else {
            print!("{}", formatted);
        }

        Ok(())
    }

    fn read_input(&self) -> Result<String> {
        match &self.file {
            Some(path) => std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read {}", path.display())),
            None => {
                let mut input = String::new();
                io::stdin()
                    .read_to_string(&mut input)
                    .wrap_err("Failed to read stdin")?;
                Ok(input)
            }
        }
    }

    fn display_name(&self) -> String {
        self.file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<stdin>".to_string())
    }
}
