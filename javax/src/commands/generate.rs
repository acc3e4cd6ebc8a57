use std::{num::NonZeroUsize, path::PathBuf};

use clap::Args;
use eyre::{Context, Result};
use javax_codegen::{GenerationRequest, Pipeline};
use javax_config::{CONFIG_FILE, JavaxToml};
use javax_core::DeclarationKind;

use super::UnwrapOrExit;
use crate::{
    ops::{InsertAt, LineRange, insert_snippet, insertion_point, select},
    reports::{GenerateReport, Outcome, Report, TerminalOutput},
};

/// Options shared by every generator subcommand.
#[derive(Args)]
pub struct GenerateArgs {
    /// Java source file
    pub file: PathBuf,

    /// Selected lines, 1-based and inclusive (e.g. 3-7). Repeat for
    /// discontiguous selections; defaults to the whole file
    #[arg(short, long = "lines", value_name = "A-B")]
    pub lines: Vec<LineRange>,

    /// Spaces per indent level (overrides javax.toml and the source file)
    #[arg(short, long)]
    pub indent: Option<NonZeroUsize>,

    /// Path to javax.toml (defaults to ./javax.toml, optional)
    #[arg(short, long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Insert the snippet into FILE instead of printing it
    #[arg(short, long)]
    pub write: bool,

    /// Where --write inserts the snippet (`selection` needs --lines)
    #[arg(long, value_enum, default_value_t = InsertAt::ClassEnd)]
    pub at: InsertAt,
}

impl GenerateArgs {
    /// Generate `kind` for the selected lines of the file.
    pub fn run(&self, kind: DeclarationKind) -> Result<()> {
        let javax_toml = JavaxToml::open_or_default(&self.config).unwrap_or_exit();
        let source = std::fs::read_to_string(&self.file)
            .wrap_err_with(|| format!("Failed to read {}", self.file.display()))?;
        let selection = select(&source, &self.lines)?;
        tracing::debug!(
            file = %self.file.display(),
            ranges = self.lines.len(),
            bytes = selection.text.len(),
            "selection"
        );

        let mut request = GenerationRequest::new(kind, source.as_str(), selection.text.as_str());
        if selection.ranged {
            request = request.at_offset(selection.start);
        }
        if let Some(indent) = self.indent {
            request = request.indent_size(indent.get());
        }

        let generated = Pipeline::from_config(javax_toml.config())
            .run(request)
            .unwrap_or_exit();

        let outcome = if generated.is_empty() {
            Outcome::Skipped {
                path: self.write.then(|| self.file.clone()),
            }
        } else if self.write {
            let offset = insertion_point(&source, self.at, &selection, generated.body.as_ref())?;
            let (content, line) = insert_snippet(&source, offset, &generated.code);
            std::fs::write(&self.file, content)
                .wrap_err_with(|| format!("Failed to write {}", self.file.display()))?;
            Outcome::Written {
                path: self.file.clone(),
                line,
            }
        } else {
            Outcome::Printed
        };

        GenerateReport { generated, outcome }.render(&mut TerminalOutput::new());
        Ok(())
    }
}
