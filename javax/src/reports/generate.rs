//! Generate command report.

use std::path::PathBuf;

use javax_codegen::{Generated, pipeline::Severity};

use super::output::{Output, Report};

/// What happened to the generated snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Printed to stdout.
    Printed,
    /// Inserted into the file, starting at `line`.
    Written { path: PathBuf, line: usize },
    /// Nothing matched the selection; the file was not touched.
    Skipped { path: Option<PathBuf> },
}

/// Report data from one generation request.
#[derive(Debug)]
pub struct GenerateReport {
    pub generated: Generated,
    pub outcome: Outcome,
}

impl GenerateReport {
    fn summary(&self) -> String {
        let count = self.generated.fields.len();
        let plural = if count == 1 { "" } else { "s" };
        match &self.generated.class {
            Some(class) => format!(
                "{} for {} ({} field{})",
                self.generated.kind, class.name, count, plural
            ),
            None => format!("{} ({} field{})", self.generated.kind, count, plural),
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for diag in &self.generated.diagnostics {
            let msg = match &diag.location {
                Some(loc) => format!("{} ({})", diag.message, loc),
                None => diag.message.clone(),
            };
            match diag.severity {
                Severity::Warning => out.warning(&msg),
                Severity::Info => out.note(&msg),
            }
        }

        match &self.outcome {
            Outcome::Printed => out.code(&self.generated.code),
            Outcome::Written { path, line } => out.preformatted(&format!(
                "Inserted {} into {}:{}",
                self.summary(),
                path.display(),
                line
            )),
            Outcome::Skipped { path: Some(path) } => {
                out.note(&format!("{} left untouched", path.display()))
            }
            Outcome::Skipped { path: None } => {}
        }
    }
}
