//! Generation context passed through pipeline phases.

use std::ops::Range;

use javax_core::{ClassInfo, FieldInfo};

use super::{
    GenerateOptions, GenerationRequest,
    diagnostic::{Diagnostic, Severity},
};
use crate::builder::Indent;

/// State of one generation request, filled in phase by phase.
#[derive(Debug)]
pub struct GenerationContext {
    pub request: GenerationRequest,
    pub options: GenerateOptions,
    /// Resolved indent unit.
    pub indent: Indent,
    /// The enclosing class (populated by LocatePhase).
    pub class: Option<ClassInfo>,
    /// Byte span of the enclosing class body in the source.
    pub body: Option<Range<usize>>,
    /// Blocks the enclosing class is nested in.
    pub nesting: usize,
    /// Fields from the selection (populated by ExtractPhase).
    pub fields: Vec<FieldInfo>,
    /// Unindented snippet (populated by RenderPhase).
    pub raw: Option<String>,
    /// Formatted snippet (populated by FormatPhase).
    pub code: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationContext {
    pub fn new(request: GenerationRequest, options: GenerateOptions, indent: Indent) -> Self {
        Self {
            request,
            options,
            indent,
            class: None,
            body: None,
            nesting: 0,
            fields: Vec::new(),
            raw: None,
            code: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn add_warning(&mut self, phase: &str, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(phase, message));
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}
