//! Pipeline inputs and outputs.

use std::ops::Range;

use javax_config::{Config, ConstructorPolicy};
use javax_core::{ClassInfo, DeclarationKind, FieldInfo};
use serde::Serialize;

use super::{Diagnostic, Severity};

/// What the host asks for: a declaration kind, the whole buffer, and the
/// selected text the fields are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub kind: DeclarationKind,
    /// Full source text, used to find the class.
    pub source: String,
    /// Selected spans, already joined with newlines.
    pub selection: String,
    /// Byte offset of the selection start in `source`, if known.
    pub selection_offset: Option<usize>,
    /// Indent width requested by the host; wins over every other setting.
    pub indent_size: Option<usize>,
}

impl GenerationRequest {
    pub fn new(
        kind: DeclarationKind,
        source: impl Into<String>,
        selection: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            source: source.into(),
            selection: selection.into(),
            selection_offset: None,
            indent_size: None,
        }
    }

    /// Resolve the class around `offset` instead of the first one.
    pub fn at_offset(mut self, offset: usize) -> Self {
        self.selection_offset = Some(offset);
        self
    }

    /// Override the indent width.
    pub fn indent_size(mut self, size: usize) -> Self {
        self.indent_size = Some(size);
        self
    }
}

/// Settings that apply to every request a pipeline runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Indent width; `None` means infer from the source.
    pub indent_size: Option<usize>,
    /// Nesting level the snippet starts at.
    pub initial_indent: usize,
    /// Whether builders also get the outer constructor.
    pub constructor: ConstructorPolicy,
    /// Emit `static class Builder`.
    pub static_builder: bool,
}

impl GenerateOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            indent_size: config.format.indent_size,
            initial_indent: config.format.initial_indent,
            constructor: config.builder.constructor,
            static_builder: config.builder.static_builder,
        }
    }
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// A finished snippet plus what the pipeline learned on the way.
#[derive(Debug, Clone, Serialize)]
pub struct Generated {
    pub kind: DeclarationKind,
    /// Formatted code, ready for insertion.
    pub code: String,
    /// The class the code belongs to (getters don't need one).
    pub class: Option<ClassInfo>,
    /// Byte span of the enclosing class body, braces included.
    pub body: Option<Range<usize>>,
    pub fields: Vec<FieldInfo>,
    /// Indent width the snippet was formatted with.
    pub indent_size: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl Generated {
    /// No field matched the selection.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }
}
