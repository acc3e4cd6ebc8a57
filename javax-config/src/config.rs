//! Settings types for javax.toml.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Root of javax.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Indentation of generated code
    #[serde(default)]
    pub format: FormatConfig,

    /// Builder generation
    #[serde(default)]
    pub builder: BuilderConfig,
}

impl Config {
    /// Indent width used when neither the settings nor the source say otherwise.
    pub const DEFAULT_INDENT_SIZE: usize = 2;

    /// Nesting level of generated members: one level inside the class body.
    pub const DEFAULT_INITIAL_INDENT: usize = 1;
}

/// `[format]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// Spaces per indent level. `None` means infer from the source file.
    #[serde(default)]
    pub indent_size: Option<usize>,

    /// Indent level the generated snippet starts at.
    #[serde(default = "default_initial_indent")]
    pub initial_indent: usize,
}

fn default_initial_indent() -> usize {
    Config::DEFAULT_INITIAL_INDENT
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            indent_size: None,
            initial_indent: Config::DEFAULT_INITIAL_INDENT,
        }
    }
}

/// `[builder]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BuilderConfig {
    /// Whether a builder request also emits the constructor `build()` calls.
    #[serde(default)]
    pub constructor: ConstructorPolicy,

    /// Emit `static class Builder` instead of an inner class.
    #[serde(default, rename = "static")]
    pub static_builder: bool,
}

/// When to emit the outer class constructor alongside a builder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstructorPolicy {
    /// Only when the class has no constructor with arguments yet.
    #[default]
    Auto,
    /// Every time.
    Always,
    /// Never; the class is expected to provide one.
    Never,
}

impl ConstructorPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstructorPolicy::Auto => "auto",
            ConstructorPolicy::Always => "always",
            ConstructorPolicy::Never => "never",
        }
    }
}

impl fmt::Display for ConstructorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.format.indent_size, None);
        assert_eq!(config.format.initial_indent, 1);
        assert_eq!(config.builder.constructor, ConstructorPolicy::Auto);
        assert!(!config.builder.static_builder);
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_policy_display() {
        assert_eq!(ConstructorPolicy::Auto.to_string(), "auto");
        assert_eq!(ConstructorPolicy::Always.to_string(), "always");
        assert_eq!(ConstructorPolicy::Never.to_string(), "never");
    }
}
