//! Settings parsing from files and strings.

use std::{path::Path, str::FromStr};

use crate::{Config, Error, Result, error::SourceContext};

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_config(s, crate::CONFIG_FILE)
    }
}

impl Config {
    /// Parse a javax.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_config(&content, &path.display().to_string())
    }

    /// Parse javax.toml content with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_config(content, filename)
    }
}

/// Parse settings from content with the given filename for error reporting.
pub fn parse_config(content: &str, filename: &str) -> Result<Config> {
    let source_ctx = SourceContext::new(content, filename);
    let config: Config = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_config(&config, &source_ctx)?;
    Ok(config)
}

/// Validate settings after parsing.
fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    if config.format.indent_size == Some(0) {
        return Err(ctx.invalid_value_error(
            "indent_size",
            "indent_size must be a positive number of spaces",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConstructorPolicy;

    #[test]
    fn test_parse_full_config() {
        let config: Config = r#"
            [format]
            indent_size = 4
            initial_indent = 2

            [builder]
            constructor = "never"
            static = true
        "#
        .parse()
        .unwrap();

        assert_eq!(config.format.indent_size, Some(4));
        assert_eq!(config.format.initial_indent, 2);
        assert_eq!(config.builder.constructor, ConstructorPolicy::Never);
        assert!(config.builder.static_builder);
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: Config = "[format]\nindent_size = 3\n".parse().unwrap();
        assert_eq!(config.format.indent_size, Some(3));
        assert_eq!(config.format.initial_indent, 1);
        assert_eq!(config.builder.constructor, ConstructorPolicy::Auto);
    }

    #[test]
    fn test_zero_indent_is_rejected() {
        let err = "[format]\nindent_size = 0\n".parse::<Config>().unwrap_err();
        match *err {
            Error::InvalidValue { key, span, .. } => {
                assert_eq!(key, "indent_size");
                assert!(span.is_some());
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_key_is_a_parse_error() {
        let err = "[format]\nindnet_size = 2\n".parse::<Config>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_unknown_policy_is_a_parse_error() {
        let err = "[builder]\nconstructor = \"sometimes\"\n"
            .parse::<Config>()
            .unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }
}
