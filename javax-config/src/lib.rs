//! `javax.toml` settings for the javax generator.
//!
//! The settings file is optional. When present it controls the indent
//! width of generated code, the nesting level it is emitted at, and how
//! builder requests treat the outer class constructor.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod config;
mod error;
mod file;
mod parse;

pub use config::{BuilderConfig, Config, ConstructorPolicy, FormatConfig};
pub use error::{Error, Result, SourceContext};
pub use file::JavaxToml;
pub use parse::parse_config;

/// Default settings file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "javax.toml";
