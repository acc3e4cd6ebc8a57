use std::path::{Path, PathBuf};

use crate::{Config, Error, Result};

/// Represents a javax.toml file with both raw content and parsed settings.
#[derive(Debug)]
pub struct JavaxToml {
    path: PathBuf,
    content: String,
    config: Config,
}

impl JavaxToml {
    /// Open and parse a javax.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let config = Config::from_str_with_filename(&content, &filename)?;

        Ok(Self {
            path,
            content,
            config,
        })
    }

    /// Open the file if it exists, otherwise fall back to default settings.
    ///
    /// A file that exists but fails to parse is still an error.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::open(path)
        } else {
            Ok(Self {
                path: path.to_path_buf(),
                content: String::new(),
                config: Config::default(),
            })
        }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content (empty when defaults were used).
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Get the parsed settings.
    pub fn config(&self) -> &Config {
        &self.config
    }
}
