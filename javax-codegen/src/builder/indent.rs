//! Indentation configuration for generated code.

use javax_config::Config;

/// Width of one indent level, in spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(usize);

impl Indent {
    /// 2-space indentation, used when nothing else is known.
    pub const DEFAULT: Self = Self(Config::DEFAULT_INDENT_SIZE);

    /// Create an indent of `size` spaces.
    ///
    /// Settings and command-line flags reject zero; here it simply
    /// flattens the output.
    pub const fn spaces(size: usize) -> Self {
        Self(size)
    }

    /// Number of spaces per level.
    pub fn size(&self) -> usize {
        self.0
    }

    /// The whitespace prefix for `level` levels.
    pub fn at(&self, level: usize) -> String {
        " ".repeat(level * self.0)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::DEFAULT
    }
}
