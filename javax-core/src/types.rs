use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The class that generated members belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassInfo {
    /// Access modifier (`public`, `protected`, `private`), or empty for
    /// package-private.
    pub accessor: String,
    pub name: String,
}

impl ClassInfo {
    pub fn new(accessor: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            accessor: accessor.into(),
            name: name.into(),
        }
    }

    /// Whether the class has no access modifier.
    pub fn is_package_private(&self) -> bool {
        self.accessor.is_empty()
    }
}

/// A single instance field declaration.
///
/// `ty` is kept verbatim (e.g. `Map<String, Integer>`), it is never parsed
/// into a structured type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldInfo {
    #[serde(rename = "type")]
    pub ty: String,
    pub name: String,
}

impl FieldInfo {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }

    /// `<type> <name>`, as used by parameters and field declarations.
    pub fn declaration(&self) -> String {
        format!("{} {}", self.ty, self.name)
    }
}

/// The kind of declaration a generation request asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    Constructor,
    Builder,
    Getters,
}

impl DeclarationKind {
    /// All kinds, in menu order.
    pub const ALL: [Self; 3] = [Self::Constructor, Self::Builder, Self::Getters];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Constructor => "constructor",
            Self::Builder => "builder",
            Self::Getters => "getters",
        }
    }

    /// Whether the enclosing class must be located for this kind.
    pub fn needs_class(&self) -> bool {
        matches!(self, Self::Constructor | Self::Builder)
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown declaration kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseKindError(pub String);

impl fmt::Display for ParseKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown declaration kind '{}' (expected constructor, builder or getters)",
            self.0
        )
    }
}

impl std::error::Error for ParseKindError {}

impl FromStr for DeclarationKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constructor" => Ok(Self::Constructor),
            "builder" => Ok(Self::Builder),
            "getters" => Ok(Self::Getters),
            other => Err(ParseKindError(other.to_string())),
        }
    }
}
