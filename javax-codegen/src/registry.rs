//! Command registry for host menus.
//!
//! The registry is an ordered list of `(label, kind)` pairs. It is built
//! once at startup with explicit registration calls and handed by
//! reference to whatever selector the host shows.
//!
//! # Example
//!
//! ```ignore
//! let registry = CommandRegistry::builtin();
//!
//! for entry in registry.entries() {
//!     println!("{}: {}", entry.kind, entry.label);
//! }
//! ```

use indexmap::IndexMap;
use javax_core::DeclarationKind;
use serde::Serialize;

/// A menu entry: what the user sees and what it generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandEntry<'a> {
    pub label: &'a str,
    pub kind: DeclarationKind,
}

/// Ordered set of commands, keyed by label.
///
/// Registering an existing label replaces its kind but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: IndexMap<String, DeclarationKind>,
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The three built-in commands in menu order.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry
            .register("Generate constructor", DeclarationKind::Constructor)
            .register("Generate builder", DeclarationKind::Builder)
            .register("Generate getters", DeclarationKind::Getters);
        registry
    }

    /// Register a command.
    pub fn register(&mut self, label: impl Into<String>, kind: DeclarationKind) -> &mut Self {
        self.commands.insert(label.into(), kind);
        self
    }

    /// Entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = CommandEntry<'_>> {
        self.commands.iter().map(|(label, kind)| CommandEntry {
            label,
            kind: *kind,
        })
    }

    /// Labels in registration order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Get the entry at menu position `index`.
    pub fn get(&self, index: usize) -> Option<CommandEntry<'_>> {
        self.commands
            .get_index(index)
            .map(|(label, kind)| CommandEntry { label, kind: *kind })
    }

    /// Look up a command by label.
    pub fn find(&self, label: &str) -> Option<DeclarationKind> {
        self.commands.get(label).copied()
    }

    /// Get the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
