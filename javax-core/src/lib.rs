//! Core types and utilities for the javax generator.
//!
//! This crate holds the plain data shared by the extraction, rendering and
//! host crates: the located class, the extracted fields and the kinds of
//! declaration that can be generated.

mod types;
mod utils;

// Fundamental types
pub use types::{ClassInfo, DeclarationKind, FieldInfo, ParseKindError};
// String utilities
pub use utils::{capitalize, getter_name, setter_name};
