//! Pattern based extraction from Java source text.
//!
//! Nothing here is a Java parser. Each extractor matches a single-line
//! shape and skips everything else:
//! - [`locate`] / [`locate_at`] / [`locate_body`] - the class generated
//!   members belong to
//! - [`extract_fields`] - `(type, name)` pairs from selected lines
//! - [`has_constructor`] / [`infer_indent_size`] - source heuristics

mod class;
mod fields;
mod source;

pub use class::{LocatedClass, locate, locate_at, locate_body};
pub use fields::{extract_fields, join_selections};
pub use source::{has_constructor, infer_indent_size};
