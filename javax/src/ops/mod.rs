//! Host operations.
//!
//! The generator core only sees text. This module plays the editor's part:
//! turning line ranges into a selection and finding where a snippet goes.

pub mod insert;
pub mod selection;

pub use insert::{InsertAt, insert_snippet, insertion_point};
pub use selection::{LineRange, Selection, select};
