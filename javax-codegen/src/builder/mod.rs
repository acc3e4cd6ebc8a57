//! Code generation building blocks.
//!
//! - [`Decl`] - Declaration tree node (block, statement, blank line)
//! - [`Renderable`] - Trait for templates that produce declaration trees
//! - [`Indent`] - Indent unit used by the formatter

mod decl;
mod indent;

pub use decl::{Decl, Renderable, modifiers, separated, write_decls};
pub use indent::Indent;
