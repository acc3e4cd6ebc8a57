//! Generation pipeline.
//!
//! A [`Pipeline`] turns a [`GenerationRequest`] (source text, selected text,
//! declaration kind) into a formatted snippet. The pipeline provides:
//!
//! - Explicit phase boundaries (locate → extract → render → format)
//! - Extra phases appended after the built-in ones
//! - Non-fatal diagnostics collected on the [`GenerationContext`]
//!
//! # Example
//!
//! ```ignore
//! use javax_codegen::{GenerationRequest, Pipeline};
//! use javax_core::DeclarationKind;
//!
//! let pipeline = Pipeline::new(Default::default());
//! let generated = pipeline.run(GenerationRequest::new(
//!     DeclarationKind::Builder,
//!     source,
//!     selection,
//! ))?;
//!
//! for diag in generated.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod request;
mod runner;

pub use context::GenerationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::Phase;
pub use request::{GenerateOptions, Generated, GenerationRequest};
pub use runner::Pipeline;
