//! Pipeline phase trait.

use super::GenerationContext;
use crate::Result;

/// A phase in the generation pipeline.
///
/// Phases run in order and communicate through the [`GenerationContext`].
///
/// Built-in phases:
/// - `LocatePhase` - finds the class constructors and builders belong to
/// - `ExtractPhase` - collects fields from the selection
/// - `RenderPhase` - builds the raw snippet from the declaration templates
/// - `FormatPhase` - re-indents the raw snippet
pub trait Phase: Send + Sync {
    /// The name of this phase (used in diagnostics and logs).
    fn name(&self) -> &'static str;

    /// Run this phase on the generation context.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be completed. Non-fatal
    /// issues are recorded as diagnostics instead.
    fn run(&self, ctx: &mut GenerationContext) -> Result<()>;
}
