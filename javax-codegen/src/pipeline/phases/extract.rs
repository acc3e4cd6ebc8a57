//! Extract phase - collects fields from the selected text.

use crate::{
    Result,
    extract::extract_fields,
    pipeline::{GenerationContext, Phase},
};

/// Runs the field pattern matcher over the selection.
///
/// An empty result is not an error: the snippet is still rendered and a
/// warning is recorded so the host can decide not to insert it.
pub struct ExtractPhase;

impl Phase for ExtractPhase {
    fn name(&self) -> &'static str {
        "extract"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        ctx.fields = extract_fields(&ctx.request.selection);
        tracing::debug!(count = ctx.fields.len(), "extracted fields");

        if ctx.fields.is_empty() {
            ctx.add_warning(self.name(), "no field declarations found in the selection");
        }
        Ok(())
    }
}
