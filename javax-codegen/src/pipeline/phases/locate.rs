//! Locate phase - finds the class generated members belong to.

use crate::{
    ParseError, Result,
    extract::locate_body,
    pipeline::{GenerationContext, Phase},
};

/// Resolves the enclosing class, its body span and nesting depth.
///
/// With a known selection offset the innermost enclosing class wins,
/// otherwise the first class in the source. Getters don't reference the
/// class, so for them a missing declaration is not an error.
pub struct LocatePhase;

impl Phase for LocatePhase {
    fn name(&self) -> &'static str {
        "locate"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let needs_class = ctx.request.kind.needs_class();
        let located = match locate_body(&ctx.request.source, ctx.request.selection_offset) {
            Ok(located) => located,
            Err(ParseError::NoClassDeclaration) if !needs_class => return Ok(()),
            Err(err) => return Err(err.into()),
        };

        tracing::debug!(
            accessor = %located.class.accessor,
            name = %located.class.name,
            depth = located.depth,
            "located class"
        );
        ctx.body = Some(located.body);
        ctx.nesting = located.depth;
        if needs_class {
            ctx.class = Some(located.class);
        }
        Ok(())
    }
}
