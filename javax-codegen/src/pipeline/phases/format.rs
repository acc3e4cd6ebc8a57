//! Format phase - re-indents the rendered snippet.

use crate::{
    Result,
    format::Formatter,
    pipeline::{GenerationContext, Phase},
};

pub struct FormatPhase;

impl Phase for FormatPhase {
    fn name(&self) -> &'static str {
        "format"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let Some(raw) = ctx.raw.as_deref() else {
            return Ok(());
        };

        let level = ctx.options.initial_indent + ctx.nesting;
        let code = Formatter::new(ctx.indent, level).format(raw)?;
        tracing::debug!(bytes = code.len(), indent = ctx.indent.size(), level, "formatted snippet");
        ctx.code = Some(code);
        Ok(())
    }
}
