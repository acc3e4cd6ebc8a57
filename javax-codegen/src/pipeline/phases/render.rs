//! Render phase - builds the raw snippet from the declaration templates.

use javax_config::ConstructorPolicy;
use javax_core::{ClassInfo, DeclarationKind};

use crate::{
    ParseError, Result,
    builder::{Renderable, separated, write_decls},
    declarations::{BuilderSpec, ConstructorSpec, GettersSpec},
    extract::has_constructor,
    pipeline::{Diagnostic, GenerationContext, Phase},
};

/// Renders the requested declaration kind.
///
/// A builder's `build()` calls the outer constructor, so builder requests
/// also emit it unless the policy says otherwise or (with the `auto`
/// policy) the class already declares a constructor with parameters.
pub struct RenderPhase;

impl RenderPhase {
    fn wants_constructor(&self, ctx: &mut GenerationContext, class: &ClassInfo) -> bool {
        match ctx.options.constructor {
            ConstructorPolicy::Always => true,
            ConstructorPolicy::Never => false,
            ConstructorPolicy::Auto => {
                if has_constructor(class, &ctx.request.source) {
                    ctx.add_diagnostic(
                        Diagnostic::info(
                            self.name(),
                            "constructor skipped, the class already declares one",
                        )
                        .at(class.name.clone()),
                    );
                    false
                } else {
                    true
                }
            }
        }
    }
}

impl Phase for RenderPhase {
    fn name(&self) -> &'static str {
        "render"
    }

    fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
        let kind = ctx.request.kind;
        let raw = match kind {
            DeclarationKind::Getters => GettersSpec::new(&ctx.fields).render(),
            DeclarationKind::Constructor => {
                let class = enclosing_class(ctx)?;
                ConstructorSpec::new(&class, &ctx.fields).render()
            }
            DeclarationKind::Builder => {
                let class = enclosing_class(ctx)?;
                let with_constructor = self.wants_constructor(ctx, &class);

                let fields = &ctx.fields;
                let builder = BuilderSpec::new(&class, fields)
                    .static_builder(ctx.options.static_builder)
                    .to_decls();
                if with_constructor {
                    let constructor = ConstructorSpec::new(&class, fields).to_decls();
                    write_decls(&separated([constructor, builder]))
                } else {
                    write_decls(&builder)
                }
            }
        };

        tracing::debug!(%kind, bytes = raw.len(), "rendered snippet");
        ctx.raw = Some(raw);
        Ok(())
    }
}

fn enclosing_class(ctx: &GenerationContext) -> Result<ClassInfo> {
    Ok(ctx.class.clone().ok_or(ParseError::NoClassDeclaration)?)
}
