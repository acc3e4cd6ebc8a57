//! Pipeline orchestrator.

use javax_config::Config;

use super::{
    GenerateOptions, Generated, GenerationContext, GenerationRequest, Phase,
    phases::{ExtractPhase, FormatPhase, LocatePhase, RenderPhase},
};
use crate::{Result, builder::Indent, extract::infer_indent_size};

/// The generation pipeline orchestrator.
///
/// Runs the built-in phases (locate, extract, render, format) followed by
/// any extra phases, all sharing one [`GenerationContext`].
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::from_config(toml.config()).phase(MyCheck);
/// let generated = pipeline.run(request)?;
/// ```
pub struct Pipeline {
    options: GenerateOptions,
    phases: Vec<Box<dyn Phase>>,
}

impl Pipeline {
    /// Create a pipeline with the built-in phases only.
    pub fn new(options: GenerateOptions) -> Self {
        Self {
            options,
            phases: Vec::new(),
        }
    }

    /// Create a pipeline from javax.toml settings.
    pub fn from_config(config: &Config) -> Self {
        Self::new(GenerateOptions::from_config(config))
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Indent width for `request`: the request's own value, then the
    /// settings, then whatever the source already uses, then 2.
    pub fn resolve_indent(&self, request: &GenerationRequest) -> Indent {
        let size = request
            .indent_size
            .or(self.options.indent_size)
            .or_else(|| infer_indent_size(&request.source))
            .unwrap_or(Config::DEFAULT_INDENT_SIZE);
        Indent::spaces(size)
    }

    /// Run the pipeline on a request.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`](crate::ParseError) when a constructor or
    /// builder is requested and no class declaration exists, and
    /// [`FormatError`](crate::FormatError) when the snippet's braces don't
    /// balance.
    #[tracing::instrument(level = "debug", skip_all, fields(kind = %request.kind))]
    pub fn run(&self, request: GenerationRequest) -> Result<Generated> {
        let indent = self.resolve_indent(&request);
        let mut ctx = GenerationContext::new(request, self.options.clone(), indent);

        let builtin_phases: [&dyn Phase; 4] =
            [&LocatePhase, &ExtractPhase, &RenderPhase, &FormatPhase];

        for phase in builtin_phases
            .into_iter()
            .chain(self.phases.iter().map(|p| p.as_ref()))
        {
            tracing::trace!(phase = phase.name(), "running phase");
            phase.run(&mut ctx)?;
        }

        Ok(Generated {
            kind: ctx.request.kind,
            code: ctx.code.unwrap_or_default(),
            class: ctx.class,
            body: ctx.body,
            fields: ctx.fields,
            indent_size: ctx.indent.size(),
            diagnostics: ctx.diagnostics,
        })
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(GenerateOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use javax_config::ConstructorPolicy;
    use javax_core::DeclarationKind;

    use super::*;
    use crate::{Error, ParseError, pipeline::Severity};

    const FOO: &str = "public class Foo {\n    private String name;\n    private int age;\n}\n";
    const FIELDS: &str = "    private String name;\n    private int age;";

    struct CountingPhase(Arc<AtomicUsize>);

    impl Phase for CountingPhase {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn run(&self, ctx: &mut GenerationContext) -> Result<()> {
            assert!(ctx.code.is_some());
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn request(kind: DeclarationKind) -> GenerationRequest {
        GenerationRequest::new(kind, FOO, FIELDS)
    }

    #[test]
    fn test_constructor() {
        let generated = Pipeline::default()
            .run(request(DeclarationKind::Constructor).indent_size(2))
            .unwrap();
        assert_eq!(
            generated.code,
            "  private Foo(String name, int age) {\n    this.name = name;\n    this.age = age;\n  }\n"
        );
        assert_eq!(generated.class, Some(javax_core::ClassInfo::new("public", "Foo")));
        assert!(generated.diagnostics.is_empty());
    }

    #[test]
    fn test_indent_is_inferred_from_source() {
        let generated = Pipeline::default()
            .run(request(DeclarationKind::Getters))
            .unwrap();
        assert_eq!(generated.indent_size, 4);
        assert!(generated.code.starts_with("    public String getName() {\n        return name;\n"));
    }

    #[test]
    fn test_indent_precedence() {
        let options = GenerateOptions {
            indent_size: Some(3),
            ..GenerateOptions::default()
        };
        let pipeline = Pipeline::new(options);
        assert_eq!(pipeline.resolve_indent(&request(DeclarationKind::Getters)).size(), 3);
        assert_eq!(
            pipeline
                .resolve_indent(&request(DeclarationKind::Getters).indent_size(8))
                .size(),
            8
        );

        let flat = GenerationRequest::new(DeclarationKind::Getters, "class A {}", "");
        assert_eq!(Pipeline::default().resolve_indent(&flat).size(), 2);
    }

    #[test]
    fn test_getters_need_no_class() {
        let generated = Pipeline::default()
            .run(GenerationRequest::new(DeclarationKind::Getters, "", "int x;"))
            .unwrap();
        assert!(generated.class.is_none());
        assert_eq!(generated.code, "  public int getX() {\n    return x;\n  }\n");
    }

    #[test]
    fn test_missing_class_is_an_error() {
        let err = Pipeline::default()
            .run(GenerationRequest::new(DeclarationKind::Builder, "int x;", "int x;"))
            .unwrap_err();
        assert!(matches!(*err, Error::Parse(ParseError::NoClassDeclaration)));
    }

    #[test]
    fn test_empty_selection_warns() {
        let generated = Pipeline::default()
            .run(GenerationRequest::new(DeclarationKind::Constructor, FOO, "return x;"))
            .unwrap();
        assert!(generated.is_empty());
        assert!(generated.has_warnings());
        assert_eq!(generated.warnings().count(), 1);
        assert_eq!(generated.code, "    private Foo() {\n    }\n");
    }

    #[test]
    fn test_builder_includes_constructor() {
        let generated = Pipeline::default()
            .run(request(DeclarationKind::Builder).indent_size(2))
            .unwrap();
        assert!(generated.code.starts_with("  private Foo(String name, int age) {\n"));
        assert!(generated.code.contains("  }\n\n  public class Builder {\n"));
    }

    #[test]
    fn test_builder_skips_existing_constructor() {
        let source = "public class Foo {\n  private int age;\n\n  public Foo(int age) {\n    this.age = age;\n  }\n}\n";
        let generated = Pipeline::default()
            .run(GenerationRequest::new(DeclarationKind::Builder, source, "private int age;"))
            .unwrap();
        assert!(generated.code.starts_with("  public class Builder {\n"));
        assert_eq!(generated.diagnostics.len(), 1);
        assert_eq!(generated.diagnostics[0].severity, Severity::Info);
        assert_eq!(generated.diagnostics[0].location.as_deref(), Some("Foo"));
    }

    #[test]
    fn test_constructor_policy() {
        let never = Pipeline::new(GenerateOptions {
            constructor: ConstructorPolicy::Never,
            ..GenerateOptions::default()
        });
        let code = never.run(request(DeclarationKind::Builder)).unwrap().code;
        assert!(!code.contains("private Foo("));

        let source = "public class Foo {\n  public Foo(int age) {\n  }\n}\n";
        let always = Pipeline::new(GenerateOptions {
            constructor: ConstructorPolicy::Always,
            ..GenerateOptions::default()
        });
        let generated = always
            .run(GenerationRequest::new(DeclarationKind::Builder, source, "int age;"))
            .unwrap();
        assert!(generated.code.contains("private Foo(int age)"));
        assert!(generated.diagnostics.is_empty());
    }

    #[test]
    fn test_selection_offset_picks_inner_class() {
        let source = "public class Outer {\n  int a;\n\n  static class Inner {\n    int b;\n  }\n}\n";
        let offset = source.find("int b;").unwrap();
        let generated = Pipeline::default()
            .run(
                GenerationRequest::new(DeclarationKind::Constructor, source, "int b;")
                    .at_offset(offset),
            )
            .unwrap();
        assert_eq!(generated.class.unwrap().name, "Inner");
        assert_eq!(
            generated.code,
            "    private Inner(int b) {\n      this.b = b;\n    }\n"
        );
        let body = generated.body.unwrap();
        assert_eq!(&source[body], "{\n    int b;\n  }");
    }

    #[test]
    fn test_getters_follow_inner_class_nesting() {
        let source = "class Outer {\n  static class Inner {\n    int b;\n  }\n}\n";
        let offset = source.find("int b;").unwrap();
        let generated = Pipeline::default()
            .run(
                GenerationRequest::new(DeclarationKind::Getters, source, "int b;")
                    .at_offset(offset),
            )
            .unwrap();
        assert!(generated.class.is_none());
        assert!(generated.body.is_some());
        assert!(generated.code.starts_with("    public int getB() {\n      return b;\n"));
    }

    #[test]
    fn test_extra_phases_run_last() {
        let count = Arc::new(AtomicUsize::new(0));
        let pipeline = Pipeline::default().phase(CountingPhase(count.clone()));
        pipeline.run(request(DeclarationKind::Getters)).unwrap();
        pipeline.run(request(DeclarationKind::Getters)).unwrap();
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}
