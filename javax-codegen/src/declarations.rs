//! Constructor, builder and getters templates.
//!
//! Each template is a small type implementing [`Renderable`]. The
//! `render_*` functions return raw text whose indentation is meaningless
//! until it goes through the formatter.

use javax_core::{ClassInfo, FieldInfo, getter_name, setter_name};

use crate::builder::{Decl, Renderable, modifiers, separated};

/// `this.<name> = <name>`
fn assignment(field: &FieldInfo) -> Decl {
    Decl::statement(format!("this.{0} = {0}", field.name))
}

fn parameter_list(fields: &[FieldInfo]) -> String {
    fields
        .iter()
        .map(FieldInfo::declaration)
        .collect::<Vec<_>>()
        .join(", ")
}

fn argument_list(fields: &[FieldInfo]) -> String {
    fields
        .iter()
        .map(|f| f.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A private constructor assigning every field from a same-named parameter.
#[derive(Debug, Clone, Copy)]
pub struct ConstructorSpec<'a> {
    class: &'a ClassInfo,
    fields: &'a [FieldInfo],
}

impl<'a> ConstructorSpec<'a> {
    pub fn new(class: &'a ClassInfo, fields: &'a [FieldInfo]) -> Self {
        Self { class, fields }
    }
}

impl Renderable for ConstructorSpec<'_> {
    fn to_decls(&self) -> Vec<Decl> {
        vec![Decl::block(
            format!("private {}({})", self.class.name, parameter_list(self.fields)),
            self.fields.iter().map(assignment).collect(),
        )]
    }
}

/// A nested `Builder` class with fluent setters and a `build()` method.
///
/// The builder, its setters and `build()` share the outer class accessor.
#[derive(Debug, Clone, Copy)]
pub struct BuilderSpec<'a> {
    class: &'a ClassInfo,
    fields: &'a [FieldInfo],
    static_builder: bool,
}

impl<'a> BuilderSpec<'a> {
    pub fn new(class: &'a ClassInfo, fields: &'a [FieldInfo]) -> Self {
        Self {
            class,
            fields,
            static_builder: false,
        }
    }

    /// Declare the builder as a `static` nested class.
    pub fn static_builder(mut self, yes: bool) -> Self {
        self.static_builder = yes;
        self
    }

    fn field_decls(&self) -> Vec<Decl> {
        self.fields
            .iter()
            .map(|f| Decl::statement(format!("private {}", f.declaration())))
            .collect()
    }

    fn setter(&self, field: &FieldInfo) -> Vec<Decl> {
        let signature = format!("{}({})", setter_name(&field.name), field.declaration());
        vec![Decl::block(
            modifiers([self.class.accessor.as_str(), "Builder", signature.as_str()]),
            vec![assignment(field), Decl::statement("return this")],
        )]
    }

    fn build_method(&self) -> Vec<Decl> {
        let name = self.class.name.as_str();
        vec![Decl::block(
            modifiers([self.class.accessor.as_str(), name, "build()"]),
            vec![Decl::statement(format!(
                "return new {}({})",
                name,
                argument_list(self.fields)
            ))],
        )]
    }
}

impl Renderable for BuilderSpec<'_> {
    fn to_decls(&self) -> Vec<Decl> {
        let groups = std::iter::once(self.field_decls())
            .chain(self.fields.iter().map(|f| self.setter(f)))
            .chain(std::iter::once(self.build_method()));

        let header = modifiers([
            self.class.accessor.as_str(),
            if self.static_builder { "static" } else { "" },
            "class Builder",
        ]);
        vec![Decl::block(header, separated(groups))]
    }
}

/// One public getter per field, separated by blank lines.
#[derive(Debug, Clone, Copy)]
pub struct GettersSpec<'a> {
    fields: &'a [FieldInfo],
}

impl<'a> GettersSpec<'a> {
    pub fn new(fields: &'a [FieldInfo]) -> Self {
        Self { fields }
    }
}

impl Renderable for GettersSpec<'_> {
    fn to_decls(&self) -> Vec<Decl> {
        separated(self.fields.iter().map(|field| {
            vec![Decl::block(
                format!("public {} {}()", field.ty, getter_name(&field.name)),
                vec![Decl::statement(format!("return {}", field.name))],
            )]
        }))
    }
}

/// Render the private constructor for `class` taking `fields` in order.
pub fn render_constructor(class: &ClassInfo, fields: &[FieldInfo]) -> String {
    ConstructorSpec::new(class, fields).render()
}

/// Render the nested `Builder` class for `class`.
pub fn render_builder(class: &ClassInfo, fields: &[FieldInfo]) -> String {
    BuilderSpec::new(class, fields).render()
}

/// Render a getter for every field.
pub fn render_getters(fields: &[FieldInfo]) -> String {
    GettersSpec::new(fields).render()
}
