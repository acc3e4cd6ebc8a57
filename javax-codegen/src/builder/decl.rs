//! Declaration tree for generated Java code.
//!
//! Templates describe *what* to emit as a tree of blocks, statements and
//! blank lines. [`write_decls`] flattens the tree into raw text with one
//! construct per line and no indentation; the formatter owns indentation.

/// A node of generated Java code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    /// `header {`, the body, then `}`.
    Block { header: String, body: Vec<Decl> },
    /// A statement or field declaration; the trailing `;` is added on write.
    Statement(String),
    /// An empty separator line.
    Blank,
}

impl Decl {
    /// Create a block node.
    pub fn block(header: impl Into<String>, body: Vec<Decl>) -> Self {
        Self::Block {
            header: header.into(),
            body,
        }
    }

    /// Create a statement node.
    pub fn statement(text: impl Into<String>) -> Self {
        Self::Statement(text.into())
    }

    /// Create a blank line node.
    pub fn blank() -> Self {
        Self::Blank
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Decl::Block { header, body } => {
                out.push_str(header);
                out.push_str(" {\n");
                for node in body {
                    node.write_to(out);
                }
                out.push_str("}\n");
            }
            Decl::Statement(text) => {
                out.push_str(text);
                out.push_str(";\n");
            }
            Decl::Blank => out.push('\n'),
        }
    }
}

/// Flatten declaration nodes into unindented source text.
pub fn write_decls(decls: &[Decl]) -> String {
    let mut out = String::new();
    for decl in decls {
        decl.write_to(&mut out);
    }
    out
}

/// Concatenate groups of nodes with a blank line between non-empty groups.
pub fn separated(groups: impl IntoIterator<Item = Vec<Decl>>) -> Vec<Decl> {
    let mut out = Vec::new();
    for group in groups.into_iter().filter(|g| !g.is_empty()) {
        if !out.is_empty() {
            out.push(Decl::Blank);
        }
        out.extend(group);
    }
    out
}

/// Join modifier words and the rest of a header, skipping empty modifiers
/// (an empty accessor means package-private).
pub fn modifiers<'a>(words: impl IntoIterator<Item = &'a str>) -> String {
    words
        .into_iter()
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trait for templates that can be expressed as declaration nodes.
pub trait Renderable {
    /// Convert this template to declaration nodes.
    fn to_decls(&self) -> Vec<Decl>;

    /// Render to raw, unindented source text.
    fn render(&self) -> String {
        write_decls(&self.to_decls())
    }
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_decls(&self) -> Vec<Decl> {
        (*self).to_decls()
    }
}
