use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Result type for javax-codegen operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// The source text could not be understood well enough to generate code.
#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("no class declaration found")]
    #[diagnostic(
        code(javax::no_class),
        help("constructors and builders are generated for the enclosing `class` declaration")
    )]
    NoClassDeclaration,
}

/// A snippet handed to the formatter has unbalanced braces.
///
/// Spans point into the snippet after its indentation was stripped.
#[derive(Debug, Error, Diagnostic)]
pub enum FormatError {
    #[error("unmatched closing brace")]
    #[diagnostic(
        code(javax::unbalanced_braces),
        help("every line ending in `}}` needs an earlier line ending in `{{`")
    )]
    UnmatchedClose {
        #[source_code]
        src: String,
        #[label("nothing left to close here")]
        span: SourceSpan,
    },

    #[error("{depth} unclosed brace(s) at end of snippet")]
    #[diagnostic(
        code(javax::unbalanced_braces),
        help("every line ending in `{{` needs a later line ending in `}}`")
    )]
    Unclosed {
        #[source_code]
        src: String,
        #[label("opened here")]
        span: SourceSpan,
        depth: usize,
    },
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Format(#[from] FormatError),
}

impl From<ParseError> for Box<Error> {
    fn from(err: ParseError) -> Self {
        Box::new(Error::Parse(err))
    }
}

impl From<FormatError> for Box<Error> {
    fn from(err: FormatError) -> Self {
        Box::new(Error::Format(err))
    }
}
