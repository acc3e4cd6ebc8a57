//! Brace-depth driven re-indentation.
//!
//! The formatter knows nothing about Java beyond line endings. A snippet is
//! processed in three steps:
//!
//! 1. **Strip**: drop the indentation (and trailing blanks) of every line.
//! 2. **Tokenize**: split at `{\n`, `}\n`, `;\n` and bare `\n`.
//! 3. **Emit**: indent each text token by the current depth. `{\n` raises
//!    the depth after its line, `}\n` lowers it before its own line.
//!
//! Braces inside string literals or comments are counted like any other
//! brace, while a brace that doesn't end its line is plain text (so a
//! `} else {` line only opens). Unbalanced input is rejected before
//! anything is emitted.

use std::sync::OnceLock;

use regex::Regex;

use crate::{FormatError, builder::Indent};

fn boundary_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[{};]?\n").expect("valid regex"))
}

/// Structural category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `{\n`
    Open,
    /// `}\n`
    Close,
    /// `;\n`
    Terminator,
    /// A bare `\n`.
    Newline,
    /// Anything between boundaries.
    Text,
}

/// A fragment of the stripped snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Byte offset into the stripped snippet.
    pub offset: usize,
}

/// Remove leading and trailing blanks from every line and make sure a
/// non-empty snippet ends with a newline.
pub fn strip_indentation(raw: &str) -> String {
    let mut out = raw
        .split('\n')
        .map(|line| line.trim_matches(|c| c == ' ' || c == '\t' || c == '\r'))
        .collect::<Vec<_>>()
        .join("\n");
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}

/// Split a stripped snippet into text and boundary tokens.
pub fn tokenize(stripped: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for m in boundary_regex().find_iter(stripped) {
        if m.start() > last {
            tokens.push(Token {
                kind: TokenKind::Text,
                text: &stripped[last..m.start()],
                offset: last,
            });
        }
        let kind = match m.as_str().as_bytes()[0] {
            b'{' => TokenKind::Open,
            b'}' => TokenKind::Close,
            b';' => TokenKind::Terminator,
            _ => TokenKind::Newline,
        };
        tokens.push(Token {
            kind,
            text: m.as_str(),
            offset: m.start(),
        });
        last = m.end();
    }

    if last < stripped.len() {
        tokens.push(Token {
            kind: TokenKind::Text,
            text: &stripped[last..],
            offset: last,
        });
    }
    tokens
}

/// Check that every `}\n` closes an earlier `{\n` and nothing stays open.
fn check_balance(stripped: &str, tokens: &[Token<'_>]) -> Result<(), FormatError> {
    let mut open = Vec::new();
    for token in tokens {
        match token.kind {
            TokenKind::Open => open.push(token.offset),
            TokenKind::Close => {
                if open.pop().is_none() {
                    return Err(FormatError::UnmatchedClose {
                        src: stripped.to_string(),
                        span: (token.offset, 1).into(),
                    });
                }
            }
            _ => {}
        }
    }

    match open.last() {
        None => Ok(()),
        Some(&offset) => Err(FormatError::Unclosed {
            src: stripped.to_string(),
            span: (offset, 1).into(),
            depth: open.len(),
        }),
    }
}

/// Re-indents raw snippets.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    indent: Indent,
    initial_level: usize,
}

impl Formatter {
    /// Create a formatter emitting `indent` per level, starting at
    /// `initial_level`.
    pub fn new(indent: Indent, initial_level: usize) -> Self {
        Self {
            indent,
            initial_level,
        }
    }

    /// Re-indent `raw`.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] when the snippet's braces don't balance.
    pub fn format(&self, raw: &str) -> Result<String, FormatError> {
        let stripped = strip_indentation(raw);
        let tokens = tokenize(&stripped);
        check_balance(&stripped, &tokens)?;

        let mut level = self.initial_level;
        let mut out = String::with_capacity(stripped.len() * 2);
        for token in &tokens {
            match token.kind {
                TokenKind::Open => {
                    out.push_str(token.text);
                    level += 1;
                }
                TokenKind::Close => {
                    level -= 1;
                    out.push_str(&self.indent.at(level));
                    out.push_str(token.text);
                }
                TokenKind::Terminator | TokenKind::Newline => out.push_str(token.text),
                TokenKind::Text => {
                    out.push_str(&self.indent.at(level));
                    out.push_str(token.text);
                }
            }
        }
        Ok(out)
    }
}

/// Re-indent `raw` with `indent_size` spaces per level, starting at
/// `initial_level`.
pub fn format(indent_size: usize, initial_level: usize, raw: &str) -> Result<String, FormatError> {
    Formatter::new(Indent::spaces(indent_size), initial_level).format(raw)
}
