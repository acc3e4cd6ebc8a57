//! Class locator.

use std::{ops::Range, sync::OnceLock};

use javax_core::ClassInfo;
use regex::{Captures, Regex};

use crate::ParseError;

const ACCESSORS: [&str; 3] = ["public", "protected", "private"];

/// A class declaration after optional annotations, at the start of a line
/// or after a `;`, `}` or closed `*/` on the same line.
///
/// Modifiers may come in any order; only the access modifier is kept.
fn class_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?m)(?:^|[;}]|\*/)[ \t]*(?:@[\w.]+(?:\([^)\n]*\))?[ \t]+)*(?P<modifiers>(?:(?:public|protected|private|abstract|final|static|strictfp|sealed|non-sealed)[ \t]+)*)class[ \t]+(?P<name>[\w$]+)",
        )
        .expect("valid regex")
    })
}

/// A class declaration together with the span of its body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedClass {
    pub class: ClassInfo,
    /// Opening brace through the matching closing brace.
    pub body: Range<usize>,
    /// Blocks the declaration sits in; 0 for a top-level class.
    pub depth: usize,
}

fn class_info(caps: &Captures<'_>) -> ClassInfo {
    let accessor = caps
        .name("modifiers")
        .map(|m| m.as_str())
        .unwrap_or_default()
        .split_whitespace()
        .find(|word| ACCESSORS.contains(word))
        .unwrap_or_default();
    ClassInfo::new(accessor, &caps["name"])
}

/// Whether the text between line start and a match is comment text.
fn in_comment(line_prefix: &str) -> bool {
    let prefix = line_prefix.trim_start();
    if prefix.contains("//") || (prefix.starts_with('*') && !prefix.starts_with("*/")) {
        return true;
    }
    match (prefix.rfind("/*"), prefix.rfind("*/")) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    }
}

/// Class declarations in source order, skipping ones inside comments.
fn declarations(source: &str) -> impl Iterator<Item = Captures<'_>> {
    class_regex().captures_iter(source).filter(move |caps| {
        let Some(modifiers) = caps.name("modifiers") else {
            return false;
        };
        let line_start = source[..modifiers.start()].rfind('\n').map_or(0, |i| i + 1);
        !in_comment(&source[line_start..modifiers.start()])
    })
}

fn located(source: &str, caps: &Captures<'_>) -> Option<LocatedClass> {
    let name = caps.name("name")?;
    Some(LocatedClass {
        class: class_info(caps),
        body: class_body(source, name.end()),
        depth: depth_at(source, name.start()),
    })
}

/// Locate the first class declared in `source`.
///
/// Nested and later classes are ignored. A missing access modifier yields
/// an empty accessor (package-private).
pub fn locate(source: &str) -> Result<ClassInfo, ParseError> {
    locate_body(source, None).map(|located| located.class)
}

/// Locate the innermost class whose body contains byte `offset`.
///
/// Falls back to [`locate`] when no class body encloses the offset, e.g.
/// for a selection above the first declaration.
pub fn locate_at(source: &str, offset: usize) -> Result<ClassInfo, ParseError> {
    locate_body(source, Some(offset)).map(|located| located.class)
}

/// [`locate`] or [`locate_at`], keeping the body span and nesting depth.
pub fn locate_body(source: &str, offset: Option<usize>) -> Result<LocatedClass, ParseError> {
    let mut innermost = None;

    for caps in declarations(source) {
        let Some(class) = located(source, &caps) else {
            continue;
        };
        let Some(offset) = offset else {
            return Ok(class);
        };
        if class.body.start > offset {
            break;
        }
        // Declarations are visited in order, so a later enclosing class is
        // nested inside every earlier one.
        if class.body.contains(&offset) {
            innermost = Some(class);
        }
    }

    match innermost {
        Some(class) => Ok(class),
        None if offset.is_some() => locate_body(source, None),
        None => Err(ParseError::NoClassDeclaration),
    }
}

/// Byte range from the class's opening brace to its matching closing brace.
///
/// An unterminated body runs to the end of the source; a declaration
/// without a body gets an empty range there.
fn class_body(source: &str, from: usize) -> Range<usize> {
    let Some(open) = source[from..].find('{').map(|i| from + i) else {
        return source.len()..source.len();
    };
    let mut depth = 0usize;
    for (i, c) in source[open..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return open..open + i + 1;
                }
            }
            _ => {}
        }
    }
    open..source.len()
}

/// Brace depth at byte `pos`, counting every brace before it.
fn depth_at(source: &str, pos: usize) -> usize {
    source[..pos].chars().fold(0usize, |depth, c| match c {
        '{' => depth + 1,
        '}' => depth.saturating_sub(1),
        _ => depth,
    })
}
