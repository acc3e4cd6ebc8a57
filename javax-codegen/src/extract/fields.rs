//! Field pattern matcher.
//!
//! Recognises one field declaration per line:
//!
//! ```text
//! [public|protected|private] [transient|volatile]* [final] <type> <name> (; | =)
//! ```
//!
//! `<type>` is a greedy run of word characters, `.`, `<`, `>`, `,` and
//! blanks, so `Map<String, Integer>` is captured as written. Array types,
//! nested generics containing brackets and several declarations on one
//! line are not recognised.

use std::sync::OnceLock;

use javax_core::FieldInfo;
use regex::{Captures, Regex};

/// Modifiers that may precede a field type in any order.
const MODIFIERS: [&str; 6] = [
    "public",
    "protected",
    "private",
    "transient",
    "volatile",
    "final",
];

/// Words that start statements, never a field type.
const STATEMENT_KEYWORDS: [&str; 12] = [
    "return", "throw", "new", "assert", "yield", "break", "continue", "else", "case", "goto",
    "package", "import",
];

fn field_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"(?m)^[ \t]*(?:(?:public|protected|private)[ \t]+)?(?:(?:transient|volatile)[ \t]+)*(?:final[ \t]+)?(?P<type>[\w.<>, \t]+)[ \t]+(?P<name>[\w$]+)[ \t]*[;=]",
        )
        .expect("valid regex")
    })
}

/// Join the contents of several selected spans for scanning.
///
/// Spans are separated by a newline so the end of one span never runs into
/// the start of the next.
pub fn join_selections<S: AsRef<str>>(spans: &[S]) -> String {
    spans
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extract field declarations from `text`, in order of appearance.
///
/// Lines that don't look like a field are skipped. Duplicate names are kept.
pub fn extract_fields(text: &str) -> Vec<FieldInfo> {
    field_regex()
        .captures_iter(text)
        .filter_map(|caps| field_from(&caps))
        .collect()
}

fn field_from(caps: &Captures<'_>) -> Option<FieldInfo> {
    let ty = normalize_type(&caps["type"])?;
    Some(FieldInfo::new(ty, &caps["name"]))
}

/// Trim the captured type and drop modifiers written out of order
/// (`final private int x;`). Static fields and statements are rejected.
fn normalize_type(raw: &str) -> Option<String> {
    let mut ty = raw.trim();
    while let Some((first, rest)) = ty.split_once(char::is_whitespace) {
        if !MODIFIERS.contains(&first) {
            break;
        }
        ty = rest.trim_start();
    }

    if ty.is_empty() || MODIFIERS.contains(&ty) {
        return None;
    }

    let mut words = ty.split_whitespace();
    if words.next().is_some_and(|w| STATEMENT_KEYWORDS.contains(&w)) {
        return None;
    }
    if ty.split_whitespace().any(|w| w == "static") {
        return None;
    }

    Some(ty.to_string())
}
