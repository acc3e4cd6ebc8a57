//! Heuristics over the whole source file.

use std::sync::OnceLock;

use javax_core::ClassInfo;
use regex::Regex;

fn first_indent_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\{.*?\n( +)").expect("valid regex"))
}

/// Infer the file's indent width: the leading spaces of the first indented
/// line after the first opening brace.
pub fn infer_indent_size(source: &str) -> Option<usize> {
    first_indent_regex()
        .captures(source)
        .and_then(|caps| caps.get(1))
        .map(|m| m.len())
}

/// Whether `class` already declares a constructor taking arguments.
pub fn has_constructor(class: &ClassInfo, source: &str) -> bool {
    let pattern = format!(
        r"(?:(?:public|protected|private)\s+)?{}\s*\(\s*[^)\s][^)]*\)\s*(?:throws\s+[\w.,\s]+)?\{{",
        regex::escape(&class.name)
    );
    let Ok(re) = Regex::new(&pattern) else {
        return false;
    };

    re.find_iter(source).any(|m| {
        let before = &source[..m.start()];
        let standalone = before
            .chars()
            .next_back()
            .is_none_or(|c| !(c.is_alphanumeric() || c == '_' || c == '$' || c == '.'));
        standalone && !before.trim_end().ends_with("new")
    })
}
