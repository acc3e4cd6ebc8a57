//! Where a generated snippet goes, and splicing it in.

use std::ops::Range;

use clap::ValueEnum;
use eyre::{Result, bail};

use super::Selection;

/// Insertion point for `--write`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum InsertAt {
    /// Before the closing brace line of the enclosing class.
    ClassEnd,
    /// After the last selected line (needs --lines).
    Selection,
}

/// Byte offset the snippet is inserted at.
///
/// `body` is the enclosing class body the snippet was generated for; without
/// one the file's final closing brace stands in for it.
pub fn insertion_point(
    source: &str,
    at: InsertAt,
    selection: &Selection,
    body: Option<&Range<usize>>,
) -> Result<usize> {
    match at {
        InsertAt::Selection if !selection.ranged => {
            bail!("--at selection needs --lines to know where the selection ends")
        }
        InsertAt::Selection => Ok(selection.end),
        InsertAt::ClassEnd => match body {
            Some(body) => class_end(source, body),
            None => file_end(source),
        },
    }
}

/// Start of the line holding the body's closing brace.
fn class_end(source: &str, body: &Range<usize>) -> Result<usize> {
    let Some(brace) = body
        .end
        .checked_sub(1)
        .filter(|&brace| body.len() > 1 && source.as_bytes().get(brace) == Some(&b'}'))
    else {
        bail!("the class body is not closed");
    };
    brace_line(source, brace)
}

/// Start of the last line when that line is a lone `}` (trailing
/// whitespace allowed).
fn file_end(source: &str) -> Result<usize> {
    let trimmed = source.trim_end();
    let Some(brace) = trimmed.len().checked_sub(1).filter(|_| trimmed.ends_with('}')) else {
        bail!("the file does not end with a closing brace");
    };
    brace_line(source, brace)
}

/// Start of the line `brace` is on, if only indentation precedes it.
fn brace_line(source: &str, brace: usize) -> Result<usize> {
    let line_start = source[..brace].rfind('\n').map_or(0, |newline| newline + 1);
    if line_start == 0 || !source[line_start..brace].chars().all(|c| matches!(c, ' ' | '\t')) {
        bail!("the closing brace is not on a line of its own");
    }
    Ok(line_start)
}

/// Splice `code` into `source` at `offset`, on its own lines and separated
/// from neighbouring members by a blank line.
///
/// Returns the new content and the 1-based line the snippet starts on.
pub fn insert_snippet(source: &str, offset: usize, code: &str) -> (String, usize) {
    let (before, after) = source.split_at(offset);
    let mut out = String::with_capacity(source.len() + code.len() + 2);

    out.push_str(before);
    if !before.is_empty() {
        if !before.ends_with('\n') {
            out.push('\n');
        }
        if !out.ends_with("\n\n") && !out.ends_with("{\n") {
            out.push('\n');
        }
    }

    let line = out.matches('\n').count() + 1;
    out.push_str(code);

    let next = after.lines().next().unwrap_or_default().trim();
    if !next.is_empty() && !next.starts_with('}') {
        out.push('\n');
    }
    out.push_str(after);

    (out, line)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "public class Foo {\n  private int a;\n  private int b;\n}\n";
    const SNIPPET: &str = "  int x() {\n  }\n";

    fn whole(source: &str) -> Selection {
        Selection {
            text: source.to_string(),
            start: 0,
            end: source.len(),
            ranged: false,
        }
    }

    #[test]
    fn test_file_end() {
        let offset = insertion_point(SOURCE, InsertAt::ClassEnd, &whole(SOURCE), None).unwrap();
        assert_eq!(&SOURCE[offset..], "}\n");
    }

    #[test]
    fn test_file_end_with_trailing_blank_lines() {
        let source = "class A {\n  int a;\n  }  \n\n";
        let offset = insertion_point(source, InsertAt::ClassEnd, &whole(source), None).unwrap();
        assert_eq!(&source[offset..], "  }  \n\n");
    }

    #[test]
    fn test_file_end_indented_with_tabs() {
        let source = "class A {\n\tint a;\n\t}\n";
        let offset = insertion_point(source, InsertAt::ClassEnd, &whole(source), None).unwrap();
        assert_eq!(&source[offset..], "\t}\n");
    }

    #[test]
    fn test_file_end_missing() {
        let source = "class A {\n  int a;\n";
        assert!(insertion_point(source, InsertAt::ClassEnd, &whole(source), None).is_err());
        let source = "class A { int a; }";
        assert!(insertion_point(source, InsertAt::ClassEnd, &whole(source), None).is_err());
    }

    #[test]
    fn test_class_end_of_inner_body() {
        let source = "class Outer {\n  int a;\n  static class Inner {\n    int b;\n  }\n}\n";
        let open = source.find("{\n    int b").unwrap();
        let body = open..source.find("  }\n").unwrap() + 3;

        let offset =
            insertion_point(source, InsertAt::ClassEnd, &whole(source), Some(&body)).unwrap();
        assert_eq!(&source[offset..], "  }\n}\n");
    }

    #[test]
    fn test_class_end_unclosed_body() {
        let source = "class A {\n  int a;\n";
        let body = source.find('{').unwrap()..source.len();
        assert!(insertion_point(source, InsertAt::ClassEnd, &whole(source), Some(&body)).is_err());
    }

    #[test]
    fn test_selection_end_needs_ranges() {
        let err = insertion_point(SOURCE, InsertAt::Selection, &whole(SOURCE), None).unwrap_err();
        assert!(err.to_string().contains("--lines"));

        let selection = Selection {
            text: "  private int a;".to_string(),
            start: SOURCE.find("  private int a;").unwrap(),
            end: SOURCE.find("  private int b;").unwrap(),
            ranged: true,
        };
        let offset = insertion_point(SOURCE, InsertAt::Selection, &selection, None).unwrap();
        assert_eq!(offset, selection.end);
    }

    #[test]
    fn test_insert_before_closing_brace() {
        let offset = SOURCE.rfind('}').unwrap();
        let (content, line) = insert_snippet(SOURCE, offset, SNIPPET);
        assert_eq!(
            content,
            "public class Foo {\n  private int a;\n  private int b;\n\n  int x() {\n  }\n}\n"
        );
        assert_eq!(line, 5);
    }

    #[test]
    fn test_insert_between_members() {
        let offset = SOURCE.find("  private int b;").unwrap();
        let (content, line) = insert_snippet(SOURCE, offset, SNIPPET);
        assert_eq!(
            content,
            "public class Foo {\n  private int a;\n\n  int x() {\n  }\n\n  private int b;\n}\n"
        );
        assert_eq!(line, 4);
    }

    #[test]
    fn test_insert_after_open_brace() {
        let offset = SOURCE.find("  private int a;").unwrap();
        let (content, _) = insert_snippet(SOURCE, offset, SNIPPET);
        assert!(content.starts_with("public class Foo {\n  int x() {\n  }\n\n  private int a;\n"));
    }

    #[test]
    fn test_insert_at_end_without_newline() {
        let (content, line) = insert_snippet("int a;", 6, "int b;\n");
        assert_eq!(content, "int a;\n\nint b;\n");
        assert_eq!(line, 3);
    }
}
