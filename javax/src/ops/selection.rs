//! Line-range selections.

use std::{fmt, str::FromStr};

use eyre::{Result, bail, eyre};
use javax_codegen::join_selections;

/// A 1-based, inclusive range of lines, written `A-B` (or `A` for one line).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl FromStr for LineRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |n: &str| {
            n.trim()
                .parse::<usize>()
                .map_err(|_| format!("invalid line number '{}'", n.trim()))
        };

        let (start, end) = match s.split_once('-') {
            Some((a, b)) => (parse(a)?, parse(b)?),
            None => {
                let line = parse(s)?;
                (line, line)
            }
        };

        if start == 0 {
            return Err("line numbers start at 1".to_string());
        }
        if end < start {
            return Err(format!("range {start}-{end} ends before it starts"));
        }
        Ok(Self { start, end })
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// Selected text plus where it starts and ends in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Spans joined with newlines.
    pub text: String,
    /// Byte offset of the first selected line.
    pub start: usize,
    /// Byte offset just past the last selected line, newline included.
    pub end: usize,
    /// Built from explicit line ranges rather than the whole file.
    pub ranged: bool,
}

/// Byte range of every line, each including its trailing newline.
fn line_spans(source: &str) -> Vec<(usize, usize)> {
    let mut spans = Vec::new();
    let mut start = 0;
    for line in source.split_inclusive('\n') {
        spans.push((start, start + line.len()));
        start += line.len();
    }
    spans
}

/// Select `ranges` of `source`. No ranges selects the whole file.
pub fn select(source: &str, ranges: &[LineRange]) -> Result<Selection> {
    if ranges.is_empty() {
        return Ok(Selection {
            text: source.to_string(),
            start: 0,
            end: source.len(),
            ranged: false,
        });
    }

    let lines = line_spans(source);
    let mut spans = Vec::with_capacity(ranges.len());
    for range in ranges {
        if range.end > lines.len() {
            bail!(
                "line range {} is past the end of the file ({} lines)",
                range,
                lines.len()
            );
        }
        let from = lines[range.start - 1].0;
        let to = lines[range.end - 1].1;
        spans.push((from, to));
    }

    let text = join_selections(
        &spans
            .iter()
            .map(|&(from, to)| source[from..to].trim_end_matches('\n'))
            .collect::<Vec<_>>(),
    );
    let start = spans
        .iter()
        .map(|s| s.0)
        .min()
        .ok_or_else(|| eyre!("empty selection"))?;
    let end = spans.iter().map(|s| s.1).max().unwrap_or(start);

    Ok(Selection {
        text,
        start,
        end,
        ranged: true,
    })
}
