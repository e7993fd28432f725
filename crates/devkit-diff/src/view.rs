//! Split and unified renderings of a [`DiffReport`].
//!
//! Both views carry the same information as the report itself; they only
//! arrange it for display.

use std::fmt::Write;

use serde::Serialize;

use crate::model::{DiffReport, LineKind, LineSpan};

/// What a cell of the side-by-side view shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    Equal,
    Insert,
    Delete,
    /// Placeholder opposite a line that exists only on the other side.
    Empty,
}

/// One column cell of a split row. `number` is `0` for placeholders.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SplitCell {
    pub number: usize,
    pub content: String,
    pub kind: CellKind,
}

impl SplitCell {
    fn empty() -> Self {
        Self { number: 0, content: String::new(), kind: CellKind::Empty }
    }
}

/// One row of the side-by-side view: original on the left, modified on the right.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SplitRow {
    pub left: SplitCell,
    pub right: SplitCell,
}

/// One row of the unified view, with both line-number gutters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UnifiedRow {
    pub old_line: usize,
    pub new_line: usize,
    pub prefix: char,
    pub content: String,
}

/// Arrange a report as side-by-side rows, one per entry.
pub fn split_view(report: &DiffReport) -> Vec<SplitRow> {
    report.lines().iter().map(split_row).collect()
}

fn split_row(span: &LineSpan) -> SplitRow {
    let cell = |number, kind| SplitCell { number, content: span.content.clone(), kind };
    match span.kind {
        LineKind::Equal => SplitRow {
            left: cell(span.old_line, CellKind::Equal),
            right: cell(span.new_line, CellKind::Equal),
        },
        LineKind::Delete => SplitRow {
            left: cell(span.old_line, CellKind::Delete),
            right: SplitCell::empty(),
        },
        LineKind::Insert => SplitRow {
            left: SplitCell::empty(),
            right: cell(span.new_line, CellKind::Insert),
        },
    }
}

/// Arrange a report as a single interleaved column.
pub fn unified_view(report: &DiffReport) -> Vec<UnifiedRow> {
    report
        .lines()
        .iter()
        .map(|span| UnifiedRow {
            old_line: span.old_line,
            new_line: span.new_line,
            prefix: span.kind.prefix(),
            content: span.content.clone(),
        })
        .collect()
}

/// Render the unified view as plain text, one row per line.
///
/// Gutters are right-aligned to the widest line number and left blank where
/// a line does not exist on that side.
pub fn render_unified(report: &DiffReport) -> String {
    let rows = unified_view(report);
    let widest = rows.iter().map(|r| r.old_line.max(r.new_line)).max().unwrap_or(0);
    let width = widest.to_string().len();

    let mut out = String::new();
    for row in &rows {
        let _ = writeln!(
            out,
            "{:>width$} {:>width$} {} {}",
            gutter(row.old_line),
            gutter(row.new_line),
            row.prefix,
            row.content,
        );
    }
    out
}

fn gutter(number: usize) -> String {
    if number == 0 {
        String::new()
    } else {
        number.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compare;

    #[test]
    fn split_view_pads_the_missing_side() {
        let report = compare("a\nb\nc", "a\nX\nc").unwrap();
        let rows = split_view(&report);
        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0].left.kind, CellKind::Equal);
        assert_eq!(rows[0].right.number, 1);

        assert_eq!(rows[1].left, SplitCell { number: 2, content: "b".into(), kind: CellKind::Delete });
        assert_eq!(rows[1].right, SplitCell::empty());

        assert_eq!(rows[2].left, SplitCell::empty());
        assert_eq!(rows[2].right, SplitCell { number: 2, content: "X".into(), kind: CellKind::Insert });
    }

    #[test]
    fn unified_view_prefixes() {
        let report = compare("a\nb", "a\nc").unwrap();
        let prefixes: Vec<char> = unified_view(&report).iter().map(|r| r.prefix).collect();
        assert_eq!(prefixes, vec![' ', '-', '+']);
    }

    #[test]
    fn render_unified_text() {
        let report = compare("a\nb\nc", "a\nX\nc").unwrap();
        assert_eq!(render_unified(&report), "1 1   a\n2   - b\n  2 + X\n3 3   c\n");
    }

    #[test]
    fn render_unified_aligns_wide_gutters() {
        let old: String = (1..=10).map(|i| format!("{i}\n")).collect();
        let new = old.replace("10\n", "ten\n");
        let rendered = render_unified(&compare(&old, &new).unwrap());
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], " 1  1   1");
        assert_eq!(lines[9], "10    - 10");
        assert_eq!(lines[10], "   10 + ten");
    }

    #[test]
    fn empty_report_renders_nothing() {
        let report = compare("", "").unwrap();
        assert!(split_view(&report).is_empty());
        assert_eq!(render_unified(&report), "");
    }
}
