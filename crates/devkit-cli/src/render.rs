//! Terminal rendering of diff reports.

use std::fmt::Write;

use colored::{ColoredString, Colorize};

use devkit_diff::{render_unified, split_view, CellKind, DiffReport, DiffStats, LineKind};

/// Unified view, one row per line, colored by kind when `color` is set.
pub fn unified(report: &DiffReport, color: bool) -> String {
    let plain = render_unified(report);
    if !color {
        return plain;
    }
    plain
        .split_terminator('\n')
        .zip(report.lines())
        .map(|(row, span)| {
            let painted = match span.kind {
                LineKind::Equal => row.normal(),
                LineKind::Insert => row.green(),
                LineKind::Delete => row.red(),
            };
            format!("{painted}\n")
        })
        .collect()
}

/// Side-by-side view: original on the left, modified on the right.
pub fn split(report: &DiffReport, color: bool) -> String {
    let rows = split_view(report);
    let widest = rows
        .iter()
        .map(|r| r.left.number.max(r.right.number))
        .max()
        .unwrap_or(0);
    let nw = widest.to_string().len();
    let cw = rows
        .iter()
        .map(|r| r.left.content.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for row in &rows {
        let left = format!("{:>nw$} {:<cw$}", gutter(row.left.number), row.left.content);
        let left = paint(left, row.left.kind, color);
        if row.right.kind == CellKind::Empty {
            let _ = writeln!(out, "{left} |");
        } else {
            let right = format!("{:>nw$} {}", gutter(row.right.number), row.right.content);
            let _ = writeln!(out, "{left} | {}", paint(right, row.right.kind, color));
        }
    }
    out
}

/// Summary line, e.g. `+1 additions, -2 deletions, 3 changes total`.
pub fn stats_line(stats: DiffStats) -> String {
    format!(
        "+{} additions, -{} deletions, {} changes total",
        stats.additions, stats.deletions, stats.changes
    )
}

fn paint(text: String, kind: CellKind, color: bool) -> ColoredString {
    if !color {
        return text.normal();
    }
    match kind {
        CellKind::Equal => text.normal(),
        CellKind::Insert => text.green(),
        CellKind::Delete => text.red(),
        CellKind::Empty => text.dimmed(),
    }
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
    use devkit_diff::compare;

    #[test]
    fn unified_plain() {
        let report = compare("a\nb\nc", "a\nX\nc").unwrap();
        assert_eq!(unified(&report, false), "1 1   a\n2   - b\n  2 + X\n3 3   c\n");
    }

    #[test]
    fn split_plain() {
        let report = compare("a\nb\nc", "a\nX\nc").unwrap();
        assert_eq!(split(&report, false), "1 a | 1 a\n2 b |\n    | 2 X\n3 c | 3 c\n");
    }

    #[test]
    fn split_pads_left_column() {
        let report = compare("short\nlonger line", "short\nnew").unwrap();
        let out = split(&report, false);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "1 short       | 1 short");
        assert_eq!(lines[1], "2 longer line |");
        assert_eq!(lines[2], "              | 2 new");
    }

    #[test]
    fn split_keeps_trailing_whitespace_in_content() {
        let report = compare("a", "a ").unwrap();
        let out = split(&report, false);
        let lines: Vec<&str> = out.split_terminator('\n').collect();
        assert_eq!(lines, vec!["1 a |", "    | 1 a "]);
    }

    #[test]
    fn stats_summary() {
        let report = compare("a\nb", "x").unwrap();
        assert_eq!(stats_line(report.stats()), "+1 additions, -2 deletions, 3 changes total");
    }

    #[test]
    fn identical_inputs_render_only_equal_rows() {
        let report = compare("same\n", "same\n").unwrap();
        assert_eq!(unified(&report, false), "1 1   same\n");
        assert_eq!(stats_line(report.stats()), "+0 additions, -0 deletions, 0 changes total");
    }
}
