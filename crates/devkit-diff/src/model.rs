//! Diff output model: classified lines and the counts derived from them.

use serde::{Deserialize, Serialize};

/// Classification of a single line in a diff.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Present in both texts.
    Equal,
    /// Present only in the modified text.
    Insert,
    /// Present only in the original text.
    Delete,
}

impl LineKind {
    /// The marker a unified view puts in front of a line of this kind.
    pub fn prefix(self) -> char {
        match self {
            Self::Equal => ' ',
            Self::Insert => '+',
            Self::Delete => '-',
        }
    }
}

/// One line of diff output.
///
/// Line numbers are 1-based; `0` means the line does not exist on that side
/// (`old_line` for inserts, `new_line` for deletes).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineSpan {
    #[serde(rename = "type")]
    pub kind: LineKind,
    pub content: String,
    pub old_line: usize,
    pub new_line: usize,
}

impl LineSpan {
    pub fn equal(content: impl Into<String>, old_line: usize, new_line: usize) -> Self {
        Self { kind: LineKind::Equal, content: content.into(), old_line, new_line }
    }

    pub fn insert(content: impl Into<String>, new_line: usize) -> Self {
        Self { kind: LineKind::Insert, content: content.into(), old_line: 0, new_line }
    }

    pub fn delete(content: impl Into<String>, old_line: usize) -> Self {
        Self { kind: LineKind::Delete, content: content.into(), old_line, new_line: 0 }
    }

    /// Returns `true` for inserted and deleted lines.
    pub fn is_change(&self) -> bool {
        self.kind != LineKind::Equal
    }
}

/// Aggregate change counts of a diff.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub changes: usize,
}

impl DiffStats {
    /// Count the changes in a sequence of classified lines.
    pub fn from_spans(spans: &[LineSpan]) -> Self {
        let (additions, deletions) = spans.iter().fold((0, 0), |(adds, dels), span| match span.kind {
            LineKind::Insert => (adds + 1, dels),
            LineKind::Delete => (adds, dels + 1),
            LineKind::Equal => (adds, dels),
        });
        Self { additions, deletions, changes: additions + deletions }
    }
}

/// The result of comparing two texts.
///
/// The stats are always derived from the lines; there is no way to set them
/// independently.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    lines: Vec<LineSpan>,
    stats: DiffStats,
}

impl DiffReport {
    pub fn new(lines: Vec<LineSpan>) -> Self {
        let stats = DiffStats::from_spans(&lines);
        Self { lines, stats }
    }

    /// The classified lines, in document order.
    pub fn lines(&self) -> &[LineSpan] {
        &self.lines
    }

    pub fn stats(&self) -> DiffStats {
        self.stats
    }

    pub fn into_lines(self) -> Vec<LineSpan> {
        self.lines
    }

    /// Returns `true` if the two compared texts had identical lines.
    pub fn is_identical(&self) -> bool {
        self.stats.changes == 0
    }

    /// Lines of the original text, rebuilt from equal and deleted entries.
    pub fn original_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| l.kind != LineKind::Insert)
            .map(|l| l.content.as_str())
            .collect()
    }

    /// Lines of the modified text, rebuilt from equal and inserted entries.
    pub fn modified_lines(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|l| l.kind != LineKind::Delete)
            .map(|l| l.content.as_str())
            .collect()
    }
}
