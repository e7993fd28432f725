//! The comparison engine.
//!
//! Uses the `similar` crate's Myers implementation (O(ND) time, linear space)
//! over whole lines, then pairs every matched line with its earliest possible
//! partner. Within each changed region all deleted lines are emitted before
//! any inserted line.
//!
//! The cost of a comparison is bounded before the alignment runs: a capped
//! Myers search measures the edit distance and gives up once
//! `lines × distance` would exceed [`EngineConfig::max_edit_cost`].

use serde::{Deserialize, Serialize};
use similar::{capture_diff_slices, Algorithm, DiffTag};
use tracing::debug;

use crate::error::{DiffError, DiffResult, Side};
use crate::model::{DiffReport, LineSpan};
use crate::split::{count_lines, split_lines};

/// Guards applied before a comparison runs. A limit of `0` disables it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum size of either input, in bytes.
    pub max_input_bytes: usize,
    /// Maximum number of lines in either input.
    pub max_lines: usize,
    /// Maximum search work: changed-region lines times edit distance.
    pub max_edit_cost: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_bytes: 16 * 1024 * 1024,
            max_lines: 200_000,
            max_edit_cost: 100_000_000,
        }
    }
}

impl EngineConfig {
    /// A configuration with every guard disabled.
    pub fn unbounded() -> Self {
        Self { max_input_bytes: 0, max_lines: 0, max_edit_cost: 0 }
    }

    fn check(&self, side: Side, text: &str) -> DiffResult<()> {
        if self.max_input_bytes > 0 && text.len() > self.max_input_bytes {
            return Err(DiffError::InputTooLarge {
                side,
                limit: self.max_input_bytes,
                actual: text.len(),
                unit: "bytes",
            });
        }
        if self.max_lines > 0 {
            let lines = count_lines(text);
            if lines > self.max_lines {
                return Err(DiffError::InputTooLarge {
                    side,
                    limit: self.max_lines,
                    actual: lines,
                    unit: "lines",
                });
            }
        }
        Ok(())
    }

    fn check_cost(&self, old: &[&str], new: &[&str]) -> DiffResult<()> {
        if self.max_edit_cost == 0 {
            return Ok(());
        }
        let (old, new) = trim_common(old, new);
        let span = (old.len() + new.len()) as u64;
        if span == 0 {
            return Ok(());
        }
        let max_distance = usize::try_from(self.max_edit_cost / span).unwrap_or(usize::MAX);
        if edit_distance_within(old, new, max_distance).is_none() {
            return Err(DiffError::TooManyChanges {
                lines: old.len() + new.len(),
                max_distance,
                budget: self.max_edit_cost,
            });
        }
        Ok(())
    }
}

/// Stateless line diff engine. Cheap to clone and safe to share across threads.
#[derive(Clone, Debug, Default)]
pub struct DiffEngine {
    config: EngineConfig,
}

impl DiffEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compare two texts line by line.
    ///
    /// Fails only when an input exceeds a configured guard; input is never
    /// truncated.
    pub fn compare(&self, original: &str, modified: &str) -> DiffResult<DiffReport> {
        self.config.check(Side::Original, original)?;
        self.config.check(Side::Modified, modified)?;

        let old = split_lines(original);
        let new = split_lines(modified);

        let lines = if old == new {
            old.iter()
                .enumerate()
                .map(|(i, line)| LineSpan::equal(*line, i + 1, i + 1))
                .collect()
        } else {
            self.config.check_cost(&old, &new)?;
            align(&old, &new)
        };

        let report = DiffReport::new(lines);
        let stats = report.stats();
        debug!(
            old_lines = old.len(),
            new_lines = new.len(),
            additions = stats.additions,
            deletions = stats.deletions,
            "compared texts"
        );
        Ok(report)
    }
}

/// Compare two texts with the default [`EngineConfig`].
pub fn compare(original: &str, modified: &str) -> DiffResult<DiffReport> {
    DiffEngine::default().compare(original, modified)
}

/// Align the two line sequences and emit one span per line.
fn align(old: &[&str], new: &[&str]) -> Vec<LineSpan> {
    let mut pairs = Vec::new();
    for op in capture_diff_slices(Algorithm::Myers, old, new) {
        let (tag, old_range, new_range) = op.as_tag_tuple();
        if tag == DiffTag::Equal {
            pairs.extend(old_range.zip(new_range));
        }
    }
    earliest_matches(old, new, &mut pairs);

    let mut out = Vec::with_capacity(old.len().max(new.len()));
    let (mut o, mut n) = (0, 0);
    for (po, pn) in pairs.into_iter().chain(std::iter::once((old.len(), new.len()))) {
        out.extend((o..po).map(|i| LineSpan::delete(old[i], i + 1)));
        out.extend((n..pn).map(|i| LineSpan::insert(new[i], i + 1)));
        if po < old.len() {
            out.push(LineSpan::equal(old[po], po + 1, pn + 1));
        }
        (o, n) = (po + 1, pn + 1);
    }
    out
}

/// Move every matched pair to the earliest lines with the same content.
///
/// Pairs are strictly increasing on both sides before and after; each pair
/// only moves within the gap left by its (already moved) predecessor, so the
/// number of matches never changes and the total scan is linear.
fn earliest_matches(old: &[&str], new: &[&str], pairs: &mut [(usize, usize)]) {
    let (mut o_floor, mut n_floor) = (0, 0);
    for pair in pairs.iter_mut() {
        let (o, n) = *pair;
        let line = old[o];
        let o_first = (o_floor..=o).find(|&i| old[i] == line).unwrap_or(o);
        let n_first = (n_floor..=n).find(|&i| new[i] == line).unwrap_or(n);
        *pair = (o_first, n_first);
        (o_floor, n_floor) = (o_first + 1, n_first + 1);
    }
}

/// Strip the common prefix and suffix of two line sequences.
fn trim_common<'a, 'b>(old: &'a [&'b str], new: &'a [&'b str]) -> (&'a [&'b str], &'a [&'b str]) {
    let prefix = old.iter().zip(new).take_while(|(a, b)| a == b).count();
    let (old, new) = (&old[prefix..], &new[prefix..]);
    let suffix = old.iter().rev().zip(new.iter().rev()).take_while(|(a, b)| a == b).count();
    (&old[..old.len() - suffix], &new[..new.len() - suffix])
}

/// Edit distance (inserted plus deleted lines) if it is at most `max_distance`.
///
/// Greedy forward Myers search; time is O((N + M) * max_distance) and space
/// O(max_distance).
fn edit_distance_within(old: &[&str], new: &[&str], max_distance: usize) -> Option<usize> {
    let (n, m) = (old.len() as isize, new.len() as isize);
    let max_d = max_distance.min(old.len() + new.len());
    let offset = max_d as isize + 1;
    let mut v = vec![0isize; 2 * max_d + 3];

    for d in 0..=max_d as isize {
        for k in (-d..=d).step_by(2) {
            let idx = (k + offset) as usize;
            let mut x = if k == -d || (k != d && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;
            while x < n && y < m && old[x as usize] == new[y as usize] {
                x += 1;
                y += 1;
            }
            v[idx] = x;
            if x >= n && y >= m {
                return Some(d as usize);
            }
        }
    }
    None
}
