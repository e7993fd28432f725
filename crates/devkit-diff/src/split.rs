//! Line splitting.
//!
//! Lines are separated by `\n` only. A single trailing separator does not
//! start a new (empty) line, so `"a\nb\n"` and `"a\nb"` both have two lines
//! while `"a\n\n"` has two lines, the second one empty. A `\r` before the
//! separator stays part of the line content.

/// Split `text` into its lines, without line terminators.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_terminator('\n').collect()
}

/// Number of lines [`split_lines`] would produce, without allocating.
pub fn count_lines(text: &str) -> usize {
    text.split_terminator('\n').count()
}
