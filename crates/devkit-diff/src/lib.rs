//! Line-level text diff engine for Devkit.
//!
//! Splits two texts into lines, computes a minimal edit script between the
//! line sequences (Myers, via `similar`), and emits every line classified as
//! equal, inserted, or deleted together with aggregate change counts.
//!
//! # Key Types
//!
//! - [`DiffEngine`] / [`EngineConfig`] -- The comparison entry point and its size guards
//! - [`DiffReport`] / [`LineSpan`] / [`DiffStats`] -- Classified lines plus derived counts
//! - [`SplitRow`] / [`UnifiedRow`] -- Side-by-side and interleaved renderings
//!
//! # Example
//!
//! ```
//! use devkit_diff::{compare, LineKind};
//!
//! let report = compare("a\nb\nc", "a\nX\nc").unwrap();
//! assert_eq!(report.stats().changes, 2);
//! assert_eq!(report.lines()[1].kind, LineKind::Delete);
//! assert_eq!(report.lines()[2].kind, LineKind::Insert);
//! ```

pub mod engine;
pub mod error;
pub mod model;
pub mod split;
pub mod view;

pub use engine::{compare, DiffEngine, EngineConfig};
pub use error::{DiffError, DiffResult, Side};
pub use model::{DiffReport, DiffStats, LineKind, LineSpan};
pub use split::split_lines;
pub use view::{render_unified, split_view, unified_view, CellKind, SplitCell, SplitRow, UnifiedRow};
