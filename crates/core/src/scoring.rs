//! Scoring module - line-clear points, levels and gravity
//!
//! Points depend only on how many rows one lock clears. The level follows
//! total lines, and gravity follows the level.

use crate::types::{GRAVITY_TABLE, LINES_PER_LEVEL, LINE_SCORES, MAX_LEVEL};

/// Points for clearing `lines` rows in one pass
/// lines: number of lines cleared (1-4); anything else scores 0
pub fn line_score(lines: usize) -> u32 {
    LINE_SCORES.get(lines).copied().unwrap_or(0)
}

/// Level for a running line total: one level per 10 lines, starting at 1
/// and capped at 15
pub fn level_for_lines(lines: u32) -> u32 {
    (lines / LINES_PER_LEVEL + 1).min(MAX_LEVEL)
}

/// Rows-per-tick gravity for a level
///
/// Levels past the table reuse the last entry; level 0 reads as level 1.
pub fn gravity_for_level(level: u32) -> f64 {
    let idx = level.clamp(1, MAX_LEVEL) as usize - 1;
    GRAVITY_TABLE[idx]
}
