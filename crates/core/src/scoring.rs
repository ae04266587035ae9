//! Scoring module - classic line-clear table and soft-drop bonus

use crate::types::{LINE_SCORES, SOFT_DROP_POINTS};

/// Points for clearing `rows` at once on `level` (0-based)
///
/// More than four rows can't happen from a single lock, but is scored as four.
pub fn row_clear_points(rows: usize, level: u8) -> u32 {
    let base = LINE_SCORES[rows.min(LINE_SCORES.len() - 1)];
    base * (level as u32 + 1)
}

/// Bonus for one manual down step
///
/// Only steps taken after the first triggering frame of a held down button
/// earn the point; the initial press is free movement.
pub fn soft_drop_bonus(held_frames: u32) -> u32 {
    if held_frames > 0 {
        SOFT_DROP_POINTS
    } else {
        0
    }
}
