//! Scoring module - line clear points, drop bonuses, level and gravity curves

use crate::types::{
    BASE_FALL_MS, FALL_STEP_MS, HARD_DROP_BONUS, LINES_PER_LEVEL, LINE_SCORES, MIN_FALL_MS,
    SOFT_DROP_BONUS,
};

/// Points for clearing `lines` rows at once on `level` (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let base = LINE_SCORES[lines.min(LINE_SCORES.len() - 1)];
    base.saturating_mul(level)
}

/// Points for a drop of `cells` rows
///
/// Hard drops award `HARD_DROP_BONUS` per cell, gravity-driven soft drop
/// descents `SOFT_DROP_BONUS` per cell.
pub fn calculate_drop_score(cells: u32, hard_drop: bool) -> u32 {
    let per_cell = if hard_drop {
        HARD_DROP_BONUS
    } else {
        SOFT_DROP_BONUS
    };
    cells.saturating_mul(per_cell)
}

/// Level reached after `lines` cumulative cleared lines (starts at 1)
pub fn level_for_lines(lines: u32) -> u32 {
    1 + lines / LINES_PER_LEVEL
}

/// Gravity interval at `level`: 900ms at level 1, 60ms faster per level, floored at 70ms
pub fn get_fall_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(FALL_STEP_MS);
    BASE_FALL_MS.saturating_sub(speedup).max(MIN_FALL_MS)
}
