//! Engine tuning parameters.

use crate::error::{EngineError, Result, MAX_DIMENSION, MAX_PREVIEW_LEN, MIN_DIMENSION};
use crate::types::{
    BOARD_HEIGHT, BOARD_WIDTH, HARD_DROP_COOLDOWN_MS, LOCK_DELAY_MS, PREVIEW_LEN,
    ROTATION_COOLDOWN_MS, SOFT_DROP_INTERVAL_MS,
};

/// Rules and timings for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: u16,
    pub height: u16,
    /// Number of upcoming kinds kept in the preview queue
    pub preview_len: usize,
    pub lock_delay_ms: u32,
    pub rotation_cooldown_ms: u32,
    pub hard_drop_cooldown_ms: u32,
    pub soft_drop_interval_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            preview_len: PREVIEW_LEN,
            lock_delay_ms: LOCK_DELAY_MS,
            rotation_cooldown_ms: ROTATION_COOLDOWN_MS,
            hard_drop_cooldown_ms: HARD_DROP_COOLDOWN_MS,
            soft_drop_interval_ms: SOFT_DROP_INTERVAL_MS,
        }
    }
}

impl EngineConfig {
    /// Check every parameter against the engine's preconditions
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(self.width, self.height)?;
        if self.preview_len == 0 || self.preview_len > MAX_PREVIEW_LEN {
            return Err(EngineError::InvalidPreviewLen(self.preview_len));
        }
        if self.soft_drop_interval_ms == 0 {
            return Err(EngineError::ZeroInterval {
                name: "soft_drop_interval_ms",
            });
        }
        Ok(())
    }
}

pub(crate) fn validate_dimensions(width: u16, height: u16) -> Result<()> {
    let range = MIN_DIMENSION..=MAX_DIMENSION;
    if !range.contains(&width) || !range.contains(&height) {
        return Err(EngineError::InvalidDimensions {
            width,
            height,
            min: MIN_DIMENSION,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}
