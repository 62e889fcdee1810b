//! Volume level validation
//!
//! The media engine takes a linear level in `0.0..=1.0`, the same scale as
//! the page's volume slider.

use crate::error::{PlayerError, Result};

/// Validated linear volume level
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f64);

impl Volume {
    /// Full volume
    pub const MAX: Volume = Volume(1.0);

    /// Validate a slider value
    ///
    /// Rejects NaN, infinities, and anything outside `0.0..=1.0`.
    pub fn new(level: f64) -> Result<Self> {
        if level.is_finite() && (0.0..=1.0).contains(&level) {
            Ok(Self(level))
        } else {
            Err(PlayerError::InvalidVolume(level))
        }
    }

    pub fn level(self) -> f64 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::MAX
    }
}
