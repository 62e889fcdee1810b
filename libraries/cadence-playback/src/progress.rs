//! Progress and time presentation
//!
//! Turns media-engine duration/time notifications into display strings and
//! seek-bar values. The seek bar works in absolute seconds, never percentages.

use serde::{Deserialize, Serialize};

/// Format seconds as `m:ss`
///
/// Unknown, NaN, infinite, and negative inputs all display as `0:00`.
pub fn format_time(seconds: Option<f64>) -> String {
    let seconds = match seconds {
        Some(s) if s.is_finite() && s >= 0.0 => s,
        _ => return "0:00".to_string(),
    };
    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Snapshot for the progress row of the UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressView {
    /// Elapsed time display (`m:ss`)
    pub elapsed: String,

    /// Total duration display (`m:ss`)
    pub total: String,

    /// Seek-bar value in seconds
    pub position: f64,

    /// Seek-bar maximum in seconds (0 until metadata is ready)
    pub max: f64,
}

/// Tracks duration and position of the loaded song
#[derive(Debug, Clone, Default)]
pub struct ProgressPresenter {
    duration: Option<f64>,
    position: f64,
}

impl ProgressPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget the previous song's duration and position
    pub fn reset(&mut self) {
        self.duration = None;
        self.position = 0.0;
    }

    /// Metadata arrived: set the seek range `[0, duration]`
    pub fn on_metadata_ready(&mut self, duration: Option<f64>) -> ProgressView {
        self.duration = duration.filter(|d| d.is_finite() && *d >= 0.0);
        self.view()
    }

    /// Playback advanced to `current_time` seconds
    pub fn on_time_update(&mut self, current_time: f64) -> ProgressView {
        if current_time.is_finite() && current_time >= 0.0 {
            self.position = match self.duration {
                Some(duration) => current_time.min(duration),
                None => current_time,
            };
        }
        self.view()
    }

    /// Known duration in seconds
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Current seek-bar position in seconds
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn view(&self) -> ProgressView {
        ProgressView {
            elapsed: format_time(Some(self.position)),
            total: format_time(self.duration),
            position: self.position,
            max: self.duration.unwrap_or(0.0),
        }
    }
}
