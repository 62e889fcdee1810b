//! Speech recognition fallbacks

use cadence_core::{CoreError, SpeechRecognizer};

/// Recognizer for hosts without speech-to-text
///
/// Reports itself unavailable, so the controller disables voice search once
/// at startup.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnsupportedSpeech;

impl SpeechRecognizer for UnsupportedSpeech {
    fn is_available(&self) -> bool {
        false
    }

    fn start(&mut self) -> cadence_core::Result<()> {
        Err(CoreError::speech("speech recognition is not supported"))
    }
}
