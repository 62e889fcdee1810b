/// Capability traits for Cadence Player
///
/// The player controller never touches the browser directly. Media playback,
/// persistence, speech recognition, randomness and catalog retrieval are all
/// injected through these traits, so the controller runs unchanged in a browser,
/// in a native shell, or under test.
///
/// None of the traits require `Send`: the player is single-threaded and
/// browser handles are not thread-safe.
use crate::error::Result;
use crate::types::Catalog;
use async_trait::async_trait;

/// Media engine trait
///
/// Implementers wrap a single audio element. Lifecycle notifications
/// (metadata ready, time advanced, ended) are delivered by the platform
/// adapter calling the controller's handler methods.
pub trait MediaEngine {
    /// Point the engine at a new media resource
    ///
    /// Resets the play position to zero and starts loading metadata. Does not
    /// start playback.
    fn load(&mut self, src: &str);

    /// Start or resume playback
    ///
    /// # Errors
    /// Returns an error if the platform refuses to play (for example an
    /// autoplay policy or an unsupported resource)
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Current play position in seconds
    fn current_time(&self) -> f64;

    /// Move the play position (seconds)
    fn set_current_time(&mut self, seconds: f64);

    /// Duration of the loaded resource in seconds
    ///
    /// `None` until metadata has loaded.
    fn duration(&self) -> Option<f64>;

    /// Output volume (0.0 = silent, 1.0 = full volume)
    fn volume(&self) -> f64;

    /// Set the output volume (0.0 = silent, 1.0 = full volume)
    fn set_volume(&mut self, volume: f64);
}

/// String key-value store
///
/// Browser local storage on the web; anything with get/set semantics elsewhere.
pub trait KeyValueStore {
    /// Read a value, `None` when absent or unreadable
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value
    ///
    /// # Errors
    /// Returns an error if the store rejects the write (quota, private mode)
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Speech-to-text capability
///
/// Transcripts are not returned from `start`: they arrive later and are fed
/// into the controller like typed search text.
pub trait SpeechRecognizer {
    /// Whether the host supports speech recognition at all
    fn is_available(&self) -> bool;

    /// Begin listening for a single utterance
    ///
    /// # Errors
    /// Returns an error if recognition cannot be started
    fn start(&mut self) -> Result<()>;
}

/// Uniform random index chooser
pub trait IndexChooser {
    /// Pick an index uniformly from `0..len`
    ///
    /// Callers guarantee `len > 0`.
    fn choose(&mut self, len: usize) -> usize;
}

/// Catalog source
///
/// Retrieves the song list once at startup. This is the only asynchronous
/// boundary in the player.
#[async_trait(?Send)]
pub trait CatalogSource {
    /// Fetch and parse the catalog
    ///
    /// # Errors
    /// Returns an error if the payload cannot be retrieved or parsed
    async fn load(&self) -> Result<Catalog>;
}

/// Catalog source backed by an in-memory JSON payload
#[derive(Debug, Clone)]
pub struct StaticCatalogSource {
    payload: String,
}

impl StaticCatalogSource {
    /// Create a source that parses `payload` on load
    pub fn new(payload: impl Into<String>) -> Self {
        Self {
            payload: payload.into(),
        }
    }
}

#[async_trait(?Send)]
impl CatalogSource for StaticCatalogSource {
    async fn load(&self) -> Result<Catalog> {
        Catalog::from_json(&self.payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[tokio::test]
    async fn static_source_parses_payload() {
        let source = StaticCatalogSource::new(
            r#"[{"id": 1, "title": "One", "artist": "A", "filePath": "1.mp3", "imagePath": "1.jpg"}]"#,
        );

        let catalog = source.load().await.unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[tokio::test]
    async fn static_source_surfaces_parse_errors() {
        let source = StaticCatalogSource::new("<html>404</html>");

        let err = source.load().await.unwrap_err();
        assert!(matches!(err, CoreError::Payload(_)));
    }
}
