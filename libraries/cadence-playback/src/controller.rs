//! Player controller - core orchestration
//!
//! Keeps the current song, shuffle/repeat modes, the derived playlist, and the
//! persisted preference lists consistent while the user drives transport
//! controls, search and tabs, and while the media engine reports its own
//! lifecycle (metadata, time updates, end of track).

use crate::{
    config::PlayerConfig,
    error::{PlayerError, Result},
    events::PlayerEvent,
    preferences::PreferenceStore,
    progress::{ProgressPresenter, ProgressView},
    shuffle::{pick_other_index, ThreadRngChooser},
    types::{Lifecycle, PlaybackState, Tab},
    view::{derive_playlist, PlaylistEntry, ViewFilter},
    volume::Volume,
};
use cadence_core::{
    Catalog, CatalogSource, IndexChooser, KeyValueStore, MediaEngine, Song, SongId,
    SpeechRecognizer,
};
use tracing::{debug, error, info, warn};

/// Notice shown once when the host has no speech recognition
pub const VOICE_UNSUPPORTED_NOTICE: &str = "Your browser does not support voice recognition.";

/// Central player controller
///
/// One instance per session. Collaborators are injected at construction; the
/// controller never reaches for ambient globals and has no rendering surface.
/// Every handler runs to completion and queues [`PlayerEvent`]s for the
/// rendering layer to drain.
pub struct PlayerController {
    // Lifecycle
    lifecycle: Lifecycle,

    // Catalog and playback state
    catalog: Catalog,
    current: Option<usize>,
    state: PlaybackState,
    shuffle: bool,
    repeat: bool,
    volume: Volume,

    // Derived view inputs
    filter: ViewFilter,
    preferences: PreferenceStore,
    progress: ProgressPresenter,

    // Collaborators
    media: Box<dyn MediaEngine>,
    chooser: Box<dyn IndexChooser>,
    speech: Box<dyn SpeechRecognizer>,
    voice_available: bool,

    // Event queue for UI synchronization
    pending_events: Vec<PlayerEvent>,
}

impl PlayerController {
    /// Create a controller and start a session
    ///
    /// Loads persisted preferences, counts the visit, applies the initial
    /// volume, and probes speech recognition. The catalog is loaded separately
    /// with [`initialize`](Self::initialize).
    pub fn new(
        config: PlayerConfig,
        mut media: Box<dyn MediaEngine>,
        store: Box<dyn KeyValueStore>,
        speech: Box<dyn SpeechRecognizer>,
    ) -> Self {
        let mut preferences =
            PreferenceStore::load(store, config.storage_keys.clone(), config.recent_limit);
        let visits = preferences.record_visit();

        let volume = Volume::new(config.initial_volume).unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring configured volume");
            Volume::default()
        });
        media.set_volume(volume.level());

        let voice_available = speech.is_available();

        let mut controller = Self {
            lifecycle: Lifecycle::Created,
            catalog: Catalog::empty(),
            current: None,
            state: PlaybackState::Stopped,
            shuffle: false,
            repeat: false,
            volume,
            filter: ViewFilter::default(),
            preferences,
            progress: ProgressPresenter::new(),
            media,
            chooser: Box::new(ThreadRngChooser::new()),
            speech,
            voice_available,
            pending_events: Vec::new(),
        };

        controller.emit(PlayerEvent::VisitCount { count: visits });
        if !voice_available {
            info!("Speech recognition unavailable, voice search disabled");
            controller.emit(PlayerEvent::VoiceSearchDisabled);
            controller.emit(PlayerEvent::Notice {
                message: VOICE_UNSUPPORTED_NOTICE.to_string(),
            });
        }

        controller
    }

    /// Replace the random index chooser used by shuffle
    pub fn with_chooser(mut self, chooser: Box<dyn IndexChooser>) -> Self {
        self.chooser = chooser;
        self
    }

    // ===== Lifecycle =====

    /// Load the catalog from `source` and cue the first song
    ///
    /// On failure the player stays empty, a notice is queued, and the error is
    /// returned for diagnostics.
    pub async fn initialize(&mut self, source: &dyn CatalogSource) -> Result<()> {
        self.begin_loading()?;
        let result = source.load().await;
        self.finish_loading(result)
    }

    /// Mark the catalog fetch as started
    ///
    /// Fails with `AlreadyInitialized` on any second call, so the catalog is
    /// only ever fetched once per session.
    pub fn begin_loading(&mut self) -> Result<()> {
        match self.lifecycle {
            Lifecycle::Created => {
                self.lifecycle = Lifecycle::Loading;
                debug!("Catalog loading started");
                Ok(())
            }
            Lifecycle::Closed => Err(PlayerError::NotReady),
            Lifecycle::Loading | Lifecycle::Ready | Lifecycle::Failed => {
                Err(PlayerError::AlreadyInitialized)
            }
        }
    }

    /// Install the result of the catalog fetch
    pub fn finish_loading(&mut self, result: cadence_core::Result<Catalog>) -> Result<()> {
        if self.lifecycle != Lifecycle::Loading {
            warn!(lifecycle = ?self.lifecycle, "Dropping catalog result outside of loading");
            return Err(PlayerError::NotReady);
        }

        match result {
            Ok(catalog) => {
                info!(songs = catalog.len(), "Catalog installed");
                self.catalog = catalog;
                self.lifecycle = Lifecycle::Ready;
                self.emit(PlayerEvent::CatalogLoaded {
                    songs: self.catalog.len(),
                });
                if !self.catalog.is_empty() {
                    self.cue(0);
                }
                self.emit(PlayerEvent::ViewChanged);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Could not load songs");
                self.lifecycle = Lifecycle::Failed;
                self.emit(PlayerEvent::Notice {
                    message: format!("Could not load songs: {}", e),
                });
                self.emit(PlayerEvent::ViewChanged);
                Err(e.into())
            }
        }
    }

    /// Stop the engine and make every later handler a no-op
    pub fn teardown(&mut self) {
        if self.lifecycle == Lifecycle::Closed {
            return;
        }
        self.media.pause();
        self.lifecycle = Lifecycle::Closed;
        self.set_state(PlaybackState::Stopped);
        debug!("Player torn down");
    }

    // ===== Playback Control =====

    /// Play the song at a catalog index from the beginning
    ///
    /// Out-of-range indices are rejected without touching playback state.
    pub fn play_index(&mut self, index: usize) -> Result<()> {
        self.ensure_ready()?;
        let len = self.catalog.len();
        if len == 0 {
            return Err(PlayerError::EmptyCatalog);
        }
        if index >= len {
            return Err(PlayerError::IndexOutOfBounds { index, len });
        }
        self.start_song(index, true);
        Ok(())
    }

    /// Playing -> Paused, Paused/Stopped -> Playing
    pub fn toggle_play_pause(&mut self) {
        let Some(index) = self.transport_index() else {
            return;
        };
        match self.state {
            PlaybackState::Playing => {
                self.media.pause();
                self.set_state(PlaybackState::Paused);
            }
            PlaybackState::Paused => self.resume(),
            // Cued but never started: this is the song's first play
            PlaybackState::Stopped => self.start_song(index, false),
        }
    }

    /// Skip to the next song
    pub fn next(&mut self) {
        let Some(index) = self.transport_index() else {
            return;
        };
        let len = self.catalog.len();
        let target = if self.shuffle {
            pick_other_index(index, len, self.chooser.as_mut())
        } else {
            (index + 1) % len
        };
        self.start_song(target, true);
    }

    /// Go back to the previous song
    ///
    /// With shuffle on this picks a random song, same as `next`.
    pub fn previous(&mut self) {
        let Some(index) = self.transport_index() else {
            return;
        };
        let len = self.catalog.len();
        let target = if self.shuffle {
            pick_other_index(index, len, self.chooser.as_mut())
        } else {
            (index + len - 1) % len
        };
        self.start_song(target, true);
    }

    /// Media engine reached the end of the song
    pub fn on_media_ended(&mut self) {
        let Some(index) = self.transport_index() else {
            return;
        };
        if self.repeat {
            debug!(index, "Repeating song");
            self.start_song(index, true);
        } else {
            self.next();
        }
    }

    /// Set output volume (0.0-1.0)
    pub fn set_volume(&mut self, level: f64) -> Result<()> {
        self.ensure_open()?;
        let volume = Volume::new(level)?;
        self.volume = volume;
        self.media.set_volume(volume.level());
        self.emit(PlayerEvent::VolumeChanged {
            level: volume.level(),
        });
        Ok(())
    }

    /// Seek to an absolute position in seconds
    ///
    /// The position must lie in `[0, duration]`; requests before metadata is
    /// known are rejected.
    pub fn seek_to(&mut self, seconds: f64) -> Result<()> {
        if self.transport_index().is_none() {
            self.ensure_ready()?;
            return Err(PlayerError::EmptyCatalog);
        }
        let duration = self.progress.duration().or_else(|| self.media.duration());
        match duration {
            Some(duration) if seconds.is_finite() && (0.0..=duration).contains(&seconds) => {
                self.media.set_current_time(seconds);
                let progress = self.progress.on_time_update(seconds);
                self.emit(PlayerEvent::Progress { progress });
                Ok(())
            }
            _ => Err(PlayerError::InvalidSeekPosition(seconds)),
        }
    }

    /// Flip shuffle mode
    pub fn toggle_shuffle(&mut self) {
        if self.lifecycle == Lifecycle::Closed {
            return;
        }
        self.shuffle = !self.shuffle;
        self.emit_modes_changed();
    }

    /// Flip repeat mode
    pub fn toggle_repeat(&mut self) {
        if self.lifecycle == Lifecycle::Closed {
            return;
        }
        self.repeat = !self.repeat;
        self.emit_modes_changed();
    }

    // ===== Media Engine Notifications =====

    /// The engine rejected a play request after it was accepted
    ///
    /// Browsers report autoplay refusals asynchronously. Ignored unless the
    /// player still believes it is playing.
    pub fn on_play_rejected(&mut self, reason: &str) {
        if self.transport_index().is_none() || self.state != PlaybackState::Playing {
            return;
        }
        self.playback_refused(reason);
    }

    /// Metadata for the loaded song is available
    pub fn on_metadata_ready(&mut self) {
        if self.transport_index().is_none() {
            return;
        }
        let progress = self.progress.on_metadata_ready(self.media.duration());
        self.emit(PlayerEvent::Progress { progress });
    }

    /// Play position advanced
    pub fn on_time_update(&mut self) {
        if self.transport_index().is_none() {
            return;
        }
        let progress = self.progress.on_time_update(self.media.current_time());
        self.emit(PlayerEvent::Progress { progress });
    }

    // ===== Playlist View =====

    /// Select a playlist tab (clears any search text)
    pub fn select_tab(&mut self, tab: Tab) {
        if self.lifecycle == Lifecycle::Closed {
            return;
        }
        self.filter.select_tab(tab);
        self.emit(PlayerEvent::ViewChanged);
    }

    /// Update the search text; blank text reverts to the selected tab
    pub fn set_search(&mut self, text: &str) {
        if self.lifecycle == Lifecycle::Closed {
            return;
        }
        self.filter.set_search(text);
        self.emit(PlayerEvent::ViewChanged);
    }

    /// Clear the search text
    pub fn clear_search(&mut self) {
        self.set_search("");
    }

    /// Speech recognition produced a transcript
    pub fn on_transcript(&mut self, transcript: &str) {
        debug!(transcript, "Voice search transcript");
        self.set_search(transcript);
    }

    /// Start listening for a voice search
    pub fn start_voice_search(&mut self) -> Result<()> {
        self.ensure_open()?;
        if !self.voice_available {
            return Err(PlayerError::VoiceSearchUnavailable);
        }
        self.speech.start().map_err(|e| {
            warn!(error = %e, "Voice search failed to start");
            PlayerError::from(e)
        })
    }

    /// Flip favorite membership; returns `true` when the song is now a favorite
    pub fn toggle_favorite(&mut self, id: SongId) -> Result<bool> {
        self.ensure_open()?;
        let is_favorite = self.preferences.toggle_favorite(id);
        debug!(song_id = %id, is_favorite, "Favorite toggled");
        self.emit(PlayerEvent::FavoriteToggled {
            song_id: id,
            is_favorite,
        });
        self.emit(PlayerEvent::ViewChanged);
        Ok(is_favorite)
    }

    /// The currently visible playlist
    ///
    /// Entries carry catalog indices; pass them straight to `play_index`.
    pub fn playlist(&self) -> Vec<PlaylistEntry<'_>> {
        derive_playlist(
            &self.catalog,
            &self.filter,
            self.preferences.favorites(),
            self.preferences.recent(),
        )
    }

    // ===== State Queries =====

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Catalog index of the loaded song (`None` while the catalog is empty)
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.current.and_then(|index| self.catalog.get(index))
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn is_shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn is_repeat(&self) -> bool {
        self.repeat
    }

    pub fn volume(&self) -> f64 {
        self.volume.level()
    }

    pub fn filter(&self) -> &ViewFilter {
        &self.filter
    }

    pub fn progress(&self) -> ProgressView {
        self.progress.view()
    }

    pub fn preferences(&self) -> &PreferenceStore {
        &self.preferences
    }

    pub fn is_favorite(&self, id: SongId) -> bool {
        self.preferences.is_favorite(id)
    }

    pub fn is_voice_search_available(&self) -> bool {
        self.voice_available
    }

    // ===== Events =====

    /// Drain all pending events
    ///
    /// The rendering layer calls this after dispatching each handler.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    /// The one path that starts a song
    ///
    /// `load` is false only when starting the song that was cued at startup,
    /// which is already in the engine. Every caller (selection, skip,
    /// auto-advance, repeat, first play) lands here, so recently-played
    /// bookkeeping cannot diverge between them.
    fn start_song(&mut self, index: usize, load: bool) {
        let Some(song) = self.catalog.get(index).cloned() else {
            return;
        };
        debug!(index, song_id = %song.id, "Starting song");

        if load {
            self.load_into_engine(index, &song);
        }
        self.preferences.record_play(song.id);
        if self.filter.search().is_none() && self.filter.tab() == Tab::Recent {
            self.emit(PlayerEvent::ViewChanged);
        }
        self.resume();
    }

    /// Load a song without playing it (startup cue)
    fn cue(&mut self, index: usize) {
        let Some(song) = self.catalog.get(index).cloned() else {
            return;
        };
        debug!(index, song_id = %song.id, "Cueing song");
        self.load_into_engine(index, &song);
        self.set_state(PlaybackState::Stopped);
    }

    fn load_into_engine(&mut self, index: usize, song: &Song) {
        self.current = Some(index);
        self.progress.reset();
        self.media.load(&song.file_path);
        self.emit(PlayerEvent::SongChanged {
            index,
            song: song.clone(),
        });
        let progress = self.progress.view();
        self.emit(PlayerEvent::Progress { progress });
    }

    /// Ask the engine to play; a refusal leaves the player paused
    fn resume(&mut self) {
        match self.media.play() {
            Ok(()) => self.set_state(PlaybackState::Playing),
            Err(e) => self.playback_refused(&e.to_string()),
        }
    }

    fn playback_refused(&mut self, reason: &str) {
        warn!(reason, "Media engine refused to play");
        self.set_state(PlaybackState::Paused);
        self.emit(PlayerEvent::Notice {
            message: format!("Playback could not start: {}", reason),
        });
    }

    fn set_state(&mut self, state: PlaybackState) {
        self.state = state;
        self.emit(PlayerEvent::StateChanged { state });
    }

    /// Current index when transport controls are meaningful
    fn transport_index(&self) -> Option<usize> {
        if self.lifecycle == Lifecycle::Ready {
            self.current
        } else {
            None
        }
    }

    fn ensure_ready(&self) -> Result<()> {
        if self.lifecycle == Lifecycle::Ready {
            Ok(())
        } else {
            Err(PlayerError::NotReady)
        }
    }

    fn ensure_open(&self) -> Result<()> {
        if self.lifecycle == Lifecycle::Closed {
            Err(PlayerError::NotReady)
        } else {
            Ok(())
        }
    }

    fn emit_modes_changed(&mut self) {
        self.emit(PlayerEvent::ModesChanged {
            shuffle: self.shuffle,
            repeat: self.repeat,
        });
    }

    fn emit(&mut self, event: PlayerEvent) {
        self.pending_events.push(event);
    }
}
