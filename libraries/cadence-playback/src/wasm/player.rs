//! WASM-compatible player wrapper

use super::media::HtmlAudioEngine;
use super::speech::BrowserSpeech;
use super::storage::BrowserStorage;
use super::types::PlaylistRow;
use crate::{HttpCatalogSource, PlayerConfig, PlayerController, PlayerEvent, Tab};
use cadence_core::{CatalogSource, SongId};
use js_sys::{Function, Promise};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::str::FromStr;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;
use web_sys::{Event, HtmlAudioElement};

type Shared = Rc<RefCell<PlayerController>>;
type Callback = Rc<RefCell<Option<Function>>>;

/// Media element events forwarded to the controller
const MEDIA_EVENTS: [&str; 3] = ["loadedmetadata", "timeupdate", "ended"];

/// WASM-compatible player
///
/// Wraps [`PlayerController`] around the page's `<audio>` element, browser
/// storage and speech recognition. Every call drains the controller's events
/// into the callback registered with `onEvent`.
#[wasm_bindgen]
pub struct WasmPlayer {
    inner: Shared,
    on_event: Callback,
    audio: HtmlAudioElement,
    catalog_url: String,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
}

#[wasm_bindgen]
impl WasmPlayer {
    /// Create a player for an `<audio>` element
    ///
    /// `config` is an optional plain object matching `PlayerConfig`.
    #[wasm_bindgen(constructor)]
    pub fn new(audio: HtmlAudioElement, config: JsValue) -> Result<WasmPlayer, JsValue> {
        console_error_panic_hook::set_once();

        let config = parse_config(config)?;
        let catalog_url = config.catalog_url.clone();
        let language = config.speech_language.clone();
        let on_event: Callback = Rc::new(RefCell::new(None));

        let transcript_target = on_event.clone();
        let rejection_target = on_event.clone();
        let inner: Shared = Rc::new_cyclic(|weak: &Weak<RefCell<PlayerController>>| {
            let rejected = weak.clone();
            let engine = HtmlAudioEngine::new(audio.clone()).with_rejection_handler(
                move |reason| {
                    if let Some(inner) = rejected.upgrade() {
                        dispatch(&inner, &rejection_target, |c| c.on_play_rejected(&reason));
                    }
                },
            );

            let weak = weak.clone();
            let speech = BrowserSpeech::new(&language, move |transcript| {
                if let Some(inner) = weak.upgrade() {
                    dispatch(&inner, &transcript_target, |c| c.on_transcript(&transcript));
                }
            });
            RefCell::new(PlayerController::new(
                config,
                Box::new(engine),
                Box::new(BrowserStorage::new()),
                Box::new(speech),
            ))
        });

        let mut player = Self {
            inner,
            on_event,
            audio,
            catalog_url,
            listeners: Vec::new(),
        };
        player.attach_media_listeners()?;
        Ok(player)
    }

    // ===== Lifecycle =====

    /// Fetch the catalog and cue the first song
    ///
    /// Resolves once the catalog is installed; rejects with the load error.
    pub fn initialize(&self) -> Promise {
        let inner = self.inner.clone();
        let on_event = self.on_event.clone();
        let catalog_url = self.catalog_url.clone();

        future_to_promise(async move {
            let base = web_sys::window()
                .and_then(|w| w.location().href().ok())
                .unwrap_or_default();

            dispatch(&inner, &on_event, |c| c.begin_loading()).map_err(to_js)?;

            // The fetch runs outside any borrow of the controller
            let result = match HttpCatalogSource::relative_to(&base, &catalog_url) {
                Ok(source) => source.load().await,
                Err(e) => Err(e),
            };

            dispatch(&inner, &on_event, |c| c.finish_loading(result))
                .map(|_| JsValue::UNDEFINED)
                .map_err(to_js)
        })
    }

    /// Stop playback and detach from the audio element
    pub fn teardown(&mut self) {
        self.detach_media_listeners();
        self.dispatch(|c| c.teardown());
    }

    // ===== Playback Control =====

    #[wasm_bindgen(js_name = togglePlayPause)]
    pub fn toggle_play_pause(&self) {
        self.dispatch(|c| c.toggle_play_pause());
    }

    pub fn next(&self) {
        self.dispatch(|c| c.next());
    }

    pub fn previous(&self) {
        self.dispatch(|c| c.previous());
    }

    /// Play a song by catalog index (as carried by playlist rows)
    #[wasm_bindgen(js_name = playIndex)]
    pub fn play_index(&self, index: usize) -> Result<(), JsValue> {
        self.dispatch(|c| c.play_index(index)).map_err(to_js)
    }

    /// Set volume (0.0 - 1.0)
    #[wasm_bindgen(js_name = setVolume)]
    pub fn set_volume(&self, level: f64) -> Result<(), JsValue> {
        self.dispatch(|c| c.set_volume(level)).map_err(to_js)
    }

    /// Seek to position in seconds
    #[wasm_bindgen(js_name = seekTo)]
    pub fn seek_to(&self, seconds: f64) -> Result<(), JsValue> {
        self.dispatch(|c| c.seek_to(seconds)).map_err(to_js)
    }

    #[wasm_bindgen(js_name = toggleShuffle)]
    pub fn toggle_shuffle(&self) {
        self.dispatch(|c| c.toggle_shuffle());
    }

    #[wasm_bindgen(js_name = toggleRepeat)]
    pub fn toggle_repeat(&self) {
        self.dispatch(|c| c.toggle_repeat());
    }

    // ===== Playlist View =====

    /// Select a tab ("all" | "favorites" | "recent")
    #[wasm_bindgen(js_name = selectTab)]
    pub fn select_tab(&self, tab: &str) -> Result<(), JsValue> {
        let tab = Tab::from_str(tab).map_err(to_js)?;
        self.dispatch(|c| c.select_tab(tab));
        Ok(())
    }

    #[wasm_bindgen(js_name = setSearch)]
    pub fn set_search(&self, text: &str) {
        self.dispatch(|c| c.set_search(text));
    }

    #[wasm_bindgen(js_name = clearSearch)]
    pub fn clear_search(&self) {
        self.dispatch(|c| c.clear_search());
    }

    #[wasm_bindgen(js_name = startVoiceSearch)]
    pub fn start_voice_search(&self) -> Result<(), JsValue> {
        self.dispatch(|c| c.start_voice_search()).map_err(to_js)
    }

    /// Flip a song's favorite flag; returns the new flag
    #[wasm_bindgen(js_name = toggleFavorite)]
    pub fn toggle_favorite(&self, song_id: f64) -> Result<bool, JsValue> {
        let id = SongId::new(song_id as i64);
        self.dispatch(|c| c.toggle_favorite(id)).map_err(to_js)
    }

    /// Visible playlist rows
    pub fn playlist(&self) -> Result<JsValue, JsValue> {
        let controller = self.inner.borrow();
        let current = controller.current_index();
        let rows: Vec<PlaylistRow<'_>> = controller
            .playlist()
            .into_iter()
            .map(|entry| PlaylistRow::new(entry, current))
            .collect();
        to_value(&rows)
    }

    // ===== State Queries =====

    /// Playback state ("stopped" | "playing" | "paused")
    pub fn state(&self) -> Result<JsValue, JsValue> {
        to_value(&self.inner.borrow().state())
    }

    #[wasm_bindgen(js_name = currentIndex)]
    pub fn current_index(&self) -> Option<usize> {
        self.inner.borrow().current_index()
    }

    #[wasm_bindgen(js_name = currentSong)]
    pub fn current_song(&self) -> Result<JsValue, JsValue> {
        to_value(&self.inner.borrow().current_song())
    }

    #[wasm_bindgen(js_name = isShuffle)]
    pub fn is_shuffle(&self) -> bool {
        self.inner.borrow().is_shuffle()
    }

    #[wasm_bindgen(js_name = isRepeat)]
    pub fn is_repeat(&self) -> bool {
        self.inner.borrow().is_repeat()
    }

    pub fn volume(&self) -> f64 {
        self.inner.borrow().volume()
    }

    pub fn progress(&self) -> Result<JsValue, JsValue> {
        to_value(&self.inner.borrow().progress())
    }

    pub fn visits(&self) -> f64 {
        self.inner.borrow().preferences().visits() as f64
    }

    // ===== Event Listeners =====

    /// Register the event callback
    ///
    /// Events queued before registration (visit count, voice search notice)
    /// are delivered immediately.
    #[wasm_bindgen(js_name = onEvent)]
    pub fn on_event(&self, callback: Function) {
        *self.on_event.borrow_mut() = Some(callback);
        self.dispatch(|_| ());
    }

    // ===== Internal =====

    fn dispatch<R>(&self, f: impl FnOnce(&mut PlayerController) -> R) -> R {
        dispatch(&self.inner, &self.on_event, f)
    }

    fn attach_media_listeners(&mut self) -> Result<(), JsValue> {
        for name in MEDIA_EVENTS {
            let weak = Rc::downgrade(&self.inner);
            let on_event = self.on_event.clone();
            let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                if inner.try_borrow_mut().is_err() {
                    warn!(media_event = name, "Player busy, dropping media event");
                    return;
                }
                dispatch(&inner, &on_event, |c| match name {
                    "loadedmetadata" => c.on_metadata_ready(),
                    "timeupdate" => c.on_time_update(),
                    _ => c.on_media_ended(),
                });
            });
            self.audio
                .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            self.listeners.push((name, closure));
        }
        Ok(())
    }

    fn detach_media_listeners(&mut self) {
        for (name, closure) in self.listeners.drain(..) {
            if let Err(e) = self
                .audio
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                warn!(media_event = name, error = ?e, "Could not remove media listener");
            }
        }
    }
}

impl Drop for WasmPlayer {
    fn drop(&mut self) {
        self.detach_media_listeners();
    }
}

/// Run a handler, then deliver its events with the controller released
fn dispatch<R>(
    inner: &Shared,
    on_event: &Callback,
    f: impl FnOnce(&mut PlayerController) -> R,
) -> R {
    let callback = on_event.borrow().clone();
    let mut controller = inner.borrow_mut();
    let result = f(&mut controller);

    // Events stay queued until a callback is registered
    let Some(callback) = callback else {
        return result;
    };
    if !controller.has_pending_events() {
        return result;
    }
    let events = controller.drain_events();
    drop(controller);

    for event in events {
        emit(&callback, &event);
    }
    result
}

fn emit(callback: &Function, event: &PlayerEvent) {
    match serde_wasm_bindgen::to_value(event) {
        Ok(value) => {
            if let Err(e) = callback.call1(&JsValue::NULL, &value) {
                warn!(error = ?e, "Event callback threw");
            }
        }
        Err(e) => warn!(error = %e, "Could not serialize event"),
    }
}

fn parse_config(config: JsValue) -> Result<PlayerConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(PlayerConfig::default());
    }
    let json = js_sys::JSON::stringify(&config)?
        .as_string()
        .unwrap_or_default();
    PlayerConfig::from_json(&json).map_err(to_js)
}

fn to_value<T: serde::Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn to_js(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}
