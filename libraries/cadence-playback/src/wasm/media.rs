//! `<audio>` element media engine

use cadence_core::{CoreError, MediaEngine};
use js_sys::Reflect;
use std::rc::Rc;
use tracing::{debug, warn};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;

type RejectionHandler = Rc<dyn Fn(String)>;

/// Media engine over an `HtmlAudioElement`
///
/// `play()` only reports synchronous failures. Rejections of the returned
/// promise (autoplay policy, unsupported source) go to the rejection handler.
pub struct HtmlAudioEngine {
    element: HtmlAudioElement,
    on_rejected: Option<RejectionHandler>,
}

impl HtmlAudioEngine {
    pub fn new(element: HtmlAudioElement) -> Self {
        Self {
            element,
            on_rejected: None,
        }
    }

    /// Receive the reason whenever a play promise is rejected
    pub fn with_rejection_handler(mut self, handler: impl Fn(String) + 'static) -> Self {
        self.on_rejected = Some(Rc::new(handler));
        self
    }
}

impl MediaEngine for HtmlAudioEngine {
    fn load(&mut self, src: &str) {
        self.element.set_src(src);
        self.element.load();
    }

    fn play(&mut self) -> cadence_core::Result<()> {
        let promise = self
            .element
            .play()
            .map_err(|e| CoreError::media(format!("{:?}", e)))?;

        let on_rejected = self.on_rejected.clone();
        spawn_local(async move {
            let Err(e) = JsFuture::from(promise).await else {
                return;
            };
            let name = error_name(&e);
            // A new src or pause() interrupted this request
            if name.as_deref() == Some("AbortError") {
                debug!("Play request superseded");
                return;
            }
            warn!(error = ?e, "Audio element rejected play");
            if let Some(handler) = on_rejected {
                handler(name.unwrap_or_else(|| "play() was rejected".to_string()));
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Err(e) = self.element.pause() {
            warn!(error = ?e, "Audio element rejected pause");
        }
    }

    fn current_time(&self) -> f64 {
        self.element.current_time()
    }

    fn set_current_time(&mut self, seconds: f64) {
        self.element.set_current_time(seconds);
    }

    fn duration(&self) -> Option<f64> {
        let duration = self.element.duration();
        duration.is_finite().then_some(duration)
    }

    fn volume(&self) -> f64 {
        self.element.volume()
    }

    fn set_volume(&mut self, volume: f64) {
        self.element.set_volume(volume);
    }
}

/// `DOMException.name` of a rejection reason
fn error_name(error: &JsValue) -> Option<String> {
    Reflect::get(error, &"name".into()).ok()?.as_string()
}
