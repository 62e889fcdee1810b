//! Web Speech API recognizer

use cadence_core::{CoreError, SpeechRecognizer};
use js_sys::{Array, Function, Reflect};
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

const CONSTRUCTORS: [&str; 2] = ["SpeechRecognition", "webkitSpeechRecognition"];

/// Speech recognizer over `SpeechRecognition` (or the webkit-prefixed one)
///
/// Transcripts are delivered to the callback passed to [`BrowserSpeech::new`].
pub struct BrowserSpeech {
    recognition: Option<JsValue>,
    _on_result: Option<Closure<dyn FnMut(JsValue)>>,
}

impl BrowserSpeech {
    pub fn new(language: &str, on_transcript: impl Fn(String) + 'static) -> Self {
        let Some(recognition) = construct_recognition() else {
            return Self {
                recognition: None,
                _on_result: None,
            };
        };

        if let Err(e) = Reflect::set(&recognition, &"lang".into(), &language.into()) {
            warn!(error = ?e, "Could not set recognition language");
        }

        let on_result = Closure::<dyn FnMut(JsValue)>::new(move |event: JsValue| {
            match first_transcript(&event) {
                Some(transcript) => on_transcript(transcript),
                None => debug!("Recognition result without transcript"),
            }
        });
        if let Err(e) = Reflect::set(&recognition, &"onresult".into(), on_result.as_ref()) {
            warn!(error = ?e, "Could not attach recognition handler");
        }

        Self {
            recognition: Some(recognition),
            _on_result: Some(on_result),
        }
    }
}

impl SpeechRecognizer for BrowserSpeech {
    fn is_available(&self) -> bool {
        self.recognition.is_some()
    }

    fn start(&mut self) -> cadence_core::Result<()> {
        let recognition = self
            .recognition
            .as_ref()
            .ok_or_else(|| CoreError::speech("speech recognition is not supported"))?;
        let start = Reflect::get(recognition, &"start".into())
            .ok()
            .and_then(|f| f.dyn_into::<Function>().ok())
            .ok_or_else(|| CoreError::speech("recognition has no start method"))?;
        start
            .call0(recognition)
            .map(|_| ())
            .map_err(|e| CoreError::speech(format!("{:?}", e)))
    }
}

fn construct_recognition() -> Option<JsValue> {
    let window = web_sys::window()?;
    CONSTRUCTORS.iter().find_map(|name| {
        let ctor = Reflect::get(&window, &(*name).into())
            .ok()?
            .dyn_into::<Function>()
            .ok()?;
        Reflect::construct(&ctor, &Array::new()).ok()
    })
}

/// `event.results[0][0].transcript`
fn first_transcript(event: &JsValue) -> Option<String> {
    let results = Reflect::get(event, &"results".into()).ok()?;
    let result = Reflect::get_u32(&results, 0).ok()?;
    let alternative = Reflect::get_u32(&result, 0).ok()?;
    Reflect::get(&alternative, &"transcript".into()).ok()?.as_string()
}
