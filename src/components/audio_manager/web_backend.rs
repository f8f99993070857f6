// Browser (wasm) audio resource: one hidden <audio> element plus DOM listeners.
use super::controller::PlaybackController;
use super::gestures::{
    GestureHandler, GestureListener, GestureOrigin, GestureSource, TRANSPORT_CONTROL_ATTR,
};
use super::resource::AudioResource;
use crate::error::PlayError;
use futures_util::future::{ready, LocalBoxFuture};
use futures_util::FutureExt;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element, EventTarget, HtmlAudioElement};

const AUDIO_ELEMENT_ID: &str = "sitetune-audio";
const GESTURE_EVENTS: [&str; 3] = ["pointerdown", "touchstart", "keydown"];

/// Initialize the global audio element once.
pub fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "metadata").ok()?;
    audio.set_attribute("playsinline", "true").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

/// `HtmlAudioElement`-backed resource. Stateless handle; the element lives in the DOM.
#[derive(Clone, Default)]
pub struct HtmlAudioResource;

impl AudioResource for HtmlAudioResource {
    fn load(&self, url: &str) {
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_src(url);
        }
    }

    fn play(&self) -> LocalBoxFuture<'static, Result<(), PlayError>> {
        let Some(audio) = get_or_create_audio_element() else {
            return ready(Err(PlayError::Resource("audio element unavailable".into()))).boxed_local();
        };
        match audio.play() {
            Ok(promise) => async move {
                wasm_bindgen_futures::JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(play_error_from_js)
            }
            .boxed_local(),
            Err(err) => ready(Err(play_error_from_js(err))).boxed_local(),
        }
    }

    fn pause(&self) {
        if let Some(audio) = get_or_create_audio_element() {
            let _ = audio.pause();
        }
    }

    fn set_volume(&self, volume: f64) {
        if let Some(audio) = get_or_create_audio_element() {
            audio.set_volume(volume.clamp(0.0, 1.0));
        }
    }
}

/// Classifies a rejected `play()` promise by its DOMException name.
fn play_error_from_js(value: JsValue) -> PlayError {
    let name = js_sys::Reflect::get(&value, &"name".into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    let message = js_sys::Reflect::get(&value, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .unwrap_or_default();
    let detail = if message.is_empty() {
        name.clone()
    } else {
        format!("{name}: {message}")
    };

    match name.as_str() {
        "NotSupportedError" => PlayError::Resource(detail),
        _ => PlayError::Blocked(detail),
    }
}

/// DOM event listener that is removed when dropped.
pub struct DomListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl DomListener {
    pub fn attach(
        target: &EventTarget,
        event: &'static str,
        callback: Closure<dyn FnMut(web_sys::Event)>,
    ) -> Option<Self> {
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for DomListener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// Document-level pointer, touch and key listeners, attached only while listening.
#[derive(Clone, Default)]
pub struct DocumentGestures;

impl GestureSource for DocumentGestures {
    fn listen(&self, handler: GestureHandler) -> GestureListener {
        let Some(document) = window().and_then(|w| w.document()) else {
            return GestureListener::new(|| {});
        };
        let target: &EventTarget = document.as_ref();
        let listeners: Vec<DomListener> = GESTURE_EVENTS
            .iter()
            .filter_map(|&event| {
                let handler = handler.clone();
                let callback = Closure::wrap(Box::new(move |event: web_sys::Event| {
                    if gesture_origin(&event).unlocks_audio() {
                        handler();
                    }
                }) as Box<dyn FnMut(_)>);
                DomListener::attach(target, event, callback)
            })
            .collect();
        GestureListener::new(move || drop(listeners))
    }
}

fn gesture_origin(event: &web_sys::Event) -> GestureOrigin {
    let selector = format!("[{TRANSPORT_CONTROL_ATTR}]");
    let on_transport = event
        .target()
        .and_then(|target| target.dyn_into::<Element>().ok())
        .and_then(|element| element.closest(&selector).ok().flatten())
        .is_some();
    if on_transport {
        GestureOrigin::TransportControl
    } else {
        GestureOrigin::Page
    }
}

/// Routes the element's `ended` and `error` events into the controller.
pub fn bind_media_events(controller: &PlaybackController<HtmlAudioResource>) -> Vec<DomListener> {
    let Some(audio) = get_or_create_audio_element() else {
        return Vec::new();
    };
    let target: &EventTarget = audio.as_ref();
    let mut listeners = Vec::new();

    let on_ended = {
        let controller = controller.clone();
        Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move { controller.on_track_ended().await });
        }) as Box<dyn FnMut(_)>)
    };
    listeners.extend(DomListener::attach(target, "ended", on_ended));

    let on_error = {
        let controller = controller.clone();
        let audio = audio.clone();
        Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let controller = controller.clone();
            let message = media_error_message(&audio);
            wasm_bindgen_futures::spawn_local(async move {
                controller.on_resource_error(&message).await
            });
        }) as Box<dyn FnMut(_)>)
    };
    listeners.extend(DomListener::attach(target, "error", on_error));

    listeners
}

fn media_error_message(audio: &HtmlAudioElement) -> String {
    let audio_js = JsValue::from(audio.clone());
    let code = js_sys::Reflect::get(&audio_js, &"error".into())
        .ok()
        .filter(|error| !error.is_null() && !error.is_undefined())
        .and_then(|error| js_sys::Reflect::get(&error, &"code".into()).ok())
        .and_then(|code| code.as_f64())
        .unwrap_or(0.0) as u16;

    match code {
        1 => "Playback was aborted before the stream loaded.",
        2 => "Network error while loading this track.",
        3 => "Audio playback failed due to a decode error.",
        4 => "Failed to load audio because no supported source was found.",
        _ => "Unable to load this audio source.",
    }
    .to_string()
}
