//! Audio Manager - owns the single audio resource and the playback session.
//! Display surfaces only see `PlayerState` snapshots and `PlayerCommands`.

// Audio resource seam implemented per platform.
mod resource;
// Session state machine and snapshot subscriptions.
mod controller;
// Gesture sources for autoplay unlock.
mod gestures;
// Retry-on-gesture strategy for blocked autoplay.
mod unlock;
// Dioxus wiring: contexts, event bindings, session bootstrap.
mod controller_component;

// Browser <audio> element backend.
#[cfg(target_arch = "wasm32")]
mod web_backend;
// Desktop-webview eval bridge backend.
#[cfg(not(target_arch = "wasm32"))]
mod native_bridge;

#[cfg(test)]
mod testing;

pub use controller::*;
pub use controller_component::*;
pub use gestures::*;
pub use resource::*;
pub use unlock::*;

#[cfg(target_arch = "wasm32")]
pub use web_backend::{DocumentGestures, HtmlAudioResource};
#[cfg(not(target_arch = "wasm32"))]
pub use native_bridge::WebviewAudioResource;

#[cfg(target_arch = "wasm32")]
pub type PlatformAudio = HtmlAudioResource;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformAudio = WebviewAudioResource;

/// The one controller instance of a page session.
pub type SiteController = PlaybackController<PlatformAudio>;
