use crate::components::{
    AudioController, DesktopPlayerWidget, MobilePlayer, NotesVisualizer, PlatformAudio,
    PlayerCommands, PlayerSnapshot, PlayerState, SiteController,
};
use crate::config::PlayerConfig;
use dioxus::prelude::*;

#[cfg(not(target_arch = "wasm32"))]
use crate::components::RelayGestures;

#[cfg(not(target_arch = "wasm32"))]
fn relay_gesture() {
    if let Some(gestures) = try_consume_context::<RelayGestures>() {
        gestures.relay();
    }
}

#[cfg(target_arch = "wasm32")]
fn relay_gesture() {}

#[component]
pub fn AppShell(config: PlayerConfig) -> Element {
    let controller = use_context_provider(|| {
        SiteController::new(PlatformAudio::default(), config.autoplay, config.volume)
    });
    use_context_provider(|| config.clone());
    let snapshot = use_signal(PlayerSnapshot::default);
    use_context_provider(|| PlayerState(snapshot));
    use_context_provider(|| PlayerCommands::new(controller.clone()));

    // On the desktop webview gestures arrive as root events and are relayed
    // to the autoplay unlock; the browser listens on `document` directly.
    #[cfg(not(target_arch = "wasm32"))]
    use_context_provider(RelayGestures::default);

    rsx! {
        div {
            class: "app-shell relative min-h-screen bg-zinc-950 text-white",
            onpointerdown: move |_| relay_gesture(),
            ontouchstart: move |_| relay_gesture(),
            onkeydown: move |_| relay_gesture(),

            AudioController {}
            NotesVisualizer {}

            aside { class: "hidden md:block fixed left-4 bottom-4 w-64 z-30",
                DesktopPlayerWidget {}
            }
            MobilePlayer {}
        }
    }
}
