use crate::components::{Icon, PlayerCommands, PlayerState};
use dioxus::prelude::*;

/// Play/pause button - shared by the desktop widget and the mobile player
#[component]
pub(crate) fn PlayPauseButton(#[props(default)] compact: bool) -> Element {
    let commands = use_context::<PlayerCommands>();
    let state = use_context::<PlayerState>().0;
    let snapshot = state();
    let playing = snapshot.is_playing;
    let disabled = snapshot.current_track.is_none();
    let size = if compact { "w-9 h-9" } else { "w-10 h-10" };

    rsx! {
        button {
            id: if compact { "mobile-play-pause-btn" } else { "play-pause-btn" },
            r#type: "button",
            disabled,
            class: "{size} rounded-full bg-white flex items-center justify-center hover:scale-105 transition-transform shadow-lg disabled:opacity-40",
            onclick: move |_| commands.toggle_play(),
            if playing {
                Icon {
                    name: "pause".to_string(),
                    class: "w-5 h-5 text-black".to_string(),
                }
            } else {
                Icon {
                    name: "play".to_string(),
                    class: "w-5 h-5 text-black ml-0.5".to_string(),
                }
            }
        }
    }
}

/// Previous button
#[component]
pub(crate) fn PrevButton() -> Element {
    let commands = use_context::<PlayerCommands>();
    let state = use_context::<PlayerState>().0;
    let disabled = state().current_track.is_none();

    rsx! {
        button {
            r#type: "button",
            disabled,
            class: if disabled { "p-1.5 sm:p-2 text-zinc-600 cursor-not-allowed" } else { "p-1.5 sm:p-2 text-zinc-300 hover:text-white transition-colors" },
            onclick: move |_| commands.previous(),
            Icon { name: "prev".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

/// Next button
#[component]
pub(crate) fn NextButton() -> Element {
    let commands = use_context::<PlayerCommands>();
    let state = use_context::<PlayerState>().0;
    let disabled = state().current_track.is_none();

    rsx! {
        button {
            r#type: "button",
            disabled,
            class: if disabled { "p-1.5 sm:p-2 text-zinc-600 cursor-not-allowed" } else { "p-1.5 sm:p-2 text-zinc-300 hover:text-white transition-colors" },
            onclick: move |_| commands.next(),
            Icon { name: "next".to_string(), class: "w-5 h-5".to_string() }
        }
    }
}

/// Groups transport buttons. Presses inside never reach the autoplay unlock;
/// they are commands of their own.
#[component]
pub(crate) fn TransportBar(class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "{class}",
            "data-transport": "true",
            onpointerdown: move |evt| evt.stop_propagation(),
            ontouchstart: move |evt| evt.stop_propagation(),
            onkeydown: move |evt| evt.stop_propagation(),
            {children}
        }
    }
}
