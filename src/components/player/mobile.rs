use super::controls::{NextButton, PlayPauseButton, PrevButton, TransportBar};
use crate::components::{Icon, PlayerState};
use dioxus::prelude::*;

/// Floating note button that expands into a mini player on narrow layouts.
#[component]
pub fn MobilePlayer() -> Element {
    let state = use_context::<PlayerState>().0;
    let mut expanded = use_signal(|| false);
    let snapshot = state();

    if snapshot.is_loading() {
        return rsx! {};
    }
    let Some(track) = snapshot.current_track.clone() else {
        return rsx! {};
    };

    let title = track.display_title().to_string();
    let author = track.display_author().to_string();
    let playing = snapshot.is_playing;

    rsx! {
        div { class: "mobile-player fixed bottom-5 right-4 z-40 md:hidden",
            if !expanded() {
                button {
                    r#type: "button",
                    id: "mobile-player-toggle",
                    class: "w-12 h-12 rounded-full bg-zinc-900/90 border border-zinc-700 shadow-xl flex items-center justify-center active:scale-90 transition-transform",
                    onclick: move |_| expanded.set(true),
                    span { class: if playing { "note-icon wiggle text-emerald-400" } else { "note-icon text-emerald-400" },
                        Icon { name: "music".to_string(), class: "w-6 h-6".to_string() }
                    }
                }
            } else {
                div { class: "flex items-center gap-3 rounded-full bg-zinc-900/95 border border-zinc-700 shadow-xl pl-2 pr-3 py-2 max-w-[90vw]",
                    button {
                        r#type: "button",
                        class: "w-10 h-10 rounded-full overflow-hidden flex-shrink-0 bg-zinc-800",
                        onclick: move |_| expanded.set(false),
                        if track.artwork_url.is_empty() {
                            Icon { name: "music".to_string(), class: "w-5 h-5 m-auto text-zinc-400".to_string() }
                        } else {
                            img {
                                src: "{track.artwork_url}",
                                alt: "{title}",
                                class: if playing { "player-cover rotating w-full h-full object-cover" } else { "player-cover w-full h-full object-cover" },
                            }
                        }
                    }
                    div {
                        class: "min-w-0 flex-1 cursor-pointer",
                        onclick: move |_| expanded.set(false),
                        p { class: "text-xs font-medium text-white truncate", "{title}" }
                        p { class: "text-[11px] text-zinc-400 truncate", "{author}" }
                    }
                    TransportBar { class: "flex items-center gap-1".to_string(),
                        PrevButton {}
                        PlayPauseButton { compact: true }
                        NextButton {}
                    }
                }
            }
        }
    }
}
