use crate::components::{Icon, PlayerState};
use dioxus::prelude::*;

mod controls;
mod mobile;
mod visualizer;

use controls::{NextButton, PlayPauseButton, PrevButton, TransportBar};

pub use mobile::MobilePlayer;
pub use visualizer::NotesVisualizer;

/// Sidebar music widget for wide layouts.
#[component]
pub fn DesktopPlayerWidget() -> Element {
    let state = use_context::<PlayerState>().0;
    let snapshot = state();

    if snapshot.is_loading() {
        return rsx! {
            div { class: "player-widget flex items-center gap-3 rounded-xl bg-zinc-900/70 p-4 text-sm text-zinc-400",
                Icon { name: "loader".to_string(), class: "w-5 h-5".to_string() }
                "Loading music..."
            }
        };
    }

    let track = match snapshot.current_track.clone() {
        Some(track) if !snapshot.is_unavailable() => track,
        _ => return rsx! {
            div { class: "player-widget rounded-xl bg-zinc-900/70 p-4 text-sm text-zinc-500",
                "Music unavailable"
            }
        },
    };

    let title = track.display_title().to_string();
    let author = track.display_author().to_string();
    let position = snapshot
        .current_index
        .map(|index| format!("{} / {}", index + 1, snapshot.track_count))
        .unwrap_or_default();
    let cover_class = if snapshot.is_playing {
        "player-cover rotating"
    } else {
        "player-cover"
    };

    rsx! {
        div { class: "player-widget flex flex-col items-center gap-3 rounded-xl bg-zinc-900/70 p-4",
            div { class: "w-28 h-28 rounded-full overflow-hidden shadow-lg bg-zinc-800",
                if track.artwork_url.is_empty() {
                    div { class: "w-full h-full flex items-center justify-center bg-gradient-to-br from-emerald-600 to-teal-700",
                        Icon { name: "music".to_string(), class: "w-8 h-8 text-white/70".to_string() }
                    }
                } else {
                    img {
                        src: "{track.artwork_url}",
                        alt: "{title}",
                        class: "{cover_class} w-full h-full object-cover",
                        loading: "lazy",
                    }
                }
            }
            div { class: "min-w-0 w-full text-center",
                p { class: "text-sm font-medium text-white truncate", "{title}" }
                p { class: "text-xs text-zinc-400 truncate", "{author}" }
                div { class: "mt-1 flex items-center justify-center gap-2 text-[10px] uppercase tracking-wide text-zinc-500",
                    span { "{position}" }
                    if track.has_lyrics() {
                        span { class: "rounded border border-zinc-600 px-1", "LRC" }
                    }
                }
            }
            TransportBar { class: "flex items-center gap-4".to_string(),
                PrevButton {}
                PlayPauseButton {}
                NextButton {}
            }
        }
    }
}
