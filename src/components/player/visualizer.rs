use crate::components::PlayerState;
use dioxus::prelude::*;

const NOTE_COUNT: usize = 9;
const NOTE_COLORS: [&str; 7] = [
    "#ffeb3b", "#e91e63", "#9c27b0", "#2196f3", "#4caf50", "#ff9800", "#00bcd4",
];

#[derive(Clone, Debug, PartialEq)]
struct FloatingNote {
    left_vw: u32,
    size_px: u32,
    color: &'static str,
    duration_s: f32,
    delay_s: f32,
}

// Spread notes across the viewport without a random source.
fn note_layout(count: usize) -> Vec<FloatingNote> {
    (0..count)
        .map(|i| FloatingNote {
            left_vw: ((i * 37 + 11) % 100) as u32,
            size_px: 20 + ((i * 7) % 21) as u32,
            color: NOTE_COLORS[i % NOTE_COLORS.len()],
            duration_s: 3.0 + (i % 4) as f32 * 0.75,
            delay_s: i as f32 * 0.8,
        })
        .collect()
}

/// Background notes that drift upward while a track is audible.
#[component]
pub fn NotesVisualizer() -> Element {
    let state = use_context::<PlayerState>().0;
    let playing = state().is_playing;

    if !playing {
        return rsx! {};
    }

    rsx! {
        div {
            class: "notes-layer pointer-events-none fixed inset-0 overflow-hidden z-0",
            "aria-hidden": "true",
            for (i, note) in note_layout(NOTE_COUNT).into_iter().enumerate() {
                div {
                    key: "{i}",
                    class: "floating-note",
                    style: "left: {note.left_vw}vw; color: {note.color}; animation-duration: {note.duration_s}s; animation-delay: {note.delay_s}s;",
                    svg {
                        width: "{note.size_px}",
                        height: "{note.size_px}",
                        view_box: "0 0 24 24",
                        fill: "currentColor",
                        path { d: "M21 3l-10 2v10.55c-.59-.34-1.27-.55-2-.55-2.21 0-4 1.79-4 4s1.79 4 4 4 4-1.79 4-4v-10.55l8-1.6v7.15c-.59-.34-1.27-.55-2-.55-2.21 0-4 1.79-4 4s1.79 4 4 4 4-1.79 4-4v-12z" }
                    }
                }
            }
        }
    }
}
