use serde::{Deserialize, Serialize};

/// One playable item from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Track {
    #[serde(default, alias = "name")]
    pub title: String,
    #[serde(default, alias = "artist")]
    pub author: String,
    #[serde(default, rename = "pic", alias = "cover", alias = "artworkUrl")]
    pub artwork_url: String,
    #[serde(rename = "url", alias = "mediaUrl")]
    pub media_url: String,
    #[serde(default, rename = "lrc", alias = "lyricsUrl")]
    pub lyrics_url: Option<String>,
}

impl Track {
    pub fn new(title: impl Into<String>, author: impl Into<String>, media_url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            media_url: media_url.into(),
            ..Self::default()
        }
    }

    pub fn with_artwork(mut self, artwork_url: impl Into<String>) -> Self {
        self.artwork_url = artwork_url.into();
        self
    }

    /// Title for display, falling back when the catalog left it blank.
    pub fn display_title(&self) -> &str {
        let title = self.title.trim();
        if title.is_empty() {
            "Unknown Song"
        } else {
            title
        }
    }

    pub fn display_author(&self) -> &str {
        let author = self.author.trim();
        if author.is_empty() {
            "Unknown Artist"
        } else {
            author
        }
    }

    pub fn has_lyrics(&self) -> bool {
        self.lyrics_url
            .as_deref()
            .map(|url| !url.trim().is_empty())
            .unwrap_or(false)
    }
}

/// Ordered, session-immutable sequence of tracks. Insertion order is playback order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Index reached by moving `step` positions from `index`, wrapping both ways.
    pub fn wrap_index(&self, index: usize, step: isize) -> Option<usize> {
        if self.tracks.is_empty() {
            return None;
        }
        let len = self.tracks.len() as isize;
        Some((index as isize + step).rem_euclid(len) as usize)
    }
}

impl From<Vec<Track>> for Playlist {
    fn from(tracks: Vec<Track>) -> Self {
        Self::new(tracks)
    }
}
