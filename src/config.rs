//! Player configuration: catalog endpoint, autoplay policy, volume and log level.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(target_arch = "wasm32")]
const CONFIG_KEY: &str = "sitetune.player_config";

const DEFAULT_MEDIA_SERVER: &str = "tencent";
const DEFAULT_PLAYLIST_ID: &str = "8836263546";
const METING_API: &str = "https://api.i-meto.com/meting/api";

/// Meting playlist endpoint for a given media server and playlist id.
pub fn meting_playlist_url(server: &str, playlist_id: &str) -> String {
    format!("{METING_API}?server={server}&type=playlist&id={playlist_id}")
}

fn default_catalog_url() -> String {
    meting_playlist_url(DEFAULT_MEDIA_SERVER, DEFAULT_PLAYLIST_ID)
}

fn default_fetch_timeout_secs() -> u32 {
    15
}

fn default_autoplay() -> bool {
    true
}

fn default_volume() -> f64 {
    0.8
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u32,
    /// Attempt playback as soon as the playlist loads.
    #[serde(default = "default_autoplay")]
    pub autoplay: bool,
    #[serde(default = "default_volume")]
    pub volume: f64,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            autoplay: default_autoplay(),
            volume: default_volume(),
            log_level: default_log_level(),
        }
    }
}

/// Accepts 0..1 as-is and rescales percent-style values (80 -> 0.8).
pub fn normalize_volume(mut value: f64) -> f64 {
    if !value.is_finite() {
        return default_volume();
    }
    let mut passes = 0;
    while value > 1.0 && passes < 4 {
        value /= 100.0;
        passes += 1;
    }
    value.clamp(0.0, 1.0)
}

impl PlayerConfig {
    /// Defaults merged with the platform's override source.
    pub fn load() -> Self {
        let mut config = Self::load_overrides();
        config.normalize();
        config
    }

    #[cfg(target_arch = "wasm32")]
    fn load_overrides() -> Self {
        LocalStorage::get::<PlayerConfig>(CONFIG_KEY).unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn load_overrides() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies `SITETUNE_*` overrides read through `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("SITETUNE_CATALOG_URL").filter(|v| !v.trim().is_empty()) {
            self.catalog_url = url.trim().to_string();
        }
        if let Some(flag) = lookup("SITETUNE_AUTOPLAY") {
            match flag.trim().to_ascii_lowercase().as_str() {
                "0" | "false" | "off" | "no" => self.autoplay = false,
                "1" | "true" | "on" | "yes" => self.autoplay = true,
                _ => {}
            }
        }
        if let Some(secs) = lookup("SITETUNE_FETCH_TIMEOUT").and_then(|v| v.trim().parse().ok()) {
            self.fetch_timeout_secs = secs;
        }
        if let Some(level) = lookup("SITETUNE_LOG").filter(|v| !v.trim().is_empty()) {
            self.log_level = level.trim().to_string();
        }
        self
    }

    fn normalize(&mut self) {
        self.volume = normalize_volume(self.volume);
        if self.fetch_timeout_secs == 0 {
            self.fetch_timeout_secs = default_fetch_timeout_secs();
        }
    }

    pub fn tracing_level(&self) -> tracing::Level {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "trace" => tracing::Level::TRACE,
            "debug" => tracing::Level::DEBUG,
            "warn" => tracing::Level::WARN,
            "error" => tracing::Level::ERROR,
            _ => tracing::Level::INFO,
        }
    }
}
