use crate::api::models::{Playlist, Track};
use crate::error::CatalogError;
use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use once_cell::sync::Lazy;
use std::future::Future;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Resolves the session playlist. One attempt per call, no internal retry.
pub trait PlaylistSource {
    fn fetch_playlist(&self) -> LocalBoxFuture<'_, Result<Playlist, CatalogError>>;
}

/// Playlist source backed by a Meting-compatible JSON endpoint.
#[derive(Debug, Clone)]
pub struct MetingCatalog {
    pub url: String,
    pub timeout_secs: u32,
}

impl MetingCatalog {
    pub fn new(url: impl Into<String>, timeout_secs: u32) -> Self {
        Self {
            url: url.into(),
            timeout_secs,
        }
    }

    async fn request(&self) -> Result<Playlist, CatalogError> {
        let response = HTTP_CLIENT
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| CatalogError::Malformed(e.to_string()))?;

        parse_playlist(&body)
    }
}

impl PlaylistSource for MetingCatalog {
    fn fetch_playlist(&self) -> LocalBoxFuture<'_, Result<Playlist, CatalogError>> {
        async move {
            tracing::debug!(url = %self.url, "Fetching playlist");
            match with_timeout(self.timeout_secs, self.request()).await {
                Some(result) => result,
                None => Err(CatalogError::Timeout(self.timeout_secs)),
            }
        }
        .boxed_local()
    }
}

/// Decodes a catalog response body into a non-empty playlist.
pub fn parse_playlist(body: &serde_json::Value) -> Result<Playlist, CatalogError> {
    let Some(records) = body.as_array() else {
        return Err(CatalogError::Malformed(format!(
            "expected an array of tracks, got {}",
            json_kind(body)
        )));
    };

    let mut tracks = Vec::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        match serde_json::from_value::<Track>(record.clone()) {
            Ok(track) if !track.media_url.trim().is_empty() => tracks.push(track),
            Ok(_) => tracing::warn!(position, "Skipping catalog record without a media url"),
            Err(e) => tracing::warn!(position, error = %e, "Skipping undecodable catalog record"),
        }
    }

    if tracks.is_empty() {
        return Err(CatalogError::Empty);
    }
    Ok(Playlist::new(tracks))
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(not(target_arch = "wasm32"))]
async fn with_timeout<F: Future>(secs: u32, fut: F) -> Option<F::Output> {
    tokio::time::timeout(std::time::Duration::from_secs(u64::from(secs)), fut)
        .await
        .ok()
}

#[cfg(target_arch = "wasm32")]
async fn with_timeout<F: Future>(secs: u32, fut: F) -> Option<F::Output> {
    use futures_util::future::{select, Either};

    let deadline = gloo_timers::future::TimeoutFuture::new(secs.saturating_mul(1000));
    futures_util::pin_mut!(fut);
    match select(fut, deadline).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(_) => None,
    }
}
