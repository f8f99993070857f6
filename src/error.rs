//! Error types for catalog access and audio playback.
//!
//! None of these escape to display surfaces: the playback controller folds them
//! into session state and only the [`ErrorKind`] tag stays visible.

use serde::Serialize;
use thiserror::Error;

/// Failure while resolving the playlist from the remote catalog.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Transport-level failure (DNS, TLS, connection reset, ...)
    #[error("catalog request failed: {0}")]
    Network(String),

    /// The catalog answered with a non-success HTTP status
    #[error("catalog returned HTTP {0}")]
    Status(u16),

    /// Body was not a JSON array of track records
    #[error("catalog response is malformed: {0}")]
    Malformed(String),

    /// Response decoded, but no playable track was left
    #[error("catalog returned no playable tracks")]
    Empty,

    #[error("catalog request timed out after {0}s")]
    Timeout(u32),
}

/// Rejection of a start-playback attempt by the audio resource.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlayError {
    /// The platform refused to start audio without a prior user gesture.
    #[error("playback blocked by the platform: {0}")]
    Blocked(String),

    /// The media itself could not be played (unreachable or unsupported source).
    #[error("audio resource failed: {0}")]
    Resource(String),
}

/// Tag kept in the playback session for the last absorbed failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Catalog,
    AutoplayBlocked,
    PlaybackResource,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::Catalog => write!(f, "catalog"),
            ErrorKind::AutoplayBlocked => write!(f, "autoplay_blocked"),
            ErrorKind::PlaybackResource => write!(f, "playback_resource"),
        }
    }
}

impl From<&CatalogError> for ErrorKind {
    fn from(_: &CatalogError) -> Self {
        ErrorKind::Catalog
    }
}

impl From<&PlayError> for ErrorKind {
    fn from(err: &PlayError) -> Self {
        match err {
            PlayError::Blocked(_) => ErrorKind::AutoplayBlocked,
            PlayError::Resource(_) => ErrorKind::PlaybackResource,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_errors_map_to_session_tags() {
        assert_eq!(
            ErrorKind::from(&PlayError::Blocked("NotAllowedError".into())),
            ErrorKind::AutoplayBlocked
        );
        assert_eq!(
            ErrorKind::from(&PlayError::Resource("NotSupportedError".into())),
            ErrorKind::PlaybackResource
        );
        assert_eq!(ErrorKind::from(&CatalogError::Empty), ErrorKind::Catalog);
    }

    #[test]
    fn catalog_errors_render_readable_messages() {
        assert_eq!(CatalogError::Status(502).to_string(), "catalog returned HTTP 502");
        assert_eq!(
            CatalogError::Timeout(15).to_string(),
            "catalog request timed out after 15s"
        );
    }
}
