// Playback controller: single authority over the audio resource and session state.
use super::resource::AudioResource;
use crate::api::{Playlist, PlaylistSource, Track};
use crate::error::{ErrorKind, PlayError};
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Session status as seen by every display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Playing,
    Paused,
    Blocked,
    Error,
}

impl std::fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaybackStatus::Idle => write!(f, "idle"),
            PlaybackStatus::Loading => write!(f, "loading"),
            PlaybackStatus::Ready => write!(f, "ready"),
            PlaybackStatus::Playing => write!(f, "playing"),
            PlaybackStatus::Paused => write!(f, "paused"),
            PlaybackStatus::Blocked => write!(f, "blocked"),
            PlaybackStatus::Error => write!(f, "error"),
        }
    }
}

impl PlaybackStatus {
    /// States in which a playlist is loaded and the cursor is valid.
    pub fn has_playlist(self) -> bool {
        matches!(
            self,
            PlaybackStatus::Ready
                | PlaybackStatus::Playing
                | PlaybackStatus::Paused
                | PlaybackStatus::Blocked
        )
    }
}

/// Read-only view of the session handed to subscribers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlayerSnapshot {
    pub status: PlaybackStatus,
    pub current_track: Option<Track>,
    pub current_index: Option<usize>,
    pub track_count: usize,
    pub last_error: Option<ErrorKind>,
    pub is_playing: bool,
}

impl PlayerSnapshot {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, PlaybackStatus::Idle | PlaybackStatus::Loading)
    }

    /// Catalog failed; surfaces show an "unavailable" state.
    pub fn is_unavailable(&self) -> bool {
        self.status == PlaybackStatus::Error
    }
}

#[derive(Debug, Default)]
struct PlaybackSession {
    status: PlaybackStatus,
    current_index: Option<usize>,
    last_error: Option<ErrorKind>,
    // Bumped by every start attempt and pause; attempt results carry the value they started with.
    generation: u64,
    // Generation of the attempt still awaiting its outcome, if any.
    pending_attempt: Option<u64>,
    resource_failures: usize,
}

type Subscriber = Rc<dyn Fn(&PlayerSnapshot)>;

#[derive(Default)]
struct Subscribers {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(u64, Subscriber)>>,
}

/// Keeps a snapshot subscriber registered until dropped.
pub struct Subscription {
    id: u64,
    registry: Weak<Subscribers>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.entries.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

struct Shared<R> {
    resource: R,
    session: RefCell<PlaybackSession>,
    playlist: RefCell<Playlist>,
    subscribers: Rc<Subscribers>,
    autoplay: bool,
    volume: f64,
}

enum Settled {
    Done,
    SkipTrack,
}

/// Owns the audio resource, the playlist and the playback state machine.
///
/// Cloning yields another handle to the same session. All mutation goes
/// through the transport commands and the resource callbacks
/// ([`on_track_ended`](Self::on_track_ended),
/// [`on_resource_error`](Self::on_resource_error)); consumers observe state
/// through [`subscribe`](Self::subscribe) and [`snapshot`](Self::snapshot).
pub struct PlaybackController<R: AudioResource> {
    shared: Rc<Shared<R>>,
}

impl<R: AudioResource> Clone for PlaybackController<R> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<R: AudioResource> PartialEq for PlaybackController<R> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared)
    }
}

impl<R: AudioResource> PlaybackController<R> {
    pub fn new(resource: R, autoplay: bool, volume: f64) -> Self {
        Self {
            shared: Rc::new(Shared {
                resource,
                session: RefCell::new(PlaybackSession::default()),
                playlist: RefCell::new(Playlist::default()),
                subscribers: Rc::new(Subscribers::default()),
                autoplay,
                volume,
            }),
        }
    }

    pub fn status(&self) -> PlaybackStatus {
        self.shared.session.borrow().status
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        let session = self.shared.session.borrow();
        let playlist = self.shared.playlist.borrow();
        PlayerSnapshot {
            status: session.status,
            current_track: session
                .current_index
                .and_then(|index| playlist.get(index))
                .cloned(),
            current_index: session.current_index,
            track_count: playlist.len(),
            last_error: session.last_error,
            is_playing: session.status == PlaybackStatus::Playing,
        }
    }

    pub fn subscribe<F>(&self, subscriber: F) -> Subscription
    where
        F: Fn(&PlayerSnapshot) + 'static,
    {
        let registry = &self.shared.subscribers;
        let id = registry.next_id.get();
        registry.next_id.set(id + 1);
        registry
            .entries
            .borrow_mut()
            .push((id, Rc::new(subscriber)));
        Subscription {
            id,
            registry: Rc::downgrade(registry),
        }
    }

    fn publish(&self) {
        let snapshot = self.snapshot();
        let subscribers: Vec<Subscriber> = self
            .shared
            .subscribers
            .entries
            .borrow()
            .iter()
            .map(|(_, subscriber)| subscriber.clone())
            .collect();
        for subscriber in subscribers {
            subscriber(&snapshot);
        }
    }

    /// Fetches the playlist and, when autoplay is enabled, starts the first track.
    pub async fn initialize<S>(&self, source: &S)
    where
        S: PlaylistSource + ?Sized,
    {
        {
            let mut session = self.shared.session.borrow_mut();
            if !matches!(session.status, PlaybackStatus::Idle | PlaybackStatus::Error) {
                tracing::warn!(status = %session.status, "Ignoring initialize on a live session");
                return;
            }
            session.status = PlaybackStatus::Loading;
            session.current_index = None;
            session.last_error = None;
            session.generation += 1;
        }
        self.publish();

        let playlist = match source.fetch_playlist().await {
            Ok(playlist) if !playlist.is_empty() => playlist,
            Ok(_) => {
                tracing::warn!("Catalog resolved with an empty playlist");
                self.mark_unavailable(ErrorKind::Catalog);
                return;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Playlist fetch failed");
                self.mark_unavailable(ErrorKind::from(&err));
                return;
            }
        };

        tracing::info!(tracks = playlist.len(), "Playlist loaded");
        if let Some(first) = playlist.get(0) {
            self.shared.resource.set_volume(self.shared.volume);
            self.shared.resource.load(&first.media_url);
        }
        *self.shared.playlist.borrow_mut() = playlist;
        {
            let mut session = self.shared.session.borrow_mut();
            session.status = PlaybackStatus::Ready;
            session.current_index = Some(0);
            session.resource_failures = 0;
        }
        self.publish();

        if self.shared.autoplay {
            self.start_playback().await;
        }
    }

    fn mark_unavailable(&self, kind: ErrorKind) {
        *self.shared.playlist.borrow_mut() = Playlist::default();
        {
            let mut session = self.shared.session.borrow_mut();
            session.status = PlaybackStatus::Error;
            session.current_index = None;
            session.last_error = Some(kind);
        }
        self.publish();
    }

    pub async fn toggle_play(&self) {
        let status = self.status();
        match status {
            PlaybackStatus::Playing => self.pause_now(),
            PlaybackStatus::Ready | PlaybackStatus::Paused | PlaybackStatus::Blocked => {
                self.reset_failures();
                self.start_playback().await;
            }
            PlaybackStatus::Idle | PlaybackStatus::Loading | PlaybackStatus::Error => {
                tracing::debug!(%status, "Toggle ignored without a playlist");
            }
        }
    }

    pub async fn next(&self) {
        self.skip(1).await;
    }

    pub async fn previous(&self) {
        self.skip(-1).await;
    }

    /// Natural end of the current track; continues with the next one.
    pub async fn on_track_ended(&self) {
        self.skip(1).await;
    }

    /// Mid-playback failure of the resource. Skips ahead like a finished track
    /// until every track in the playlist has failed in a row.
    pub async fn on_resource_error(&self, message: &str) {
        let settled = {
            let mut session = self.shared.session.borrow_mut();
            if session.status != PlaybackStatus::Playing {
                tracing::debug!(status = %session.status, reason = message, "Ignoring resource error outside playback");
                return;
            }
            self.record_resource_failure(&mut session, message)
        };
        match settled {
            Settled::SkipTrack => {
                if self.advance(1) {
                    self.start_playback().await;
                }
            }
            Settled::Done => self.publish(),
        }
    }

    /// Start path used by gesture unlock. Returns whether playback is now running.
    pub async fn retry_blocked(&self) -> bool {
        if self.status() != PlaybackStatus::Blocked {
            return false;
        }
        self.start_playback().await;
        self.status() == PlaybackStatus::Playing
    }

    async fn skip(&self, step: isize) {
        if !self.advance(step) {
            return;
        }
        self.reset_failures();
        self.start_playback().await;
    }

    /// Moves the cursor and loads the new track. False when no playlist is loaded.
    fn advance(&self, step: isize) -> bool {
        let url = {
            let playlist = self.shared.playlist.borrow();
            let mut session = self.shared.session.borrow_mut();
            if !session.status.has_playlist() {
                return false;
            }
            let Some(next) = session
                .current_index
                .and_then(|current| playlist.wrap_index(current, step))
            else {
                return false;
            };
            session.current_index = Some(next);
            tracing::debug!(index = next, "Track cursor moved");
            playlist.get(next).map(|track| track.media_url.clone())
        };
        let Some(url) = url else {
            return false;
        };
        self.shared.resource.load(&url);
        self.publish();
        true
    }

    fn pause_now(&self) {
        self.shared.resource.pause();
        {
            let mut session = self.shared.session.borrow_mut();
            session.generation += 1;
            session.status = PlaybackStatus::Paused;
            session.last_error = None;
        }
        tracing::debug!("Playback paused");
        self.publish();
    }

    fn reset_failures(&self) {
        self.shared.session.borrow_mut().resource_failures = 0;
    }

    async fn start_playback(&self) {
        loop {
            let generation = {
                let mut session = self.shared.session.borrow_mut();
                session.generation += 1;
                session.pending_attempt = Some(session.generation);
                session.generation
            };
            let outcome = self.shared.resource.play().await;
            match self.settle(generation, outcome) {
                Settled::Done => return,
                Settled::SkipTrack => {
                    if !self.advance(1) {
                        return;
                    }
                }
            }
        }
    }

    fn settle(&self, generation: u64, outcome: Result<(), PlayError>) -> Settled {
        let mut session = self.shared.session.borrow_mut();
        if session.generation != generation {
            // A late success must not leave the element sounding, unless a
            // newer attempt is about to settle the real state.
            let repause = outcome.is_ok()
                && session.status != PlaybackStatus::Playing
                && session.pending_attempt != Some(session.generation);
            tracing::debug!(
                generation,
                current = session.generation,
                "Discarding superseded playback attempt"
            );
            drop(session);
            if repause {
                self.shared.resource.pause();
            }
            return Settled::Done;
        }

        session.pending_attempt = None;
        let settled = match outcome {
            Ok(()) => {
                session.status = PlaybackStatus::Playing;
                session.last_error = None;
                session.resource_failures = 0;
                Settled::Done
            }
            Err(err @ PlayError::Blocked(_)) => {
                tracing::debug!(error = %err, "Playback blocked until the next user gesture");
                session.status = PlaybackStatus::Blocked;
                session.last_error = Some(ErrorKind::from(&err));
                Settled::Done
            }
            Err(PlayError::Resource(reason)) => self.record_resource_failure(&mut session, &reason),
        };
        drop(session);
        self.publish();
        settled
    }

    fn record_resource_failure(&self, session: &mut PlaybackSession, reason: &str) -> Settled {
        session.resource_failures += 1;
        let track_count = self.shared.playlist.borrow().len();
        if session.resource_failures < track_count {
            tracing::warn!(
                kind = %ErrorKind::PlaybackResource,
                reason,
                index = ?session.current_index,
                "Track failed to play, skipping"
            );
            return Settled::SkipTrack;
        }

        tracing::warn!(
            failures = session.resource_failures,
            "Every track failed in a row, parking playback"
        );
        self.shared.resource.pause();
        session.generation += 1;
        session.status = PlaybackStatus::Paused;
        session.last_error = Some(ErrorKind::PlaybackResource);
        session.resource_failures = 0;
        Settled::Done
    }
}

#[cfg(test)]
mod tests {
    use super::super::testing::{tracks, ScriptedAudio, StaticSource};
    use super::*;
    use crate::error::CatalogError;
    use tokio::task::{spawn_local, yield_now, LocalSet};

    type TestController = PlaybackController<Rc<ScriptedAudio>>;

    fn controller(autoplay: bool) -> (TestController, Rc<ScriptedAudio>) {
        let audio = Rc::new(ScriptedAudio::default());
        (PlaybackController::new(audio.clone(), autoplay, 0.5), audio)
    }

    async fn loaded(names: &[&str]) -> (TestController, Rc<ScriptedAudio>) {
        let (controller, audio) = controller(false);
        controller
            .initialize(&StaticSource::ok(tracks(names)))
            .await;
        assert_eq!(controller.status(), PlaybackStatus::Ready);
        (controller, audio)
    }

    #[tokio::test]
    async fn initialize_loads_first_track_and_autoplays() {
        let (controller, audio) = controller(true);
        controller
            .initialize(&StaticSource::ok(tracks(&["A", "B"])))
            .await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.status, PlaybackStatus::Playing);
        assert!(snapshot.is_playing);
        assert_eq!(snapshot.current_index, Some(0));
        assert_eq!(snapshot.current_track.unwrap().title, "A");
        assert_eq!(snapshot.track_count, 2);
        assert_eq!(audio.loaded(), vec!["https://media.test/A.mp3"]);
        assert_eq!(audio.volume.get(), 0.5);
    }

    #[tokio::test]
    async fn autoplay_rejection_falls_back_to_blocked() {
        let (controller, audio) = controller(true);
        audio.block();
        controller
            .initialize(&StaticSource::ok(tracks(&["A"])))
            .await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.status, PlaybackStatus::Blocked);
        assert_eq!(snapshot.last_error, Some(ErrorKind::AutoplayBlocked));
        assert!(!snapshot.is_playing);
    }

    #[tokio::test]
    async fn fetch_failure_is_unavailable() {
        let (controller, audio) = controller(true);
        controller
            .initialize(&StaticSource::err(CatalogError::Network("offline".into())))
            .await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.status, PlaybackStatus::Error);
        assert_eq!(snapshot.last_error, Some(ErrorKind::Catalog));
        assert_eq!(snapshot.current_track, None);
        assert!(!snapshot.is_playing);
        assert!(snapshot.is_unavailable());
        assert_eq!(audio.plays.get(), 0);
    }

    #[tokio::test]
    async fn empty_playlist_never_becomes_ready() {
        let (controller, _audio) = controller(true);
        controller.initialize(&StaticSource::ok(Vec::new())).await;
        assert_eq!(controller.status(), PlaybackStatus::Error);
        assert_eq!(controller.snapshot().last_error, Some(ErrorKind::Catalog));
    }

    #[tokio::test]
    async fn reinitialize_is_only_accepted_after_error() {
        let (controller, _audio) = controller(false);
        controller
            .initialize(&StaticSource::err(CatalogError::Empty))
            .await;
        controller
            .initialize(&StaticSource::ok(tracks(&["A"])))
            .await;
        assert_eq!(controller.status(), PlaybackStatus::Ready);

        controller
            .initialize(&StaticSource::err(CatalogError::Empty))
            .await;
        assert_eq!(controller.status(), PlaybackStatus::Ready);
    }

    #[tokio::test]
    async fn commands_without_playlist_are_ignored() {
        let (controller, audio) = controller(false);
        controller.toggle_play().await;
        controller.next().await;
        controller.previous().await;
        controller.on_track_ended().await;
        assert_eq!(controller.status(), PlaybackStatus::Idle);
        assert_eq!(controller.snapshot().current_index, None);
        assert_eq!(audio.plays.get(), 0);
    }

    #[tokio::test]
    async fn toggle_alternates_between_playing_and_paused() {
        let (controller, audio) = loaded(&["A", "B"]).await;

        controller.toggle_play().await;
        assert_eq!(controller.status(), PlaybackStatus::Playing);
        controller.toggle_play().await;
        assert_eq!(controller.status(), PlaybackStatus::Paused);
        assert_eq!(audio.pauses.get(), 1);
        controller.toggle_play().await;
        assert_eq!(controller.status(), PlaybackStatus::Playing);
    }

    #[tokio::test]
    async fn toggle_from_blocked_retries_and_can_stay_blocked() {
        let (controller, audio) = loaded(&["A"]).await;
        audio.block();
        audio.block();

        controller.toggle_play().await;
        assert_eq!(controller.status(), PlaybackStatus::Blocked);
        controller.toggle_play().await;
        assert_eq!(controller.status(), PlaybackStatus::Blocked);
        controller.toggle_play().await;
        assert_eq!(controller.status(), PlaybackStatus::Playing);
        assert_eq!(controller.snapshot().last_error, None);
    }

    #[tokio::test]
    async fn next_cycles_back_to_start() {
        let (controller, _audio) = loaded(&["A", "B", "C", "D"]).await;
        for _ in 0..4 {
            controller.next().await;
        }
        assert_eq!(controller.snapshot().current_index, Some(0));
        assert_eq!(controller.status(), PlaybackStatus::Playing);
    }

    #[tokio::test]
    async fn previous_wraps_to_last_track() {
        let (controller, audio) = loaded(&["A", "B", "C"]).await;
        controller.previous().await;
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.current_index, Some(2));
        assert_eq!(snapshot.current_track.unwrap().title, "C");
        assert_eq!(audio.loaded().last().unwrap(), "https://media.test/C.mp3");
    }

    #[tokio::test]
    async fn track_end_on_last_index_wraps_to_first() {
        let (controller, _audio) = loaded(&["A", "B", "C"]).await;
        controller.previous().await;
        assert_eq!(controller.snapshot().current_index, Some(2));

        controller.on_track_ended().await;
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.current_index, Some(0));
        assert_eq!(snapshot.current_track.unwrap().title, "A");
        assert_eq!(snapshot.status, PlaybackStatus::Playing);
    }

    #[tokio::test]
    async fn subscribers_see_every_transition_until_dropped() {
        let (controller, _audio) = controller(true);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let subscription = {
            let seen = seen.clone();
            controller.subscribe(move |snapshot| seen.borrow_mut().push(snapshot.status))
        };

        controller
            .initialize(&StaticSource::ok(tracks(&["A"])))
            .await;
        assert_eq!(
            *seen.borrow(),
            vec![
                PlaybackStatus::Loading,
                PlaybackStatus::Ready,
                PlaybackStatus::Playing
            ]
        );

        drop(subscription);
        controller.toggle_play().await;
        assert_eq!(seen.borrow().len(), 3);
    }

    #[tokio::test]
    async fn stale_attempt_does_not_overwrite_newer_track() {
        LocalSet::new()
            .run_until(async {
                let (controller, audio) = loaded(&["A", "B", "C"]).await;
                let slow = audio.defer();

                let first = {
                    let controller = controller.clone();
                    spawn_local(async move { controller.next().await })
                };
                yield_now().await;
                assert_eq!(controller.snapshot().current_index, Some(1));

                audio.block();
                controller.next().await;
                assert_eq!(controller.status(), PlaybackStatus::Blocked);

                slow.send(Ok(())).unwrap();
                first.await.unwrap();

                let snapshot = controller.snapshot();
                assert_eq!(snapshot.current_index, Some(2));
                assert_eq!(snapshot.status, PlaybackStatus::Blocked);
                assert_eq!(audio.pauses.get(), 1);
            })
            .await;
    }

    #[tokio::test]
    async fn stale_success_leaves_newer_pending_attempt_alone() {
        LocalSet::new()
            .run_until(async {
                let (controller, audio) = loaded(&["A", "B", "C"]).await;
                let first_attempt = audio.defer();
                let second_attempt = audio.defer();

                let first = {
                    let controller = controller.clone();
                    spawn_local(async move { controller.next().await })
                };
                yield_now().await;
                let second = {
                    let controller = controller.clone();
                    spawn_local(async move { controller.next().await })
                };
                yield_now().await;

                first_attempt.send(Ok(())).unwrap();
                first.await.unwrap();
                assert_eq!(audio.pauses.get(), 0);
                assert_eq!(controller.status(), PlaybackStatus::Ready);

                second_attempt.send(Ok(())).unwrap();
                second.await.unwrap();
                let snapshot = controller.snapshot();
                assert_eq!(snapshot.status, PlaybackStatus::Playing);
                assert_eq!(snapshot.current_index, Some(2));
                assert_eq!(audio.pauses.get(), 0);
            })
            .await;
    }

    #[tokio::test]
    async fn pause_while_attempt_pending_keeps_resource_paused() {
        LocalSet::new()
            .run_until(async {
                let (controller, audio) = loaded(&["A", "B"]).await;
                controller.toggle_play().await;
                let slow = audio.defer();

                let pending = {
                    let controller = controller.clone();
                    spawn_local(async move { controller.next().await })
                };
                yield_now().await;

                controller.toggle_play().await;
                assert_eq!(controller.status(), PlaybackStatus::Paused);
                let pauses = audio.pauses.get();

                slow.send(Ok(())).unwrap();
                pending.await.unwrap();

                assert_eq!(controller.status(), PlaybackStatus::Paused);
                assert_eq!(audio.pauses.get(), pauses + 1);
            })
            .await;
    }

    #[tokio::test]
    async fn unplayable_track_is_skipped() {
        let (controller, audio) = loaded(&["A", "B", "C"]).await;
        audio.fail();

        controller.toggle_play().await;
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.current_index, Some(1));
        assert_eq!(snapshot.status, PlaybackStatus::Playing);
    }

    #[tokio::test]
    async fn resource_error_mid_playback_advances() {
        let (controller, _audio) = loaded(&["A", "B"]).await;
        controller.toggle_play().await;

        controller.on_resource_error("network error").await;
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.current_index, Some(1));
        assert_eq!(snapshot.status, PlaybackStatus::Playing);
    }

    #[tokio::test]
    async fn resource_error_while_paused_is_ignored() {
        let (controller, _audio) = loaded(&["A", "B"]).await;
        controller.on_resource_error("decode error").await;
        assert_eq!(controller.snapshot().current_index, Some(0));
        assert_eq!(controller.status(), PlaybackStatus::Ready);
    }

    #[tokio::test]
    async fn fully_broken_playlist_parks_instead_of_looping() {
        let (controller, audio) = loaded(&["A", "B", "C"]).await;
        for _ in 0..3 {
            audio.fail();
        }

        controller.toggle_play().await;
        assert_eq!(controller.status(), PlaybackStatus::Paused);
        assert_eq!(audio.plays.get(), 3);
        assert_eq!(
            controller.snapshot().last_error,
            Some(ErrorKind::PlaybackResource)
        );

        controller.toggle_play().await;
        assert_eq!(controller.status(), PlaybackStatus::Playing);
        assert_eq!(controller.snapshot().last_error, None);
    }

    #[tokio::test]
    async fn retry_blocked_only_acts_when_blocked() {
        let (controller, audio) = loaded(&["A"]).await;
        assert!(!controller.retry_blocked().await);
        assert_eq!(audio.plays.get(), 0);

        audio.block();
        controller.toggle_play().await;
        assert!(controller.retry_blocked().await);
        assert_eq!(controller.status(), PlaybackStatus::Playing);
    }
}
