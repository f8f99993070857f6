// Test doubles for the audio resource and playlist source.
use super::resource::AudioResource;
use crate::api::{Playlist, PlaylistSource, Track};
use crate::error::{CatalogError, PlayError};
use futures_util::future::{ready, LocalBoxFuture};
use futures_util::FutureExt;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use tokio::sync::oneshot;

enum Scripted {
    Accept,
    Block,
    Fail,
    Deferred(oneshot::Receiver<Result<(), PlayError>>),
}

/// Audio resource whose play attempts follow a queued script.
/// Attempts beyond the script are accepted.
#[derive(Default)]
pub struct ScriptedAudio {
    script: RefCell<VecDeque<Scripted>>,
    loaded: RefCell<Vec<String>>,
    pub plays: Cell<usize>,
    pub pauses: Cell<usize>,
    pub volume: Cell<f64>,
}

impl ScriptedAudio {
    pub fn block(&self) {
        self.script.borrow_mut().push_back(Scripted::Block);
    }

    pub fn fail(&self) {
        self.script.borrow_mut().push_back(Scripted::Fail);
    }

    /// Queues an attempt that stays pending until the returned sender fires.
    pub fn defer(&self) -> oneshot::Sender<Result<(), PlayError>> {
        let (tx, rx) = oneshot::channel();
        self.script.borrow_mut().push_back(Scripted::Deferred(rx));
        tx
    }

    pub fn loaded(&self) -> Vec<String> {
        self.loaded.borrow().clone()
    }
}

impl AudioResource for ScriptedAudio {
    fn load(&self, url: &str) {
        self.loaded.borrow_mut().push(url.to_string());
    }

    fn play(&self) -> LocalBoxFuture<'static, Result<(), PlayError>> {
        self.plays.set(self.plays.get() + 1);
        let next = self.script.borrow_mut().pop_front().unwrap_or(Scripted::Accept);
        match next {
            Scripted::Accept => ready(Ok(())).boxed_local(),
            Scripted::Block => {
                ready(Err(PlayError::Blocked("NotAllowedError".into()))).boxed_local()
            }
            Scripted::Fail => {
                ready(Err(PlayError::Resource("NotSupportedError".into()))).boxed_local()
            }
            Scripted::Deferred(rx) => async move {
                rx.await
                    .unwrap_or_else(|_| Err(PlayError::Blocked("AbortError".into())))
            }
            .boxed_local(),
        }
    }

    fn pause(&self) {
        self.pauses.set(self.pauses.get() + 1);
    }

    fn set_volume(&self, volume: f64) {
        self.volume.set(volume);
    }
}

/// Playlist source returning a canned result.
pub struct StaticSource(Result<Vec<Track>, CatalogError>);

impl StaticSource {
    pub fn ok(tracks: Vec<Track>) -> Self {
        Self(Ok(tracks))
    }

    pub fn err(err: CatalogError) -> Self {
        Self(Err(err))
    }
}

impl PlaylistSource for StaticSource {
    fn fetch_playlist(&self) -> LocalBoxFuture<'_, Result<Playlist, CatalogError>> {
        ready(self.0.clone().map(Playlist::new)).boxed_local()
    }
}

pub fn tracks(names: &[&str]) -> Vec<Track> {
    names
        .iter()
        .map(|name| {
            Track::new(*name, "Tester", format!("https://media.test/{name}.mp3"))
                .with_artwork(format!("https://img.test/{name}.jpg"))
        })
        .collect()
}
