// Audio resource seam: the one object that actually makes sound.
use crate::error::PlayError;
use futures_util::future::LocalBoxFuture;

/// Single playable resource owned exclusively by the playback controller.
///
/// `play` returns a future that settles once the platform accepted or rejected
/// the attempt; it must not borrow `self` so the controller can release its
/// own state while the attempt is pending.
pub trait AudioResource {
    fn load(&self, url: &str);
    fn play(&self) -> LocalBoxFuture<'static, Result<(), PlayError>>;
    fn pause(&self);
    fn set_volume(&self, volume: f64);
}

impl<R: AudioResource + ?Sized> AudioResource for std::rc::Rc<R> {
    fn load(&self, url: &str) {
        (**self).load(url)
    }

    fn play(&self) -> LocalBoxFuture<'static, Result<(), PlayError>> {
        (**self).play()
    }

    fn pause(&self) {
        (**self).pause()
    }

    fn set_volume(&self, volume: f64) {
        (**self).set_volume(volume)
    }
}
