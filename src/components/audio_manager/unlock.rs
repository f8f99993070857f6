// Autoplay unlock: retries a blocked start on the next qualifying user gesture.
use super::controller::{PlaybackController, PlaybackStatus, Subscription};
use super::gestures::{GestureListener, GestureSource};
use super::resource::AudioResource;
use futures_util::future::LocalBoxFuture;
use futures_util::FutureExt;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Runs a detached task on the current event loop.
pub type Spawner = Rc<dyn Fn(LocalBoxFuture<'static, ()>)>;

/// Watches the controller and, only while it is `Blocked`, listens for a user
/// gesture to retry playback. Each gesture triggers at most one retry and
/// gestures arriving while a retry is pending are ignored.
///
/// Dropping the strategy detaches its gesture listener and its subscription.
pub struct AutoplayUnlock<R: AudioResource + 'static> {
    inner: Rc<UnlockInner<R>>,
}

struct UnlockInner<R: AudioResource + 'static> {
    controller: PlaybackController<R>,
    gestures: Rc<dyn GestureSource>,
    spawn: Spawner,
    listener: RefCell<Option<GestureListener>>,
    retry_in_flight: Cell<bool>,
    subscription: RefCell<Option<Subscription>>,
}

impl<R: AudioResource + 'static> AutoplayUnlock<R> {
    pub fn install(
        controller: PlaybackController<R>,
        gestures: Rc<dyn GestureSource>,
        spawn: Spawner,
    ) -> Self {
        let inner = Rc::new(UnlockInner {
            controller,
            gestures,
            spawn,
            listener: RefCell::new(None),
            retry_in_flight: Cell::new(false),
            subscription: RefCell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        let subscription = inner.controller.subscribe(move |snapshot| {
            if let Some(inner) = weak.upgrade() {
                UnlockInner::sync(&inner, snapshot.status);
            }
        });
        *inner.subscription.borrow_mut() = Some(subscription);

        let status = inner.controller.status();
        UnlockInner::sync(&inner, status);
        Self { inner }
    }

    pub fn is_armed(&self) -> bool {
        self.inner.listener.borrow().is_some()
    }
}

impl<R: AudioResource + 'static> Drop for AutoplayUnlock<R> {
    fn drop(&mut self) {
        self.inner.disarm();
        let subscription = self.inner.subscription.borrow_mut().take();
        drop(subscription);
    }
}

impl<R: AudioResource + 'static> UnlockInner<R> {
    fn sync(this: &Rc<Self>, status: PlaybackStatus) {
        if status == PlaybackStatus::Blocked {
            Self::arm(this);
        } else {
            this.disarm();
        }
    }

    fn arm(this: &Rc<Self>) {
        if this.listener.borrow().is_some() {
            return;
        }
        let weak = Rc::downgrade(this);
        let listener = this.gestures.listen(Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                Self::on_gesture(&inner);
            }
        }));
        *this.listener.borrow_mut() = Some(listener);
        tracing::debug!("Autoplay unlock armed");
    }

    fn disarm(&self) {
        let listener = self.listener.borrow_mut().take();
        if listener.is_some() {
            tracing::debug!("Autoplay unlock disarmed");
        }
        drop(listener);
    }

    fn on_gesture(this: &Rc<Self>) {
        if this.retry_in_flight.get() {
            tracing::debug!("Gesture ignored, unlock retry already pending");
            return;
        }
        this.retry_in_flight.set(true);

        let inner = this.clone();
        (this.spawn)(
            async move {
                let unlocked = inner.controller.retry_blocked().await;
                inner.retry_in_flight.set(false);
                if unlocked {
                    tracing::info!("Playback unlocked by user gesture");
                } else {
                    tracing::debug!("Unlock retry did not start playback");
                }
            }
            .boxed_local(),
        );
    }
}
