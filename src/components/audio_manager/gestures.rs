// Qualifying user gestures (pointer press, touch start, key press) used to unlock audio.
use std::cell::RefCell;
use std::rc::Rc;

pub type GestureHandler = Rc<dyn Fn()>;

/// Marker attribute carried by transport buttons (play/pause, prev, next).
pub const TRANSPORT_CONTROL_ATTR: &str = "data-transport";

/// Where a user interaction landed.
///
/// Presses on transport controls already reach the controller as commands,
/// so they never count as unlock gestures: a retry started on `pointerdown`
/// would otherwise be undone by the button's own `click`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOrigin {
    Page,
    TransportControl,
}

impl GestureOrigin {
    pub fn unlocks_audio(self) -> bool {
        self == GestureOrigin::Page
    }
}

/// Source of qualifying user gestures.
///
/// Listening is scoped: the returned [`GestureListener`] detaches the handler
/// when dropped, so nothing stays registered past the caller's interest.
pub trait GestureSource {
    fn listen(&self, handler: GestureHandler) -> GestureListener;
}

/// Registration returned by [`GestureSource::listen`].
pub struct GestureListener {
    detach: Option<Box<dyn FnOnce()>>,
}

impl GestureListener {
    pub fn new(detach: impl FnOnce() + 'static) -> Self {
        Self {
            detach: Some(Box::new(detach)),
        }
    }
}

impl Drop for GestureListener {
    fn drop(&mut self) {
        if let Some(detach) = self.detach.take() {
            detach();
        }
    }
}

/// Gesture source fed by whoever owns the input events.
///
/// The desktop shell forwards root-element pointer, touch and key events
/// through [`relay`](Self::relay); tests call it directly.
#[derive(Clone, Default)]
pub struct RelayGestures {
    slot: Rc<RefCell<Option<GestureHandler>>>,
}

impl PartialEq for RelayGestures {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl RelayGestures {
    /// Delivers one page gesture. No-op while nobody listens.
    pub fn relay(&self) {
        self.relay_from(GestureOrigin::Page);
    }

    pub fn relay_from(&self, origin: GestureOrigin) {
        if !origin.unlocks_audio() {
            return;
        }
        let handler = self.slot.borrow().clone();
        if let Some(handler) = handler {
            handler();
        }
    }

    pub fn is_listening(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

impl GestureSource for RelayGestures {
    fn listen(&self, handler: GestureHandler) -> GestureListener {
        *self.slot.borrow_mut() = Some(handler);
        let slot = Rc::downgrade(&self.slot);
        GestureListener::new(move || {
            if let Some(slot) = slot.upgrade() {
                slot.borrow_mut().take();
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn relay_reaches_handler_only_while_listening() {
        let gestures = RelayGestures::default();
        let hits = Rc::new(Cell::new(0));

        gestures.relay();
        let listener = {
            let hits = hits.clone();
            gestures.listen(Rc::new(move || hits.set(hits.get() + 1)))
        };
        assert!(gestures.is_listening());
        gestures.relay();
        gestures.relay();
        drop(listener);
        gestures.relay();

        assert_eq!(hits.get(), 2);
        assert!(!gestures.is_listening());
    }

    #[test]
    fn transport_presses_are_not_relayed() {
        let gestures = RelayGestures::default();
        let hits = Rc::new(Cell::new(0));
        let _listener = {
            let hits = hits.clone();
            gestures.listen(Rc::new(move || hits.set(hits.get() + 1)))
        };

        gestures.relay_from(GestureOrigin::TransportControl);
        assert_eq!(hits.get(), 0);
        gestures.relay_from(GestureOrigin::Page);
        assert_eq!(hits.get(), 1);
    }
}
