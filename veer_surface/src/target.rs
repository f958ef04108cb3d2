// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event targets, listeners, and the host environment handle.

use alloc::rc::Rc;

use crate::event::{EventKind, InputEvent};

/// Shared handler invoked for each raw event delivered to a target.
///
/// Listeners are matched by allocation identity ([`Rc::ptr_eq`]) on
/// removal: unregistering passes the same handle that was registered, and
/// removing a handle that is not (or no longer) registered is a no-op.
pub type Listener = Rc<dyn Fn(&InputEvent)>;

/// Something raw input events can be delivered to.
///
/// This is the whole of what Veer needs from the host's event system —
/// register a listener for an event kind, and remove it again. Dispatch
/// order, bubbling, and deduplication of duplicate registrations are the
/// host's business.
pub trait EventTarget {
    /// Registers `listener` for events of `kind`.
    fn add_listener(&self, kind: EventKind, listener: Listener, capture: bool);

    /// Removes a previously registered listener, matched by identity.
    ///
    /// Removing a listener that is not registered is a no-op.
    fn remove_listener(&self, kind: EventKind, listener: &Listener, capture: bool);
}

/// Registers `listener` on `target` in the bubbling phase.
///
/// Veer never uses the capture phase; this helper pins that default.
pub fn listen<T: EventTarget + ?Sized>(target: &T, kind: EventKind, listener: Listener) {
    target.add_listener(kind, listener, false);
}

/// Removes a bubbling-phase listener registered through [`listen`].
pub fn unlisten<T: EventTarget + ?Sized>(target: &T, kind: EventKind, listener: &Listener) {
    target.remove_listener(kind, listener, false);
}

/// The environment handle an embedder provides alongside its elements.
///
/// A `Host` stands in for the ambient browser globals of the reference
/// design: the window as a dispatch surface, the touch capability probe,
/// and the reference style object that vendor-prefix resolution checks
/// property names against.
pub trait Host {
    /// The global dispatch surface.
    ///
    /// Move and end events are observed here rather than on the element,
    /// so a drag keeps tracking even when the pointer leaves the element's
    /// bounds.
    fn global(&self) -> Rc<dyn EventTarget>;

    /// Whether this environment delivers touch events.
    ///
    /// Probed once per attachment; the touch/mouse decision is fixed for
    /// the life of that attachment.
    fn touch_capable(&self) -> bool;

    /// Key-existence probe over the environment's reference style object.
    fn supports_style_property(&self, property: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;

    use alloc::vec::Vec;
    use kurbo::Point;

    /// Records registrations instead of dispatching anything.
    #[derive(Default)]
    struct RecordingTarget {
        log: RefCell<Vec<(EventKind, bool, bool)>>, // kind, capture, added
    }

    impl EventTarget for RecordingTarget {
        fn add_listener(&self, kind: EventKind, _listener: Listener, capture: bool) {
            self.log.borrow_mut().push((kind, capture, true));
        }

        fn remove_listener(&self, kind: EventKind, _listener: &Listener, capture: bool) {
            self.log.borrow_mut().push((kind, capture, false));
        }
    }

    #[test]
    fn listen_and_unlisten_always_use_bubbling() {
        let target = RecordingTarget::default();
        let listener: Listener = Rc::new(|_| {});

        listen(&target, EventKind::MouseDown, listener.clone());
        unlisten(&target, EventKind::MouseDown, &listener);

        assert_eq!(
            target.log.into_inner(),
            alloc::vec![
                (EventKind::MouseDown, false, true),
                (EventKind::MouseDown, false, false),
            ]
        );
    }

    #[test]
    fn listener_identity_survives_cloning_the_handle() {
        let a: Listener = Rc::new(|_| {});
        let b = a.clone();
        let c: Listener = Rc::new(|_| {});

        assert!(Rc::ptr_eq(&a, &b));
        assert!(!Rc::ptr_eq(&a, &c));

        // Handles stay callable through either clone.
        a(&InputEvent::mouse_move(Point::new(0.0, 0.0)));
        b(&InputEvent::mouse_move(Point::new(0.0, 0.0)));
    }
}
