// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The synthetic pointer event and the two raw-event adapters.

use smallvec::{SmallVec, smallvec};

use veer_surface::{InputEvent, TouchPoint};

/// The unified event shape consumers see, regardless of input device.
///
/// Touch events pass their contact lists through unchanged. Mouse events
/// are adapted into the same shape: `identifier` is always `0` and the
/// lists hold the single synthetic contact — except after release, where
/// `touches` is empty while `changed_touches` retains the lifted contact,
/// mirroring real touch-end semantics.
#[derive(Clone, Debug)]
pub struct PointerEvent<'a> {
    /// Identifier of the contact that produced this event. Always `0` for
    /// adapted mouse input.
    pub identifier: i32,
    /// Contacts currently on the surface.
    pub touches: SmallVec<[TouchPoint; 1]>,
    /// Contacts that changed in this event.
    pub changed_touches: SmallVec<[TouchPoint; 1]>,
    /// The raw event this one was adapted from.
    pub raw: &'a InputEvent,
}

impl PointerEvent<'_> {
    /// The primary tracked contact, if any is on the surface.
    #[must_use]
    pub fn primary(&self) -> Option<TouchPoint> {
        self.touches.first().copied()
    }
}

/// Passes a raw touch event through; non-touch events are skipped.
pub(crate) fn adapt_touch(raw: &InputEvent) -> Option<PointerEvent<'_>> {
    let InputEvent::Touch(e) = raw else {
        return None;
    };
    Some(PointerEvent {
        identifier: e
            .changed_touches
            .first()
            .or_else(|| e.touches.first())
            .map_or(0, |t| t.identifier),
        touches: e.touches.iter().copied().collect(),
        changed_touches: e.changed_touches.iter().copied().collect(),
        raw,
    })
}

/// Synthesizes the touch shape from a raw mouse event; non-mouse events
/// are skipped. `lifted` marks release, which empties `touches`.
pub(crate) fn adapt_mouse(raw: &InputEvent, lifted: bool) -> Option<PointerEvent<'_>> {
    let InputEvent::Mouse(e) = raw else {
        return None;
    };
    let contact = TouchPoint::new(0, e.page);
    Some(PointerEvent {
        identifier: 0,
        touches: if lifted {
            SmallVec::new()
        } else {
            smallvec![contact]
        },
        changed_touches: smallvec![contact],
        raw,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use kurbo::Point;
    use veer_surface::EventKind;

    #[test]
    fn touch_adapter_passes_contact_lists_through() {
        let first = TouchPoint::new(11, Point::new(1.0, 2.0));
        let second = TouchPoint::new(12, Point::new(3.0, 4.0));
        let raw = InputEvent::touch(EventKind::TouchMove, vec![first, second]);

        let event = adapt_touch(&raw).unwrap();
        assert_eq!(event.identifier, 11);
        assert_eq!(&event.touches[..], &[first, second]);
        assert_eq!(&event.changed_touches[..], &[first, second]);
        assert_eq!(event.primary(), Some(first));
    }

    #[test]
    fn touch_adapter_skips_mouse_events() {
        let raw = InputEvent::mouse_move(Point::new(1.0, 1.0));
        assert!(adapt_touch(&raw).is_none());
    }

    #[test]
    fn mouse_adapter_synthesizes_single_contact() {
        let raw = InputEvent::mouse_down(Point::new(8.0, 9.0));
        let event = adapt_mouse(&raw, false).unwrap();

        assert_eq!(event.identifier, 0);
        assert_eq!(event.touches.len(), 1);
        assert_eq!(event.changed_touches.len(), 1);
        assert_eq!(event.primary().unwrap().page, Point::new(8.0, 9.0));
    }

    #[test]
    fn mouse_release_empties_touches_but_keeps_changed() {
        let raw = InputEvent::mouse_up(Point::new(8.0, 9.0));
        let event = adapt_mouse(&raw, true).unwrap();

        assert!(event.touches.is_empty());
        assert_eq!(event.changed_touches.len(), 1);
        assert_eq!(event.changed_touches[0].page, Point::new(8.0, 9.0));
        assert_eq!(event.primary(), None);
    }

    #[test]
    fn mouse_adapter_skips_touch_events() {
        let raw = InputEvent::touch(EventKind::TouchStart, vec![]);
        assert!(adapt_mouse(&raw, false).is_none());
    }
}
