// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input events as delivered by the host.
//!
//! These types describe what the environment actually emits: touch events
//! carry their native contact lists, mouse events carry a single page
//! position. No unification happens here — adapters in `veer_pointer`
//! produce the synthetic single-pointer shape from either variant.

use alloc::vec::Vec;
use kurbo::Point;

/// The raw event kinds a drag interaction subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A finger made contact with the element.
    TouchStart,
    /// A tracked finger moved.
    TouchMove,
    /// A tracked finger left the surface.
    TouchEnd,
    /// The host aborted the touch sequence (incoming call, palm rejection).
    TouchCancel,
    /// A mouse button was pressed over the element.
    MouseDown,
    /// The mouse moved.
    MouseMove,
    /// A mouse button was released.
    MouseUp,
}

/// A single contact point in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Host-assigned contact identifier. Synthetic mouse contacts always
    /// use `0`.
    pub identifier: i32,
    /// Position in page coordinates.
    pub page: Point,
}

impl TouchPoint {
    /// Creates a contact point.
    #[must_use]
    pub fn new(identifier: i32, page: Point) -> Self {
        Self { identifier, page }
    }
}

/// A native touch event with its contact lists.
///
/// `touches` holds every contact currently on the surface;
/// `changed_touches` holds the contacts that triggered this event. On an
/// end event the lifted contact appears only in `changed_touches`.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// Which touch transition this event reports.
    pub kind: EventKind,
    /// All contacts currently on the surface.
    pub touches: Vec<TouchPoint>,
    /// Contacts that changed in this event.
    pub changed_touches: Vec<TouchPoint>,
}

/// A native mouse event: a single position, no contact lists.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseEvent {
    /// Which mouse transition this event reports.
    pub kind: EventKind,
    /// Pointer position in page coordinates.
    pub page: Point,
}

/// A raw event as delivered by the host, before any unification.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Delivered by a touch-capable host.
    Touch(TouchEvent),
    /// Delivered by a mouse host.
    Mouse(MouseEvent),
}

impl InputEvent {
    /// The raw kind of this event, regardless of variant.
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Touch(e) => e.kind,
            Self::Mouse(e) => e.kind,
        }
    }

    /// A mouse press at `page`.
    #[must_use]
    pub fn mouse_down(page: Point) -> Self {
        Self::Mouse(MouseEvent {
            kind: EventKind::MouseDown,
            page,
        })
    }

    /// A mouse move to `page`.
    #[must_use]
    pub fn mouse_move(page: Point) -> Self {
        Self::Mouse(MouseEvent {
            kind: EventKind::MouseMove,
            page,
        })
    }

    /// A mouse release at `page`.
    #[must_use]
    pub fn mouse_up(page: Point) -> Self {
        Self::Mouse(MouseEvent {
            kind: EventKind::MouseUp,
            page,
        })
    }

    /// A touch event where every contact in `touches` also changed.
    ///
    /// Covers the common start/move shapes; end and cancel events usually
    /// need distinct lists and are built literally.
    #[must_use]
    pub fn touch(kind: EventKind, touches: Vec<TouchPoint>) -> Self {
        Self::Touch(TouchEvent {
            kind,
            changed_touches: touches.clone(),
            touches,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn kind_is_reported_for_both_variants() {
        let down = InputEvent::mouse_down(Point::new(1.0, 2.0));
        assert_eq!(down.kind(), EventKind::MouseDown);

        let start = InputEvent::touch(
            EventKind::TouchStart,
            vec![TouchPoint::new(7, Point::new(3.0, 4.0))],
        );
        assert_eq!(start.kind(), EventKind::TouchStart);
    }

    #[test]
    fn touch_helper_mirrors_contacts_into_changed_touches() {
        let point = TouchPoint::new(0, Point::new(10.0, 20.0));
        let event = InputEvent::touch(EventKind::TouchMove, vec![point]);

        match event {
            InputEvent::Touch(e) => {
                assert_eq!(e.touches, vec![point]);
                assert_eq!(e.changed_touches, vec![point]);
            }
            InputEvent::Mouse(_) => unreachable!(),
        }
    }

    #[test]
    fn end_events_can_carry_distinct_lists() {
        let lifted = TouchPoint::new(3, Point::new(5.0, 6.0));
        let event = InputEvent::Touch(TouchEvent {
            kind: EventKind::TouchEnd,
            touches: vec![],
            changed_touches: vec![lifted],
        });

        match event {
            InputEvent::Touch(e) => {
                assert!(e.touches.is_empty());
                assert_eq!(e.changed_touches, vec![lifted]);
            }
            InputEvent::Mouse(_) => unreachable!(),
        }
    }
}
