// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-drag tracking state: where the drag began, where the pointer was
//! last seen, and the deltas in between.
//!
//! A session lives for one pointer-down → pointer-up cycle. [`begin`]
//! marks both the origin (for cumulative deltas) and the last-seen
//! position (for incremental deltas); each [`advance`] yields both deltas
//! in one step and moves the last-seen marker forward. The engine calls
//! `advance` *before* consulting its veto callback, so a vetoed move
//! still shifts the baseline the next delta is measured from.
//!
//! [`begin`]: DragSession::begin
//! [`advance`]: DragSession::advance
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use veer_draggable::DragSession;
//!
//! let mut session = DragSession::new();
//! session.begin(Point::new(10.0, 20.0));
//!
//! let step = session.advance(Point::new(15.0, 22.0)).unwrap();
//! assert_eq!(step.delta.x, 5.0);
//!
//! let step = session.advance(Point::new(18.0, 22.0)).unwrap();
//! assert_eq!(step.delta.x, 3.0);
//! assert_eq!(step.total.x, 8.0);
//!
//! session.finish();
//! assert!(!session.is_active());
//! ```

use kurbo::{Point, Vec2};

/// Movement yielded by one [`DragSession::advance`] step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoveDelta {
    /// Movement since the previous step.
    pub delta: Vec2,
    /// Movement since the session began.
    pub total: Vec2,
}

/// Tracks one drag from pointer-down to pointer-up.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragSession {
    origin: Option<Point>,
    last: Option<Point>,
}

impl DragSession {
    /// An inactive session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking from `position`; both deltas measure from here.
    ///
    /// Beginning again while active restarts the session from the new
    /// position.
    pub fn begin(&mut self, position: Point) {
        self.origin = Some(position);
        self.last = Some(position);
    }

    /// Records a pointer position, yielding the step and cumulative
    /// movement and advancing the last-seen marker.
    ///
    /// Returns `None` while inactive.
    pub fn advance(&mut self, position: Point) -> Option<MoveDelta> {
        let origin = self.origin?;
        let last = self.last.replace(position)?;
        Some(MoveDelta {
            delta: position - last,
            total: position - origin,
        })
    }

    /// Ends the drag and clears all tracking state.
    pub fn finish(&mut self) {
        self.origin = None;
        self.last = None;
    }

    /// Whether a drag is currently being tracked.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_is_inactive() {
        let session = DragSession::new();
        assert!(!session.is_active());
    }

    #[test]
    fn begin_activates_and_anchors_both_markers() {
        let mut session = DragSession::new();
        session.begin(Point::new(10.0, 20.0));

        assert!(session.is_active());
        // The first step measures from the anchor for both deltas.
        let step = session.advance(Point::new(15.0, 26.0)).unwrap();
        assert_eq!(step.delta, Vec2::new(5.0, 6.0));
        assert_eq!(step.total, Vec2::new(5.0, 6.0));
    }

    #[test]
    fn advance_while_inactive_yields_nothing() {
        let mut session = DragSession::new();
        assert_eq!(session.advance(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn successive_steps_report_incremental_and_cumulative_movement() {
        let mut session = DragSession::new();
        session.begin(Point::ZERO);

        let first = session.advance(Point::new(5.0, 3.0)).unwrap();
        assert_eq!(first.delta, Vec2::new(5.0, 3.0));

        let second = session.advance(Point::new(8.0, 7.0)).unwrap();
        assert_eq!(second.delta, Vec2::new(3.0, 4.0));
        assert_eq!(second.total, Vec2::new(8.0, 7.0));

        let third = session.advance(Point::new(6.0, 7.0)).unwrap();
        assert_eq!(third.delta, Vec2::new(-2.0, 0.0));
        assert_eq!(third.total, Vec2::new(6.0, 7.0));
    }

    #[test]
    fn zero_movement_steps_are_reported() {
        let mut session = DragSession::new();
        session.begin(Point::new(50.0, 50.0));

        let step = session.advance(Point::new(50.0, 50.0)).unwrap();
        assert_eq!(step.delta, Vec2::ZERO);
        assert_eq!(step.total, Vec2::ZERO);
    }

    #[test]
    fn finish_deactivates_and_clears_tracking() {
        let mut session = DragSession::new();
        session.begin(Point::new(1.0, 1.0));
        session.advance(Point::new(2.0, 2.0));

        session.finish();

        assert!(!session.is_active());
        assert_eq!(session.advance(Point::new(3.0, 3.0)), None);
    }

    #[test]
    fn finish_on_fresh_session_is_safe() {
        let mut session = DragSession::new();
        session.finish();
        assert!(!session.is_active());
    }

    #[test]
    fn begin_while_active_restarts_from_the_new_anchor() {
        let mut session = DragSession::new();
        session.begin(Point::ZERO);
        session.advance(Point::new(10.0, 10.0));

        session.begin(Point::new(50.0, 60.0));

        let step = session.advance(Point::new(55.0, 65.0)).unwrap();
        assert_eq!(step.delta, Vec2::new(5.0, 5.0));
        assert_eq!(step.total, Vec2::new(5.0, 5.0));
    }
}
