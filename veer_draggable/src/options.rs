// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag configuration: user callbacks and translation bounds.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Vec2;
use veer_pointer::PointerEvent;

/// What the `on_moving` callback decided about the pending move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Outcome {
    /// Apply the move to the element's transform.
    #[default]
    Continue,
    /// Skip the transform write for this step.
    ///
    /// The step still advances the delta baseline: the next move's
    /// incremental delta is measured from the vetoed position.
    Veto,
}

/// Payload handed to `on_moving` for each tracked pointer move.
#[derive(Clone, Debug)]
pub struct MoveEvent<'a> {
    /// Movement since the drag began.
    pub total_delta: Vec2,
    /// Movement since the previous move.
    pub delta: Vec2,
    /// The synthetic pointer event that produced this move.
    pub event: &'a PointerEvent<'a>,
}

/// Handler for drag start and end transitions.
pub type DragCallback = Box<dyn FnMut(&PointerEvent<'_>)>;

/// Handler consulted for each move; may veto the transform write.
pub type MovingCallback = Box<dyn FnMut(&MoveEvent<'_>) -> Outcome>;

/// Configuration captured when a [`Draggable`] is created.
///
/// Bounds constrain the element's translation, not the pointer: a
/// translation component that would land outside `[min, max]` snaps to
/// the bound. Unset bounds default to `±INFINITY` — no effective limit.
/// Bounds are interpreted in unscaled unit space; see
/// [`Draggable`](crate::Draggable) for how zoom interacts with them.
///
/// ```
/// use veer_draggable::{DragOptions, Outcome};
///
/// let options = DragOptions::new()
///     .min_x(-120.0)
///     .max_x(120.0)
///     .on_moving(|m| {
///         if m.total_delta.x.abs() > 200.0 {
///             Outcome::Veto
///         } else {
///             Outcome::Continue
///         }
///     });
/// # let _ = options;
/// ```
#[must_use]
pub struct DragOptions {
    pub(crate) on_start: Option<DragCallback>,
    pub(crate) on_moving: Option<MovingCallback>,
    pub(crate) on_end: Option<DragCallback>,
    pub(crate) min_x: f64,
    pub(crate) max_x: f64,
    pub(crate) min_y: f64,
    pub(crate) max_y: f64,
}

impl fmt::Debug for DragOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragOptions")
            .field("on_start", &self.on_start.is_some())
            .field("on_moving", &self.on_moving.is_some())
            .field("on_end", &self.on_end.is_some())
            .field("min_x", &self.min_x)
            .field("max_x", &self.max_x)
            .field("min_y", &self.min_y)
            .field("max_y", &self.max_y)
            .finish()
    }
}

impl Default for DragOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl DragOptions {
    /// No callbacks, unbounded on both axes.
    pub fn new() -> Self {
        Self {
            on_start: None,
            on_moving: None,
            on_end: None,
            min_x: f64::NEG_INFINITY,
            max_x: f64::INFINITY,
            min_y: f64::NEG_INFINITY,
            max_y: f64::INFINITY,
        }
    }

    /// Invoked when a drag begins, before any movement.
    pub fn on_start(mut self, handler: impl FnMut(&PointerEvent<'_>) + 'static) -> Self {
        self.on_start = Some(Box::new(handler));
        self
    }

    /// Invoked for each move with the step and cumulative deltas.
    ///
    /// Returning [`Outcome::Veto`] skips the transform write for that
    /// step.
    pub fn on_moving(mut self, handler: impl FnMut(&MoveEvent<'_>) -> Outcome + 'static) -> Self {
        self.on_moving = Some(Box::new(handler));
        self
    }

    /// Invoked when the pointer is released or the host cancels the
    /// sequence.
    pub fn on_end(mut self, handler: impl FnMut(&PointerEvent<'_>) + 'static) -> Self {
        self.on_end = Some(Box::new(handler));
        self
    }

    /// Lower translation bound on the X axis.
    pub fn min_x(mut self, bound: f64) -> Self {
        self.min_x = bound;
        self
    }

    /// Upper translation bound on the X axis.
    pub fn max_x(mut self, bound: f64) -> Self {
        self.max_x = bound;
        self
    }

    /// Lower translation bound on the Y axis.
    pub fn min_y(mut self, bound: f64) -> Self {
        self.min_y = bound;
        self
    }

    /// Upper translation bound on the Y axis.
    pub fn max_y(mut self, bound: f64) -> Self {
        self.max_y = bound;
        self
    }
}
