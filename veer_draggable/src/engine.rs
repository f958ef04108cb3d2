// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag state machine: pointer positions in, bounded translation out.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;
use core::fmt;

use kurbo::Affine;

use veer_pointer::{Modality, PointerBinding, PointerEvent, PointerHandlers, attach};
use veer_surface::{Element, Host};
use veer_transform::{read_transform, transform_property, write_transform};

use crate::options::{DragOptions, MoveEvent, Outcome};
use crate::session::DragSession;

/// State shared between the engine handle and its pointer listeners.
struct EngineState {
    session: DragSession,
    options: DragOptions,
}

/// Makes a surface element draggable.
///
/// A `Draggable` cycles between idle and dragging: pointer-down on the
/// element starts a drag, each move translates the element by the
/// pointer's step delta, and release or cancel returns to idle. Movement
/// is applied by rewriting only the translation components of the
/// element's affine transform; scale and skew pass through untouched.
///
/// Bounds from [`DragOptions`] clamp the translation. They are
/// interpreted in unscaled unit space: when an axis is zoomed in
/// (scale above 1) the configured bounds are expanded by that scale
/// before clamping, so the limit tracks the element's zoom. A scale at
/// or below 1 leaves bounds as configured — scaling only ever expands
/// the effective limit.
///
/// The engine detaches its input listeners when dropped; [`destroy`]
/// spells the same thing out at call sites that want the intent visible.
///
/// [`destroy`]: Draggable::destroy
///
/// ## Minimal example
///
/// ```
/// use std::rc::Rc;
/// use kurbo::Point;
/// use veer_draggable::{DragOptions, Draggable, read_transform};
/// use veer_surface::InputEvent;
/// use veer_surface_ref::{RefElement, RefHost};
///
/// let host = RefHost::new();
/// let element = Rc::new(RefElement::new());
/// let draggable = Draggable::new(&host, element.clone(), DragOptions::new());
///
/// element.dispatch(&InputEvent::mouse_down(Point::new(0.0, 0.0)));
/// host.global_element()
///     .dispatch(&InputEvent::mouse_move(Point::new(12.0, 5.0)));
///
/// let transform = read_transform(&*element, draggable.transform_property());
/// assert_eq!(transform.translation().x, 12.0);
/// assert_eq!(transform.translation().y, 5.0);
/// ```
pub struct Draggable<E: Element + 'static> {
    element: Rc<E>,
    binding: PointerBinding,
    baseline: Affine,
    property: Rc<String>,
}

impl<E: Element + 'static> fmt::Debug for Draggable<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Draggable")
            .field("modality", &self.binding.modality())
            .field("baseline", &self.baseline)
            .field("property", &self.property)
            .finish_non_exhaustive()
    }
}

impl<E: Element + 'static> Draggable<E> {
    /// Attaches a drag engine to `element`.
    ///
    /// The transform property name is resolved through the host's style
    /// probe once, here, and reused for every read and write. The
    /// element's transform at this moment becomes the baseline that
    /// [`reset`](Self::reset) later restores.
    pub fn new(host: &impl Host, element: Rc<E>, options: DragOptions) -> Self {
        let property = Rc::new(transform_property(|name| {
            host.supports_style_property(name)
        }));
        let baseline = read_transform(&*element, &property);
        let state = Rc::new(RefCell::new(EngineState {
            session: DragSession::new(),
            options,
        }));

        let handlers = PointerHandlers::new()
            .on_start(down_handler(state.clone()))
            .on_move(move_handler(element.clone(), property.clone(), state.clone()))
            .on_end(up_handler(state.clone()))
            .on_cancel(up_handler(state));

        let binding = attach(
            element.clone(),
            host.global(),
            host.touch_capable(),
            handlers,
        );

        Self {
            element,
            binding,
            baseline,
            property,
        }
    }

    /// The resolved name the transform is stored under, for embedders
    /// that read or write the same property directly.
    #[must_use]
    pub fn transform_property(&self) -> &str {
        &self.property
    }

    /// The transform captured at construction time.
    #[must_use]
    pub fn baseline(&self) -> Affine {
        self.baseline
    }

    /// Which input branch the engine attached to.
    #[must_use]
    pub fn modality(&self) -> Modality {
        self.binding.modality()
    }

    /// Restores the translation captured at construction.
    ///
    /// Only the translation components revert; whatever scale and skew
    /// the element has picked up since are preserved. Callable from any
    /// state, including from inside the engine's own callbacks.
    pub fn reset(&self) {
        let mut coeffs = read_transform(&*self.element, &self.property).as_coeffs();
        let baseline = self.baseline.as_coeffs();
        coeffs[4] = baseline[4];
        coeffs[5] = baseline[5];
        write_transform(&*self.element, &self.property, Affine::new(coeffs));
    }

    /// Detaches the engine from its element.
    ///
    /// An in-flight drag is abandoned without an end notification.
    /// Dropping the engine has the same effect; this method exists for
    /// call sites that want the teardown explicit.
    pub fn destroy(self) {
        // Drop detaches.
    }
}

impl<E: Element + 'static> Drop for Draggable<E> {
    fn drop(&mut self) {
        self.binding.detach();
    }
}

fn down_handler(state: Rc<RefCell<EngineState>>) -> impl FnMut(&PointerEvent<'_>) + 'static {
    move |event| {
        let Some(contact) = event.primary() else {
            return;
        };
        let mut state = state.borrow_mut();
        state.session.begin(contact.page);
        if let Some(on_start) = state.options.on_start.as_mut() {
            on_start(event);
        }
    }
}

fn move_handler<E: Element + 'static>(
    element: Rc<E>,
    property: Rc<String>,
    state: Rc<RefCell<EngineState>>,
) -> impl FnMut(&PointerEvent<'_>) + 'static {
    move |event| {
        let mut state = state.borrow_mut();
        if !state.session.is_active() {
            return;
        }
        let Some(contact) = event.primary() else {
            return;
        };

        let coeffs = read_transform(&*element, &property).as_coeffs();
        // Advancing before the veto check is deliberate: a vetoed move
        // still shifts the baseline for the next delta.
        let Some(step) = state.session.advance(contact.page) else {
            return;
        };

        let candidate_x = step.delta.x + coeffs[4];
        let candidate_y = step.delta.y + coeffs[5];

        let (min_x, max_x) = effective_bounds(state.options.min_x, state.options.max_x, coeffs[0]);
        let (min_y, max_y) = effective_bounds(state.options.min_y, state.options.max_y, coeffs[3]);
        let x = clamp_translation(candidate_x, min_x, max_x);
        let y = clamp_translation(candidate_y, min_y, max_y);

        if let Some(on_moving) = state.options.on_moving.as_mut() {
            let info = MoveEvent {
                total_delta: step.total,
                delta: step.delta,
                event,
            };
            if on_moving(&info) == Outcome::Veto {
                return;
            }
        }

        let mut next = coeffs;
        next[4] = x;
        next[5] = y;
        write_transform(&*element, &property, Affine::new(next));
    }
}

fn up_handler(state: Rc<RefCell<EngineState>>) -> impl FnMut(&PointerEvent<'_>) + 'static {
    move |event| {
        let mut state = state.borrow_mut();
        state.session.finish();
        if let Some(on_end) = state.options.on_end.as_mut() {
            on_end(event);
        }
    }
}

/// Effective clamp limits for one axis at the given scale.
///
/// Zoom above 1 expands the configured bounds to match; zoom at or below
/// 1 (and a `NaN` scale) leaves them as configured.
fn effective_bounds(min: f64, max: f64, scale: f64) -> (f64, f64) {
    if scale > 1.0 {
        (min * scale, max * scale)
    } else {
        (min, max)
    }
}

/// Clamps with the upper bound checked first and `NaN` passing through.
fn clamp_translation(value: f64, min: f64, max: f64) -> f64 {
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_expand_only_when_zoomed_in() {
        assert_eq!(effective_bounds(-10.0, 10.0, 2.0), (-20.0, 20.0));
        assert_eq!(effective_bounds(-10.0, 10.0, 1.0), (-10.0, 10.0));
        assert_eq!(effective_bounds(-10.0, 10.0, 0.5), (-10.0, 10.0));
        assert_eq!(effective_bounds(-10.0, 10.0, f64::NAN), (-10.0, 10.0));
    }

    #[test]
    fn unbounded_sentinels_survive_scaling() {
        let (min, max) = effective_bounds(f64::NEG_INFINITY, f64::INFINITY, 3.5);
        assert_eq!(min, f64::NEG_INFINITY);
        assert_eq!(max, f64::INFINITY);
    }

    #[test]
    fn clamp_snaps_to_the_nearer_violated_bound() {
        assert_eq!(clamp_translation(15.0, -10.0, 10.0), 10.0);
        assert_eq!(clamp_translation(-15.0, -10.0, 10.0), -10.0);
        assert_eq!(clamp_translation(5.0, -10.0, 10.0), 5.0);
    }

    #[test]
    fn clamp_passes_nan_through() {
        assert!(clamp_translation(f64::NAN, -10.0, 10.0).is_nan());
    }

    #[test]
    fn clamp_against_infinite_bounds_is_identity() {
        assert_eq!(
            clamp_translation(1.0e9, f64::NEG_INFINITY, f64::INFINITY),
            1.0e9
        );
    }
}
