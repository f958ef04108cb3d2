// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=veer_pointer --heading-base-level=0

//! Veer Pointer: one interaction model over touch and mouse input.
//!
//! Hosts deliver either touch events (with native contact lists) or mouse
//! events (a bare position). [`attach`] hides that split: it probes the
//! environment's touch capability once, picks the matching adapter, and
//! from then on every handler sees the same synthetic [`PointerEvent`]
//! shape whatever the device.
//!
//! The subscription topology is part of the contract:
//!
//! - start and cancel are observed on the **element**;
//! - move and end are observed on the **global** target, so a drag keeps
//!   tracking when the pointer leaves the element's bounds;
//! - mouse input has no cancel event, so the cancel handler never fires in
//!   the mouse branch;
//! - the capture phase is never used.
//!
//! [`attach`] returns a [`PointerBinding`] whose [`detach`] removes
//! exactly the listeners that were added, mirrored per branch; detaching
//! twice is harmless.
//!
//! ## Minimal example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use kurbo::Point;
//! use veer_pointer::{Modality, PointerHandlers, attach};
//! use veer_surface::{Host, InputEvent};
//! use veer_surface_ref::{RefElement, RefHost};
//!
//! let host = RefHost::new(); // mouse-only environment
//! let element = Rc::new(RefElement::new());
//!
//! let starts = Rc::new(Cell::new(0));
//! let handlers = PointerHandlers::new().on_start({
//!     let starts = starts.clone();
//!     move |event| {
//!         assert_eq!(event.identifier, 0);
//!         starts.set(starts.get() + 1);
//!     }
//! });
//!
//! let binding = attach(element.clone(), host.global(), host.touch_capable(), handlers);
//! assert_eq!(binding.modality(), Modality::Mouse);
//!
//! element.dispatch(&InputEvent::mouse_down(Point::new(10.0, 10.0)));
//! assert_eq!(starts.get(), 1);
//!
//! binding.detach();
//! element.dispatch(&InputEvent::mouse_down(Point::new(10.0, 10.0)));
//! assert_eq!(starts.get(), 1);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod event;

pub use event::PointerEvent;

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use veer_surface::{EventKind, EventTarget, InputEvent, Listener, listen, unlisten};

use crate::event::{adapt_mouse, adapt_touch};

/// Handler invoked with the unified pointer event.
pub type PointerCallback = Box<dyn FnMut(&PointerEvent<'_>)>;

/// The input branch an attachment ended up on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modality {
    /// Native touch events, passed through.
    Touch,
    /// Mouse events, adapted into the touch shape.
    Mouse,
}

/// The four interaction handlers, configured fluently.
///
/// Every handler defaults to a no-op, so consumers only wire the
/// transitions they care about.
#[must_use]
pub struct PointerHandlers {
    on_start: PointerCallback,
    on_move: PointerCallback,
    on_end: PointerCallback,
    on_cancel: PointerCallback,
}

impl fmt::Debug for PointerHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerHandlers").finish_non_exhaustive()
    }
}

impl Default for PointerHandlers {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerHandlers {
    /// All handlers set to no-ops.
    pub fn new() -> Self {
        Self {
            on_start: Box::new(|_| {}),
            on_move: Box::new(|_| {}),
            on_end: Box::new(|_| {}),
            on_cancel: Box::new(|_| {}),
        }
    }

    /// Handler for pointer-down on the element.
    pub fn on_start(mut self, handler: impl FnMut(&PointerEvent<'_>) + 'static) -> Self {
        self.on_start = Box::new(handler);
        self
    }

    /// Handler for pointer movement on the global target.
    pub fn on_move(mut self, handler: impl FnMut(&PointerEvent<'_>) + 'static) -> Self {
        self.on_move = Box::new(handler);
        self
    }

    /// Handler for pointer release on the global target.
    pub fn on_end(mut self, handler: impl FnMut(&PointerEvent<'_>) + 'static) -> Self {
        self.on_end = Box::new(handler);
        self
    }

    /// Handler for a host-aborted touch sequence. Never fires for mouse
    /// input.
    pub fn on_cancel(mut self, handler: impl FnMut(&PointerEvent<'_>) + 'static) -> Self {
        self.on_cancel = Box::new(handler);
        self
    }
}

struct Registration {
    target: Rc<dyn EventTarget>,
    kind: EventKind,
    listener: Listener,
}

impl Registration {
    fn new(target: Rc<dyn EventTarget>, kind: EventKind, listener: Listener) -> Self {
        listen(&*target, kind, listener.clone());
        Self {
            target,
            kind,
            listener,
        }
    }
}

/// A live attachment produced by [`attach`].
///
/// Holds the exact listeners that were registered so [`detach`] can
/// mirror them off again.
///
/// [`detach`]: PointerBinding::detach
pub struct PointerBinding {
    modality: Modality,
    registrations: Vec<Registration>,
}

impl fmt::Debug for PointerBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PointerBinding")
            .field("modality", &self.modality)
            .field("registrations", &self.registrations.len())
            .finish()
    }
}

impl PointerBinding {
    /// Which input branch this attachment is on, fixed at attach time.
    #[must_use]
    pub fn modality(&self) -> Modality {
        self.modality
    }

    /// Removes every listener this attachment added.
    ///
    /// Calling this more than once is harmless: removing an
    /// already-removed listener is a no-op at the event-system level.
    pub fn detach(&self) {
        for r in &self.registrations {
            unlisten(&*r.target, r.kind, &r.listener);
        }
    }
}

/// Attaches the unified pointer source to `element`.
///
/// `touch_capable` is the environment probe (`Host::touch_capable`); it is
/// consulted exactly once, here, and the chosen adapter is fixed for the
/// life of the binding. `global` is the environment's global dispatch
/// surface (`Host::global`), which observes move and end so drags survive
/// the pointer leaving the element.
pub fn attach(
    element: Rc<dyn EventTarget>,
    global: Rc<dyn EventTarget>,
    touch_capable: bool,
    handlers: PointerHandlers,
) -> PointerBinding {
    let PointerHandlers {
        on_start,
        on_move,
        on_end,
        on_cancel,
    } = handlers;

    if touch_capable {
        let registrations = alloc::vec![
            Registration::new(
                element.clone(),
                EventKind::TouchStart,
                touch_listener(on_start),
            ),
            Registration::new(global.clone(), EventKind::TouchMove, touch_listener(on_move)),
            Registration::new(global, EventKind::TouchEnd, touch_listener(on_end)),
            Registration::new(element, EventKind::TouchCancel, touch_listener(on_cancel)),
        ];
        PointerBinding {
            modality: Modality::Touch,
            registrations,
        }
    } else {
        // Mouse input has no cancel event.
        drop(on_cancel);
        let registrations = alloc::vec![
            Registration::new(
                element,
                EventKind::MouseDown,
                mouse_listener(on_start, false),
            ),
            Registration::new(
                global.clone(),
                EventKind::MouseMove,
                mouse_listener(on_move, false),
            ),
            Registration::new(global, EventKind::MouseUp, mouse_listener(on_end, true)),
        ];
        PointerBinding {
            modality: Modality::Mouse,
            registrations,
        }
    }
}

fn touch_listener(callback: PointerCallback) -> Listener {
    let callback = RefCell::new(callback);
    Rc::new(move |raw: &InputEvent| {
        if let Some(event) = adapt_touch(raw) {
            (callback.borrow_mut())(&event);
        }
    })
}

fn mouse_listener(callback: PointerCallback, lifted: bool) -> Listener {
    let callback = RefCell::new(callback);
    Rc::new(move |raw: &InputEvent| {
        if let Some(event) = adapt_mouse(raw, lifted) {
            (callback.borrow_mut())(&event);
        }
    })
}
