// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=veer_draggable --heading-base-level=0

//! Veer Draggable: pointer-driven draggable surface elements.
//!
//! This is the workspace's top crate. It combines the unified pointer
//! source (`veer_pointer`) with the transform codec (`veer_transform`)
//! into [`Draggable`], a small state machine that turns a stream of
//! pointer positions into bounded, scale-aware translation updates on a
//! surface element.
//!
//! ## Usage
//!
//! 1) Implement the `veer_surface` traits for your environment (or use
//!    `veer_surface_ref` to try things out).
//! 2) Create a [`Draggable`] with a [`DragOptions`] describing callbacks
//!    and translation bounds.
//! 3) Keep the handle alive for as long as the element should stay
//!    draggable; call [`Draggable::reset`] to revert translation, and
//!    drop the handle (or call [`Draggable::destroy`]) to detach.
//!
//! ## Minimal example
//!
//! ```
//! use std::rc::Rc;
//! use kurbo::Point;
//! use veer_draggable::{DragOptions, Draggable, Outcome, read_transform};
//! use veer_surface::InputEvent;
//! use veer_surface_ref::{RefElement, RefHost};
//!
//! let host = RefHost::new();
//! let element = Rc::new(RefElement::new());
//!
//! let draggable = Draggable::new(
//!     &host,
//!     element.clone(),
//!     DragOptions::new()
//!         .max_x(100.0)
//!         .on_moving(|m| {
//!             // Vetoing skips the write for this step only.
//!             if m.delta.x > 50.0 { Outcome::Veto } else { Outcome::Continue }
//!         }),
//! );
//!
//! // The embedder feeds raw input; the engine translates the element.
//! element.dispatch(&InputEvent::mouse_down(Point::new(0.0, 0.0)));
//! host.global_element()
//!     .dispatch(&InputEvent::mouse_move(Point::new(30.0, 0.0)));
//!
//! let transform = read_transform(&*element, draggable.transform_property());
//! assert_eq!(transform.translation().x, 30.0);
//! ```
//!
//! The re-exports below cover the full embedder-facing surface: the
//! standalone codec utilities ([`read_transform`], [`write_transform`],
//! [`parse_matrix`], [`format_matrix`]), transform property resolution
//! ([`transform_property`], [`TRANSFORM`]), and the pointer types that
//! appear in callback signatures.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod engine;
mod options;
mod session;

pub use engine::Draggable;
pub use options::{DragCallback, DragOptions, MoveEvent, MovingCallback, Outcome};
pub use session::{DragSession, MoveDelta};

pub use veer_pointer::{Modality, PointerEvent};
pub use veer_transform::{
    TRANSFORM, format_matrix, parse_matrix, read_transform, transform_property, write_transform,
};
