// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=veer_surface --heading-base-level=0

//! Veer Surface: host, element, and raw input event abstractions.
//!
//! This crate defines the narrow contracts Veer expects from its embedding
//! environment. Nothing here assumes a particular UI toolkit or platform;
//! an embedder supplies three capabilities and the rest of the workspace is
//! written against them:
//!
//! - [`EventTarget`]: register/unregister a [`Listener`] for an
//!   [`EventKind`], with listeners removed by allocation identity.
//! - [`StyleAccess`]: read an element's resolved style value and assign an
//!   inline style value, as a flat property-name → string mapping.
//! - [`Host`]: the environment handle — the global dispatch surface (the
//!   window analogue), a touch capability probe, and a key-existence probe
//!   over the reference style object used for vendor-prefix resolution.
//!
//! Raw input is modeled by [`InputEvent`]: either a [`TouchEvent`] carrying
//! its native contact lists, or a [`MouseEvent`] carrying a single page
//! position. Unification of the two into one synthetic shape happens one
//! level up, in `veer_pointer`; this crate only describes what the host
//! actually delivers.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use veer_surface::{EventKind, InputEvent, MouseEvent};
//!
//! let event = InputEvent::mouse_down(Point::new(4.0, 8.0));
//! assert_eq!(event.kind(), EventKind::MouseDown);
//! match &event {
//!     InputEvent::Mouse(MouseEvent { page, .. }) => assert_eq!(page.x, 4.0),
//!     InputEvent::Touch(_) => unreachable!(),
//! }
//! ```
//!
//! An in-memory reference implementation of [`Host`] and [`Element`] lives
//! in the sibling `veer_surface_ref` crate and is what the workspace's own
//! tests run against.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod event;
mod style;
mod target;

pub use event::{EventKind, InputEvent, MouseEvent, TouchEvent, TouchPoint};
pub use style::{Element, StyleAccess};
pub use target::{EventTarget, Host, Listener, listen, unlisten};
