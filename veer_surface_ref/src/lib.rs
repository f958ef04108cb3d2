// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=veer_surface_ref --heading-base-level=0

//! Veer Surface Reference Host.
//!
//! This crate provides a small, stateful, in-memory implementation of the
//! [`Host`] and element contracts from `veer_surface` for **tests and
//! embedder guidance**.
//!
//! It is intentionally *not* a browser shim:
//! - It does **not** bubble events through a tree; [`RefElement::dispatch`]
//!   delivers an event to that element's listeners only.
//! - Computed style is simply the last assigned inline value.
//! - "Supported" style properties are whatever keys the host was given.
//!
//! What it does do faithfully is the listener contract: registration per
//! `(kind, capture)` pair, removal by allocation identity, and dispatch
//! over a snapshot so listeners may detach themselves mid-dispatch.
//!
//! ## Minimal example
//!
//! ```
//! use std::rc::Rc;
//! use std::cell::Cell;
//! use kurbo::Point;
//! use veer_surface::{EventKind, InputEvent, Listener, listen};
//! use veer_surface_ref::RefElement;
//!
//! let element = RefElement::new();
//! let hits = Rc::new(Cell::new(0));
//!
//! let listener: Listener = {
//!     let hits = hits.clone();
//!     Rc::new(move |_| hits.set(hits.get() + 1))
//! };
//! listen(&element, EventKind::MouseDown, listener);
//!
//! element.dispatch(&InputEvent::mouse_down(Point::new(1.0, 1.0)));
//! assert_eq!(hits.get(), 1);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

use alloc::rc::Rc;
use alloc::string::{String, ToString};
use core::cell::RefCell;
use core::fmt;

use hashbrown::{HashMap, HashSet};
use smallvec::SmallVec;

use veer_surface::{EventKind, EventTarget, Host, InputEvent, Listener, StyleAccess};

/// An in-memory event target with a flat style map.
///
/// Listener tables are keyed by `(kind, capture)`. Dispatch delivers
/// capture-phase listeners before bubbling-phase ones, mirroring host
/// ordering, and iterates a snapshot so a listener may remove itself (or
/// any other listener) without disturbing the current delivery.
#[derive(Default)]
pub struct RefElement {
    listeners: RefCell<HashMap<(EventKind, bool), SmallVec<[Listener; 2]>>>,
    styles: RefCell<HashMap<String, String>>,
}

impl fmt::Debug for RefElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners: usize = self.listeners.borrow().values().map(SmallVec::len).sum();
        f.debug_struct("RefElement")
            .field("listeners", &listeners)
            .field("styles", &self.styles.borrow())
            .finish()
    }
}

impl RefElement {
    /// Creates an element with no listeners and no styles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `event` to every listener registered for its kind.
    ///
    /// Runs synchronously on the calling stack, capture listeners first.
    /// The listener list is snapshotted up front: handlers registered
    /// during dispatch do not see this event, and handlers removed during
    /// dispatch still complete the snapshot.
    pub fn dispatch(&self, event: &InputEvent) {
        let kind = event.kind();
        for capture in [true, false] {
            let snapshot: SmallVec<[Listener; 2]> = self
                .listeners
                .borrow()
                .get(&(kind, capture))
                .cloned()
                .unwrap_or_default();
            for listener in snapshot {
                listener(event);
            }
        }
    }

    /// Number of listeners currently registered for `kind`, both phases.
    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        let listeners = self.listeners.borrow();
        [true, false]
            .iter()
            .filter_map(|capture| listeners.get(&(kind, *capture)))
            .map(SmallVec::len)
            .sum()
    }

    /// The current inline value of `property`, if one was assigned.
    #[must_use]
    pub fn style(&self, property: &str) -> Option<String> {
        self.styles.borrow().get(property).cloned()
    }
}

impl EventTarget for RefElement {
    fn add_listener(&self, kind: EventKind, listener: Listener, capture: bool) {
        self.listeners
            .borrow_mut()
            .entry((kind, capture))
            .or_default()
            .push(listener);
    }

    fn remove_listener(&self, kind: EventKind, listener: &Listener, capture: bool) {
        let mut listeners = self.listeners.borrow_mut();
        if let Some(list) = listeners.get_mut(&(kind, capture)) {
            if let Some(index) = list.iter().position(|l| Rc::ptr_eq(l, listener)) {
                list.remove(index);
            }
        }
    }
}

impl StyleAccess for RefElement {
    fn computed_style(&self, property: &str) -> Option<String> {
        self.style(property)
    }

    fn set_style(&self, property: &str, value: &str) {
        self.styles
            .borrow_mut()
            .insert(property.to_string(), value.to_string());
    }
}

/// An in-memory environment: a global dispatch surface, a touch capability
/// flag, and the set of style property names the environment "supports".
pub struct RefHost {
    global: Rc<RefElement>,
    touch_capable: bool,
    style_keys: HashSet<String>,
}

impl fmt::Debug for RefHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RefHost")
            .field("global", &self.global)
            .field("touch_capable", &self.touch_capable)
            .field("style_keys", &self.style_keys)
            .finish()
    }
}

impl Default for RefHost {
    fn default() -> Self {
        Self::new()
    }
}

impl RefHost {
    /// A mouse-only environment supporting the unprefixed `transform`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            global: Rc::new(RefElement::new()),
            touch_capable: false,
            style_keys: HashSet::from_iter(["transform".to_string()]),
        }
    }

    /// A touch-capable environment supporting the unprefixed `transform`.
    #[must_use]
    pub fn touch() -> Self {
        Self {
            touch_capable: true,
            ..Self::new()
        }
    }

    /// Replaces the set of supported style property names.
    pub fn set_style_keys<I, S>(&mut self, keys: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.style_keys = keys.into_iter().map(Into::into).collect();
    }

    /// The concrete global element, for dispatching global events in tests.
    #[must_use]
    pub fn global_element(&self) -> &Rc<RefElement> {
        &self.global
    }
}

impl Host for RefHost {
    fn global(&self) -> Rc<dyn EventTarget> {
        self.global.clone()
    }

    fn touch_capable(&self) -> bool {
        self.touch_capable
    }

    fn supports_style_property(&self, property: &str) -> bool {
        self.style_keys.contains(property)
    }
}
