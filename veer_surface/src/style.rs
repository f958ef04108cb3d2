// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style access as a flat property-name → string mapping.

use alloc::string::String;

use crate::target::EventTarget;

/// Read/write access to an element's style.
///
/// The core treats style as a flat mapping from property name to string
/// value; cascading, units, and shorthand expansion are the host's
/// concern.
pub trait StyleAccess {
    /// The resolved (computed) value of `property`, if the host knows one.
    fn computed_style(&self, property: &str) -> Option<String>;

    /// Assigns `value` to `property` on the element's inline style.
    ///
    /// Hosts silently ignore properties they do not understand; the
    /// vendor-prefix resolver's unprefixed fallback relies on that.
    fn set_style(&self, property: &str, value: &str);
}

/// A visual surface element: an event target with styleable presentation.
pub trait Element: EventTarget + StyleAccess {}

impl<T: EventTarget + StyleAccess> Element for T {}
