// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Veer Style: vendor-prefix style property name resolution.
//!
//! Some environments expose a style property only under a vendor-prefixed
//! name (`webkitTransform` rather than `transform`). [`resolve_property`]
//! maps an unprefixed property name to whatever name the environment
//! actually supports, probing a caller-supplied key-existence predicate —
//! typically `Host::supports_style_property` from `veer_surface`.
//!
//! Resolution is pure and never fails: if neither the unprefixed name nor
//! any prefixed candidate is supported, the unprefixed name is returned
//! unchanged and failure is deferred to the style collaborator, which
//! ignores unknown properties.
//!
//! ## Minimal example
//!
//! ```
//! use veer_style::resolve_property;
//!
//! // An environment that only knows the webkit-prefixed spelling.
//! let supports = |name: &str| name == "webkitTransform";
//!
//! assert_eq!(resolve_property("transform", supports), "webkitTransform");
//! assert_eq!(resolve_property("opacity", supports), "opacity");
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

use alloc::string::String;

/// Vendor prefixes taken into consideration, in probe order.
pub const VENDOR_PREFIXES: &[&str] = &["webkit", "ms", "moz", "o"];

/// Resolves `property` to the name the environment supports.
///
/// If `supports(property)` holds, the name is returned unchanged.
/// Otherwise each entry of [`VENDOR_PREFIXES`] is tried in order as
/// `prefix + Capitalized(property)` (`webkit` + `transform` →
/// `webkitTransform`) and the first supported candidate wins. When nothing
/// matches, the original unprefixed name is returned.
pub fn resolve_property<F>(property: &str, supports: F) -> String
where
    F: Fn(&str) -> bool,
{
    if !supports(property) {
        for prefix in VENDOR_PREFIXES {
            let candidate = prefixed(prefix, property);
            if supports(&candidate) {
                return candidate;
            }
        }
    }
    String::from(property)
}

/// `prefix` + `property` with the property's first character uppercased.
fn prefixed(prefix: &str, property: &str) -> String {
    let mut out = String::with_capacity(prefix.len() + property.len());
    out.push_str(prefix);
    let mut chars = property.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    #[test]
    fn supported_name_is_returned_unchanged() {
        let resolved = resolve_property("transform", |name| name == "transform");
        assert_eq!(resolved, "transform");
    }

    #[test]
    fn first_supported_prefix_wins() {
        let resolved = resolve_property("transform", |name| {
            name == "mozTransform" || name == "oTransform"
        });
        assert_eq!(resolved, "mozTransform");
    }

    #[test]
    fn probe_order_matches_the_vendor_list() {
        let probed = RefCell::new(Vec::new());
        let resolved = resolve_property("transform", |name| {
            probed.borrow_mut().push(String::from(name));
            false
        });

        assert_eq!(resolved, "transform");
        assert_eq!(
            probed.into_inner(),
            [
                "transform",
                "webkitTransform",
                "msTransform",
                "mozTransform",
                "oTransform",
            ]
        );
    }

    #[test]
    fn unsupported_name_falls_back_unprefixed() {
        let resolved = resolve_property("transform", |_| false);
        assert_eq!(resolved, "transform");
    }

    #[test]
    fn supported_name_short_circuits_prefix_probing() {
        let probes = RefCell::new(0);
        resolve_property("transform", |_| {
            *probes.borrow_mut() += 1;
            true
        });
        assert_eq!(*probes.borrow(), 1);
    }

    #[test]
    fn capitalization_only_touches_the_first_character() {
        let resolved =
            resolve_property("transformOrigin", |name| name == "webkitTransformOrigin");
        assert_eq!(resolved, "webkitTransformOrigin");
    }

    #[test]
    fn empty_property_name_degrades_to_bare_prefixes() {
        let probed = RefCell::new(Vec::new());
        let resolved = resolve_property("", |name| {
            probed.borrow_mut().push(String::from(name));
            false
        });

        assert_eq!(resolved, "");
        assert_eq!(probed.into_inner(), ["", "webkit", "ms", "moz", "o"]);
    }
}
