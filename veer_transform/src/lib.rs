// Copyright 2026 the Veer Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Veer Transform: the `matrix(a,b,c,d,tx,ty)` codec.
//!
//! A surface element's 2-D affine transform is stored by the host as a CSS
//! matrix string. This crate converts between that string form and
//! [`kurbo::Affine`], whose coefficient order `[a, b, c, d, tx, ty]` is
//! exactly the `matrix()` convention: `a`/`d` are the horizontal/vertical
//! scale, `b`/`c` the skew, `tx`/`ty` the translation.
//!
//! Decoding is total by design. An empty or `none` value reads as
//! [`Affine::IDENTITY`], and malformed or missing components degrade to
//! `NaN` coefficients rather than an error — `NaN` then flows through
//! arithmetic and is serialized back verbatim, which is the documented
//! silent-degradation contract for hosts that hand back garbage.
//!
//! [`transform_property`] resolves the name the transform is stored under
//! (vendor prefixes included); [`read_transform`]/[`write_transform`] go
//! through the `veer_surface` style traits with a resolved name.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Affine;
//! use veer_transform::{format_matrix, parse_matrix};
//!
//! let parsed = parse_matrix("matrix(3.5, 0, 0, 3.5, -60, -49)");
//! assert_eq!(parsed.as_coeffs(), [3.5, 0.0, 0.0, 3.5, -60.0, -49.0]);
//!
//! assert_eq!(parse_matrix("none"), Affine::IDENTITY);
//! assert_eq!(format_matrix(parsed), "matrix(3.5,0,0,3.5,-60,-49)");
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::String;

use kurbo::Affine;
use veer_surface::StyleAccess;

/// The unprefixed name of the transform style property.
pub const TRANSFORM: &str = "transform";

/// Resolves the environment's name for [`TRANSFORM`].
///
/// `supports` is the environment's key-existence probe, typically
/// `Host::supports_style_property`. Callers resolve once and reuse the
/// returned name for every subsequent read and write.
pub fn transform_property<F>(supports: F) -> String
where
    F: Fn(&str) -> bool,
{
    veer_style::resolve_property(TRANSFORM, supports)
}

/// Decodes a `matrix(a,b,c,d,tx,ty)` string.
///
/// An empty value or the literal `none` decodes to [`Affine::IDENTITY`].
/// Anything else is stripped of the `matrix` keyword, parentheses, and
/// whitespace, then split on commas; each of the six coefficients parses
/// independently, with malformed or missing components becoming `NaN` and
/// surplus components ignored.
#[must_use]
pub fn parse_matrix(value: &str) -> Affine {
    if value.is_empty() || value == "none" {
        return Affine::IDENTITY;
    }
    let mut stripped = String::with_capacity(value.len());
    for c in value.chars() {
        if !c.is_whitespace() && c != '(' && c != ')' {
            stripped.push(c);
        }
    }
    let stripped = stripped.replace("matrix", "");

    let mut coeffs = [f64::NAN; 6];
    for (slot, component) in coeffs.iter_mut().zip(stripped.split(',')) {
        *slot = component.parse().unwrap_or(f64::NAN);
    }
    Affine::new(coeffs)
}

/// Encodes a transform as `matrix(a,b,c,d,tx,ty)`.
///
/// Coefficients use plain `f64` formatting, so whatever [`parse_matrix`]
/// decoded round-trips numerically.
#[must_use]
pub fn format_matrix(transform: Affine) -> String {
    let [a, b, c, d, tx, ty] = transform.as_coeffs();
    format!("matrix({a},{b},{c},{d},{tx},{ty})")
}

/// Reads an element's current transform through its computed style.
///
/// A host that knows no value for `property` at all reads as the identity,
/// the same as an explicit `none`.
pub fn read_transform<E>(element: &E, property: &str) -> Affine
where
    E: StyleAccess + ?Sized,
{
    match element.computed_style(property) {
        Some(value) => parse_matrix(&value),
        None => Affine::IDENTITY,
    }
}

/// Writes `transform` to the element's style at `property`.
pub fn write_transform<E>(element: &E, property: &str, transform: Affine)
where
    E: StyleAccess + ?Sized,
{
    element.set_style(property, &format_matrix(transform));
}
