// This file is part of the minifloat-codec project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Implementation details
//!
//! Bit layout of the native [`f64`].  This module is not considered part of
//! the public API.

/// Sign bit of [`f64`]
pub const SIGN_MASK: u64 = 1 << 63;

/// Exponent field of [`f64`]
pub const EXPONENT_MASK: u64 = 0x7FF << 52;

/// Explicit significand field of [`f64`]
pub const FRACTION_MASK: u64 = (1 << 52) - 1;

/// Implicit leading bit of a normal [`f64`]
pub const IMPLICIT_BIT: u64 = 1 << 52;

/// Exponent bias of [`f64`]
pub const BIAS: i32 = 1023;

/// Biased exponent reserved for infinities and NaNs
pub const MAX_EXPONENT: i32 = 0x7FF;

/// Width of the explicit significand of [`f64`]
pub const FRACTION_BITS: u32 = 52;

/// Split `x` into sign, biased exponent and explicit significand
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub const fn decompose(x: f64) -> (bool, i32, u64) {
    let bits = x.to_bits();
    let exponent = ((bits & EXPONENT_MASK) >> FRACTION_BITS) as i32;
    (bits & SIGN_MASK != 0, exponent, bits & FRACTION_MASK)
}

/// Normalized significand of a finite `x` with its implicit bit made explicit
///
/// Returns `(exponent, significand)` such that `|x|` equals
/// `significand × 2^(exponent − 1075)`.  Subnormals are shifted up until
/// bit 52 is set, leaving `exponent` at or below zero.  Zero yields a zero
/// significand.
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn normalize(exponent: i32, fraction: u64) -> (i32, u64) {
    match (exponent, fraction) {
        (0, 0) => (0, 0),
        (0, _) => {
            let shift = fraction.leading_zeros() - (63 - FRACTION_BITS);
            (1 - shift as i32, fraction << shift)
        }
        _ => (exponent, fraction | IMPLICIT_BIT),
    }
}
