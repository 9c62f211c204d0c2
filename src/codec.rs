// This file is part of the minifloat-codec project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Bit-level conversion between [`f64`] and minifloat patterns

use crate::detail::{self, EXPONENT_MASK, FRACTION_BITS, FRACTION_MASK, IMPLICIT_BIT, SIGN_MASK};
use crate::{Format, RoundingMode};

/// Encode `x` into the bit pattern of `format`
///
/// Only the low [`Format::bits`] bits of the result can be set.  This is a
/// total function:
///
/// - Every NaN maps to the all-ones pattern.  Payloads are not preserved.
/// - Values out of range round to a signed infinity, except that
///   [`Truncate`][RoundingMode::Truncate] and the directed mode pointing
///   toward zero saturate finite inputs at the largest finite magnitude.
/// - In an unsigned format, negative inputs become zero under
///   [`Truncate`][RoundingMode::Truncate] and
///   [`Ceiling`][RoundingMode::Ceiling], or when they round to zero anyway.
///   Otherwise they become NaN.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn encode(x: f64, format: &Format, rounding: RoundingMode) -> u32 {
    let (negative, exponent, fraction) = detail::decompose(x);

    if exponent == detail::MAX_EXPONENT && fraction != 0 {
        return format.nan_bits();
    }

    let finite = exponent < detail::MAX_EXPONENT;
    let (exponent, significand) = detail::normalize(exponent, fraction);
    let mut exponent = exponent + format.exponent_delta();

    let mut mantissa = if exponent > 0 {
        significand & FRACTION_MASK
    } else {
        // Below the normal range: shift into the subnormal position and keep
        // a sticky bit for whatever falls off.
        let shift = (1 - exponent).min(53) as u32;
        let dropped = significand & ((1 << shift) - 1);
        exponent = 0;
        significand >> shift | u64::from(dropped != 0)
    };

    let width = format.significand_bits();
    mantissa = rounding.round(mantissa, FRACTION_BITS - width, negative);

    if mantissa >> width != 0 {
        exponent += 1;
        mantissa = 0;
    }

    let max_exponent = format.max_exponent() as i32;

    if exponent >= max_exponent {
        if finite && rounding.is_toward_zero(negative) {
            exponent = max_exponent - 1;
            mantissa = (1 << width) - 1;
        } else {
            exponent = max_exponent;
            mantissa = 0;
        }
    }

    if negative && !format.is_signed() {
        let zero = exponent == 0 && mantissa == 0;
        return match rounding {
            RoundingMode::Truncate | RoundingMode::Ceiling => 0,
            _ if zero => 0,
            _ => format.nan_bits(),
        };
    }

    // Unsigned all the way: a signed intermediate would sign-extend into the
    // high bits of the pattern.
    let sign = u32::from(negative);
    let exponent = exponent as u32;
    (sign << format.exponent_bits() | exponent) << width | mantissa as u32
}

/// Decode a bit pattern of `format` into [`f64`]
///
/// Bits above [`Format::bits`] are ignored.  Decoding is exact since every
/// supported format is a subset of [`f64`].  NaN patterns decode to a NaN of
/// the same sign with an unspecified payload.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn decode(bits: u32, format: &Format) -> f64 {
    let size = format.bits();
    let bits = if size < 32 { bits & ((1 << size) - 1) } else { bits };
    let width = format.significand_bits();

    let sign = if format.is_signed() && bits >> (size - 1) != 0 {
        SIGN_MASK
    } else {
        0
    };

    let exponent = bits >> width & format.max_exponent();
    // Left-justified in 32 bits
    let fraction = u64::from(bits << (32 - width));

    if exponent == format.max_exponent() {
        return f64::from_bits(sign | EXPONENT_MASK | fraction << (FRACTION_BITS - 32));
    }

    let (exponent, fraction) = match (exponent, fraction) {
        (0, 0) => return f64::from_bits(sign),
        (0, _) => {
            // Subnormal in the format: promote to a normal exponent
            let zeros = fraction.leading_zeros() - 32;
            (-(zeros as i32), (fraction << (zeros + 1)) & 0xFFFF_FFFF)
        }
        _ => (exponent as i32, fraction),
    };

    let exponent = exponent - format.exponent_delta();
    let fraction = fraction << (FRACTION_BITS - 32);

    if exponent > 0 {
        f64::from_bits(sign | (exponent as u64) << FRACTION_BITS | fraction)
    } else {
        // Only reachable with a bias near 1023
        f64::from_bits(sign | (IMPLICIT_BIT | fraction) >> (1 - exponent))
    }
}
