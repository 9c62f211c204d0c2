// This file is part of the minifloat-codec project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Well-known formats
//!
//! All of them reserve the top exponent for infinities and NaNs like IEEE
//! 754.  Finite-only variants such as OCP `E4M3FN` are not expressible.

use crate::Format;

const fn preset(sign_bits: u32, exponent_bits: u32, significand_bits: u32, bias: Option<i32>) -> Format {
    match Format::checked(sign_bits, exponent_bits, significand_bits, bias) {
        Ok(format) => format,
        Err(_) => panic!("invalid preset format"),
    }
}

/// IEEE 754 single precision
pub const BINARY32: Format = preset(1, 8, 23, None);

/// IEEE 754 half precision
pub const BINARY16: Format = preset(1, 5, 10, None);

/// Brain floating point
pub const BFLOAT16: Format = preset(1, 8, 7, None);

/// AMD 24-bit float
pub const FP24: Format = preset(1, 7, 16, None);

pub const F8E3M4: Format = preset(1, 3, 4, None);
pub const F8E4M3: Format = preset(1, 4, 3, None);
pub const F8E4M3B11: Format = preset(1, 4, 3, Some(11));
pub const F8E5M2: Format = preset(1, 5, 2, None);

pub const F6E3M2: Format = preset(1, 3, 2, None);
pub const F6E2M3: Format = preset(1, 2, 3, None);
pub const F4E2M1: Format = preset(1, 2, 1, None);

/// Unsigned 8-bit float with 5 exponent bits
pub const UF8E5M3: Format = preset(0, 5, 3, None);
