// This file is part of the minifloat-codec project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Rounding modes for encoding
//!
//! | Value | Mode          | Direction                       |
//! |-------|---------------|---------------------------------|
//! | 0     | `NearestEven` | Nearest, ties to even           |
//! | 1     | `NearestAway` | Nearest, ties away from zero    |
//! | 2     | `Truncate`    | Toward zero                     |
//! | 3     | `Ceiling`     | Toward +∞                       |
//! | 4     | `Floor`       | Toward −∞                       |

use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Rounding mode used when a value is not exactly representable
///
/// The discriminants are stable and match the numeric codes other tools use
/// for these modes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to nearest, ties to even (IEEE 754 default)
    #[default]
    NearestEven = 0,
    /// Round to nearest, ties away from zero
    NearestAway = 1,
    /// Round toward zero
    Truncate = 2,
    /// Round toward positive infinity
    Ceiling = 3,
    /// Round toward negative infinity
    Floor = 4,
}

impl RoundingMode {
    /// Every mode in discriminant order
    pub const ALL: [Self; 5] = [
        Self::NearestEven,
        Self::NearestAway,
        Self::Truncate,
        Self::Ceiling,
        Self::Floor,
    ];

    /// Kebab-case name, also used by [`Display`][fmt::Display] and serde
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NearestEven => "nearest-even",
            Self::NearestAway => "nearest-away",
            Self::Truncate => "truncate",
            Self::Ceiling => "ceiling",
            Self::Floor => "floor",
        }
    }

    /// Whether this mode rounds toward zero for a value of the given sign
    ///
    /// These modes must not turn a finite overflow into an infinity.
    #[must_use]
    pub const fn is_toward_zero(self, negative: bool) -> bool {
        match self {
            Self::Truncate => true,
            Self::Ceiling => negative,
            Self::Floor => !negative,
            Self::NearestEven | Self::NearestAway => false,
        }
    }

    /// Drop the low `shift` bits of a magnitude `mantissa`
    ///
    /// `negative` is the sign of the value being rounded.  The result may
    /// carry one bit past the retained width, which the caller folds into the
    /// exponent.  `shift` must be in `1..64`.
    #[must_use]
    pub const fn round(self, mantissa: u64, shift: u32, negative: bool) -> u64 {
        match self {
            Self::NearestEven => nearest_even(mantissa, shift),
            Self::NearestAway => nearest_away(mantissa, shift),
            Self::Truncate => truncate(mantissa, shift),
            Self::Ceiling => ceiling(mantissa, shift, negative),
            Self::Floor => floor(mantissa, shift, negative),
        }
    }
}

const fn nearest_even(mantissa: u64, shift: u32) -> u64 {
    let zeros = mantissa.trailing_zeros();
    let half = mantissa >> (shift - 1);
    let above_half = zeros < shift - 1;
    let odd = half & 2 != 0;
    (half >> 1) + (half & 1 != 0 && (above_half || odd)) as u64
}

const fn nearest_away(mantissa: u64, shift: u32) -> u64 {
    let half = mantissa >> (shift - 1);
    (half >> 1) + (half & 1)
}

const fn truncate(mantissa: u64, shift: u32) -> u64 {
    mantissa >> shift
}

const fn ceiling(mantissa: u64, shift: u32, negative: bool) -> u64 {
    let inexact = mantissa.trailing_zeros() < shift;
    (mantissa >> shift) + (!negative && inexact) as u64
}

const fn floor(mantissa: u64, shift: u32, negative: bool) -> u64 {
    let inexact = mantissa.trailing_zeros() < shift;
    (mantissa >> shift) + (negative && inexact) as u64
}

impl From<RoundingMode> for u8 {
    fn from(mode: RoundingMode) -> Self {
        mode as Self
    }
}

impl TryFrom<u8> for RoundingMode {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(Error::UnknownRoundingMode(code))
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RoundingMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownRoundingName(s.to_owned()))
    }
}
