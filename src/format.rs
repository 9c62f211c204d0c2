// This file is part of the minifloat-codec project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Runtime description of a minifloat layout

use crate::config::FormatConfig;
use crate::{codec, detail, Error, InvalidFormat, Result, RoundingMode};
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Layout of a minifloat
///
/// A format has an optional sign bit, 1 to 8 exponent bits and 1 to 23
/// explicit significand bits, at most 32 bits in total.  The top exponent is
/// reserved for infinities and NaNs as in IEEE 754.  The exponent bias
/// defaults to 2<sup>E−1</sup> − 1 but can be any value that keeps every
/// finite value within the normal or subnormal range of [`f64`].
///
/// A format is immutable once built and cheap to copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FormatConfig", into = "FormatConfig")]
pub struct Format {
    sign_bits: u32,
    exponent_bits: u32,
    significand_bits: u32,
    exponent_delta: i32,
    max_exponent: u32,
    total_bits: u32,
    rounding: RoundingMode,
}

const fn invalid(parameter: &'static str, value: i64, reason: &'static str) -> InvalidFormat {
    InvalidFormat {
        parameter,
        value,
        reason,
    }
}

/// Default exponent bias for `exponent_bits` bits, or 0 if out of range
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn default_bias(exponent_bits: u32) -> i32 {
    match exponent_bits {
        1..=8 => (1 << (exponent_bits - 1)) - 1,
        _ => 0,
    }
}

impl Format {
    /// Format with the default bias and nearest-even rounding
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFormat`] if a width is out of range.
    pub fn new(sign_bits: u32, exponent_bits: u32, significand_bits: u32) -> Result<Self> {
        Self::with_options(sign_bits, exponent_bits, significand_bits, None, RoundingMode::default())
    }

    /// Format with an explicit exponent bias
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFormat`] if a width is out of range or the bias would
    /// push finite values outside the range of [`f64`].
    pub fn with_bias(
        sign_bits: u32,
        exponent_bits: u32,
        significand_bits: u32,
        exponent_bias: i32,
    ) -> Result<Self> {
        Self::with_options(
            sign_bits,
            exponent_bits,
            significand_bits,
            Some(exponent_bias),
            RoundingMode::default(),
        )
    }

    /// Format with every parameter spelled out
    ///
    /// # Errors
    ///
    /// See [`Format::with_bias`].
    pub fn with_options(
        sign_bits: u32,
        exponent_bits: u32,
        significand_bits: u32,
        exponent_bias: Option<i32>,
        rounding: RoundingMode,
    ) -> Result<Self> {
        match Self::checked(sign_bits, exponent_bits, significand_bits, exponent_bias) {
            Ok(format) => {
                let format = format.with_rounding(rounding);
                tracing::debug!(label = %format, %rounding, "built minifloat format");
                Ok(format)
            }
            Err(error) => {
                tracing::debug!(%error, "rejected minifloat format");
                Err(error.into())
            }
        }
    }

    /// Validate parameters, usable in `const` context
    ///
    /// This is the `const` core of [`Format::with_options`] and does not log.
    ///
    /// # Errors
    ///
    /// [`InvalidFormat`] naming the first offending parameter.
    pub const fn checked(
        sign_bits: u32,
        exponent_bits: u32,
        significand_bits: u32,
        exponent_bias: Option<i32>,
    ) -> Result<Self, InvalidFormat> {
        if sign_bits > 1 {
            return Err(invalid("sign bits", sign_bits as i64, "must be 0 or 1"));
        }
        if exponent_bits < 1 {
            return Err(invalid("exponent bits", exponent_bits as i64, "must be at least 1"));
        }
        if exponent_bits > 8 {
            return Err(invalid("exponent bits", exponent_bits as i64, "must be at most 8"));
        }
        if significand_bits < 1 {
            return Err(invalid("significand bits", significand_bits as i64, "must be at least 1"));
        }
        if significand_bits > 23 {
            return Err(invalid("significand bits", significand_bits as i64, "must be at most 23"));
        }

        let bias = match exponent_bias {
            Some(bias) => bias,
            None => default_bias(exponent_bits),
        };

        // Smallest and largest exponents must stay within f64
        if bias > detail::BIAS {
            return Err(invalid("exponent bias", bias as i64, "too positive, must be at most 1023"));
        }
        if (1_i64 << exponent_bits) - bias as i64 > detail::BIAS as i64 + 1 {
            return Err(invalid("exponent bias", bias as i64, "too negative for the exponent width"));
        }

        let total_bits = sign_bits + exponent_bits + significand_bits;

        if total_bits > 32 {
            return Err(invalid("total bits", total_bits as i64, "must be at most 32"));
        }

        Ok(Self {
            sign_bits,
            exponent_bits,
            significand_bits,
            exponent_delta: bias - detail::BIAS,
            max_exponent: (1 << exponent_bits) - 1,
            total_bits,
            rounding: RoundingMode::NearestEven,
        })
    }

    /// The same layout with a different default rounding mode
    #[must_use]
    pub const fn with_rounding(self, rounding: RoundingMode) -> Self {
        Self { rounding, ..self }
    }

    /// Number of sign bits, 0 or 1
    #[must_use]
    pub const fn sign_bits(&self) -> u32 {
        self.sign_bits
    }

    /// Width of the exponent field
    #[must_use]
    pub const fn exponent_bits(&self) -> u32 {
        self.exponent_bits
    }

    /// Width of the explicit significand field
    #[must_use]
    pub const fn significand_bits(&self) -> u32 {
        self.significand_bits
    }

    /// Exponent bias
    #[must_use]
    pub const fn exponent_bias(&self) -> i32 {
        self.exponent_delta + detail::BIAS
    }

    /// Difference between this bias and the bias of [`f64`]
    #[must_use]
    pub const fn exponent_delta(&self) -> i32 {
        self.exponent_delta
    }

    /// Exponent field value reserved for infinities and NaNs
    #[must_use]
    pub const fn max_exponent(&self) -> u32 {
        self.max_exponent
    }

    /// Default rounding mode of [`Format::to_bits`] and [`Format::round`]
    #[must_use]
    pub const fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Whether the format has a sign bit
    #[must_use]
    pub const fn is_signed(&self) -> bool {
        self.sign_bits != 0
    }

    /// Total width in bits
    #[must_use]
    pub const fn bits(&self) -> u32 {
        self.total_bits
    }

    /// Number of distinct bit patterns
    #[must_use]
    pub const fn cardinality(&self) -> u64 {
        1 << self.total_bits
    }

    /// The all-ones pattern, which is a NaN
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn nan_bits(&self) -> u32 {
        (self.cardinality() - 1) as u32
    }

    /// Pattern of positive infinity
    #[must_use]
    pub const fn infinity_bits(&self) -> u32 {
        self.max_exponent << self.significand_bits
    }

    /// Whether the bias is the default one for this exponent width
    #[must_use]
    pub const fn has_default_bias(&self) -> bool {
        self.exponent_bias() == default_bias(self.exponent_bits)
    }

    /// Encode `x` with the default rounding mode
    #[must_use]
    pub fn to_bits(&self, x: f64) -> u32 {
        codec::encode(x, self, self.rounding)
    }

    /// Encode `x` with the given rounding mode
    #[must_use]
    pub fn to_bits_with(&self, x: f64, rounding: RoundingMode) -> u32 {
        codec::encode(x, self, rounding)
    }

    /// Decode a bit pattern
    #[must_use]
    pub fn from_bits(&self, bits: u32) -> f64 {
        codec::decode(bits, self)
    }

    /// Round `x` to the nearest value of this format in the default mode
    #[must_use]
    pub fn round(&self, x: f64) -> f64 {
        self.from_bits(self.to_bits(x))
    }

    /// Round `x` to a value of this format in the given mode
    #[must_use]
    pub fn round_with(&self, x: f64, rounding: RoundingMode) -> f64 {
        self.from_bits(self.to_bits_with(x, rounding))
    }

    /// Largest finite value
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.from_bits(self.to_bits(f64::INFINITY) - 1)
    }

    /// Smallest positive value, usually subnormal
    #[must_use]
    pub fn min_value(&self) -> f64 {
        self.from_bits(1)
    }

    /// Gap between 1 and the next larger value
    ///
    /// If 1 is out of range, this is the gap below the largest finite value.
    /// If 1 rounds down, this is the gap above zero.  If 1 rounds up to the
    /// smallest positive value, the step back saturates at zero and the
    /// result is that smallest value.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        let mut bits = self.to_bits(1.0);
        let mut one = self.from_bits(bits);

        if one > 1.0 {
            bits = bits.saturating_sub(2);
            one = self.from_bits(bits);
        } else if one < 1.0 {
            bits = 0;
            one = 0.0;
        }

        self.from_bits(bits + 1) - one
    }

    /// Label of the form `s.e.m`, with `.bias` appended if not the default
    ///
    /// This is the same as the [`Display`][fmt::Display] output.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.sign_bits, self.exponent_bits, self.significand_bits)?;

        if !self.has_default_bias() {
            write!(f, ".{}", self.exponent_bias())?;
        }
        Ok(())
    }
}

impl FromStr for Format {
    type Err = Error;

    /// Parse a label like `1.4.3` or `1.4.3.-2`
    fn from_str(s: &str) -> Result<Self> {
        let malformed = || Error::MalformedLabel(s.to_owned());
        let mut fields = s.trim().split('.');

        let mut width = || -> Result<u32> {
            fields.next().and_then(|x| x.parse().ok()).ok_or_else(malformed)
        };
        let sign_bits = width()?;
        let exponent_bits = width()?;
        let significand_bits = width()?;

        let exponent_bias = match fields.next() {
            None => None,
            Some(bias) => Some(bias.parse().map_err(|_| malformed())?),
        };

        if fields.next().is_some() {
            tracing::debug!(label = s, "trailing fields in format label");
            return Err(malformed());
        }

        Self::with_options(
            sign_bits,
            exponent_bits,
            significand_bits,
            exponent_bias,
            RoundingMode::default(),
        )
    }
}
