// This file is part of the minifloat-codec project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Bit patterns tagged with their format

use crate::{codec, Format, RoundingMode};
use core::fmt;
use num_traits::ToPrimitive;

/// A minifloat: a bit pattern together with its [`Format`]
///
/// Equality is bitwise, so NaNs with the same pattern are equal and `+0`
/// differs from `-0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Value {
    bits: u32,
    format: Format,
}

impl Value {
    /// Wrap a raw pattern, dropping bits above the format width
    #[must_use]
    pub const fn from_bits(bits: u32, format: Format) -> Self {
        let bits = match format.bits() {
            32 => bits,
            n => bits & ((1 << n) - 1),
        };
        Self { bits, format }
    }

    /// Encode with the default rounding mode of `format`
    #[must_use]
    pub fn from_f64(x: f64, format: Format) -> Self {
        Self::from_f64_with(x, format, format.rounding())
    }

    /// Encode with an explicit rounding mode
    #[must_use]
    pub fn from_f64_with(x: f64, format: Format, rounding: RoundingMode) -> Self {
        Self {
            bits: codec::encode(x, &format, rounding),
            format,
        }
    }

    /// Encode any primitive number through [`f64`]
    ///
    /// Returns [`None`] if `x` has no [`f64`] approximation.  Integers wider
    /// than 53 bits are rounded twice.
    #[must_use]
    pub fn from_num<T: ToPrimitive>(x: T, format: Format) -> Option<Self> {
        x.to_f64().map(|x| Self::from_f64(x, format))
    }

    /// Raw bit pattern
    #[must_use]
    pub const fn to_bits(self) -> u32 {
        self.bits
    }

    /// Format of this value
    #[must_use]
    pub const fn format(self) -> Format {
        self.format
    }

    /// Exact value as [`f64`]
    #[must_use]
    pub fn to_f64(self) -> f64 {
        codec::decode(self.bits, &self.format)
    }

    const fn exponent(self) -> u32 {
        self.bits >> self.format.significand_bits() & self.format.max_exponent()
    }

    const fn mantissa(self) -> u32 {
        self.bits & ((1 << self.format.significand_bits()) - 1)
    }

    /// Check if the value is NaN
    #[must_use]
    pub const fn is_nan(self) -> bool {
        self.exponent() == self.format.max_exponent() && self.mantissa() != 0
    }

    /// Check if the value is positive or negative infinity
    #[must_use]
    pub const fn is_infinite(self) -> bool {
        self.exponent() == self.format.max_exponent() && self.mantissa() == 0
    }

    /// Check if the value is neither infinite nor NaN
    #[must_use]
    pub const fn is_finite(self) -> bool {
        self.exponent() != self.format.max_exponent()
    }

    /// Check if the value is positive or negative zero
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.exponent() == 0 && self.mantissa() == 0
    }

    /// Check if the sign bit is set
    #[must_use]
    pub const fn is_sign_negative(self) -> bool {
        self.format.is_signed() && self.bits >> (self.format.bits() - 1) != 0
    }
}

impl From<Value> for f64 {
    fn from(x: Value) -> Self {
        x.to_f64()
    }
}

impl ToPrimitive for Value {
    fn to_i64(&self) -> Option<i64> {
        Self::to_f64(*self).to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        Self::to_f64(*self).to_u64()
    }

    fn to_i128(&self) -> Option<i128> {
        Self::to_f64(*self).to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        Self::to_f64(*self).to_u128()
    }

    fn to_f32(&self) -> Option<f32> {
        Self::to_f64(*self).to_f32()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(Self::to_f64(*self))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Self::to_f64(*self), f)
    }
}
