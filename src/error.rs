// This file is part of the minifloat-codec project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error types

use thiserror::Error;

/// A layout parameter is out of range
///
/// This is a plain `Copy` type so that [`Format::checked`][crate::Format::checked]
/// can stay `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid {parameter}: {reason}, got {value}")]
pub struct InvalidFormat {
    /// Name of the offending parameter
    pub parameter: &'static str,
    /// The rejected value
    pub value: i64,
    /// Constraint that was violated
    pub reason: &'static str,
}

/// Errors raised while describing a format
///
/// Encoding and decoding never fail.  Every error comes from building a
/// [`Format`][crate::Format] or parsing one of its textual forms.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// See [`InvalidFormat`]
    #[error(transparent)]
    InvalidFormat(#[from] InvalidFormat),

    /// Numeric rounding mode outside `0..=4`
    #[error("unknown rounding mode: {0}")]
    UnknownRoundingMode(u8),

    /// Rounding mode name not recognized
    #[error("unknown rounding mode: {0:?}")]
    UnknownRoundingName(String),

    /// Format label not of the form `s.e.m` or `s.e.m.bias`
    #[error("malformed format label: {0:?}")]
    MalformedLabel(String),
}

/// Result type of this crate
pub type Result<T, E = Error> = core::result::Result<T, E>;
