// This file is part of the minifloat-codec project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Serializable description of a [`Format`]
//!
//! [`Format`] (de)serializes through [`FormatConfig`], so a format can live
//! in any serde-backed configuration file:
//!
//! ```
//! use minifloat_codec::{Format, RoundingMode};
//!
//! let json = r#"{ "exponent_bits": 4, "significand_bits": 3, "rounding": "floor" }"#;
//! let format: Format = serde_json::from_str(json).unwrap();
//! assert_eq!(format.label(), "1.4.3");
//! assert_eq!(format.rounding(), RoundingMode::Floor);
//! ```

use crate::{Error, Format, RoundingMode};
use serde::{Deserialize, Serialize};

const fn signed() -> u32 {
    1
}

/// Plain parameters of a [`Format`], not yet validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    /// 0 or 1, defaults to 1
    #[serde(default = "signed")]
    pub sign_bits: u32,

    /// 1 to 8
    pub exponent_bits: u32,

    /// 1 to 23
    pub significand_bits: u32,

    /// Defaults to 2<sup>E−1</sup> − 1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exponent_bias: Option<i32>,

    /// Default rounding mode of the format
    #[serde(default)]
    pub rounding: RoundingMode,
}

impl TryFrom<FormatConfig> for Format {
    type Error = Error;

    fn try_from(config: FormatConfig) -> Result<Self, Error> {
        tracing::debug!(?config, "loading minifloat format");

        Self::with_options(
            config.sign_bits,
            config.exponent_bits,
            config.significand_bits,
            config.exponent_bias,
            config.rounding,
        )
    }
}

impl From<Format> for FormatConfig {
    fn from(format: Format) -> Self {
        Self {
            sign_bits: format.sign_bits(),
            exponent_bits: format.exponent_bits(),
            significand_bits: format.significand_bits(),
            exponent_bias: (!format.has_default_bias()).then(|| format.exponent_bias()),
            rounding: format.rounding(),
        }
    }
}
