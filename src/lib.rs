// This file is part of the minifloat-codec project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Convert [`f64`] to and from minifloats chosen at runtime
//!
//! A [`Format`] describes a layout by its sign, exponent and significand
//! widths plus an exponent bias.  [`encode`] rounds an [`f64`] to a bit
//! pattern of that layout with one of five [`RoundingMode`]s, and [`decode`]
//! turns a pattern back into the exact [`f64`] it stands for.
//!
//! ```
//! use minifloat_codec::{Format, RoundingMode};
//!
//! let e4m3 = Format::new(1, 4, 3)?;
//! assert_eq!(e4m3.to_bits(1.0), 0x38);
//! assert_eq!(e4m3.round(247.99), 240.0);
//! assert_eq!(e4m3.round(248.0), f64::INFINITY);
//! assert_eq!(e4m3.round_with(1e100, RoundingMode::Floor), 240.0);
//! assert_eq!(e4m3.label(), "1.4.3");
//! # Ok::<(), minifloat_codec::Error>(())
//! ```

mod codec;
mod config;
pub mod detail;
mod error;
mod format;
pub mod preset;
mod rounding;
mod test;
mod value;

pub use codec::{decode, encode};
pub use config::FormatConfig;
pub use error::{Error, InvalidFormat, Result};
pub use format::{default_bias, Format};
pub use rounding::RoundingMode;
pub use value::Value;
