// This file is part of the minifloat-codec project.
//
// Copyright (C) 2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Format 1.8.23 must behave exactly like `f32`

use minifloat_codec::preset::BINARY32;
use minifloat_codec::{decode, encode, Format, RoundingMode};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1 << 14))]

    #[test]
    fn round_trips_f32_bits(bits in any::<u32>()) {
        let x = f32::from_bits(bits);
        prop_assume!(!x.is_nan());

        prop_assert_eq!(decode(bits, &BINARY32).to_bits(), f64::from(x).to_bits());
        prop_assert_eq!(encode(f64::from(x), &BINARY32, RoundingMode::NearestEven), bits);
    }

    #[test]
    fn rounds_like_f32(bits in any::<u64>()) {
        let x = f64::from_bits(bits);
        prop_assume!(!x.is_nan());

        #[allow(clippy::cast_possible_truncation)]
        let expected = f64::from(x as f32);
        prop_assert_eq!(BINARY32.round(x).to_bits(), expected.to_bits());
    }

    #[test]
    fn directed_modes_bracket(x in -1e40_f64..1e40) {
        let floor = BINARY32.round_with(x, RoundingMode::Floor);
        let ceiling = BINARY32.round_with(x, RoundingMode::Ceiling);
        let truncate = BINARY32.round_with(x, RoundingMode::Truncate);

        prop_assert!(floor <= x && x <= ceiling);
        prop_assert!(truncate.abs() <= x.abs());
        prop_assert!(truncate == floor || truncate == ceiling);
    }
}

#[test]
fn rounds_f32_edge_cases() {
    let format = Format::new(1, 8, 23).unwrap();
    let half_min = f64::from(f32::from_bits(1)) / 2.0;

    for x in [
        half_min,
        half_min * 1.000_001,
        f64::from(f32::MAX) * (1.0 + f64::from(f32::EPSILON) / 4.0),
        f64::from(f32::MAX) * (1.0 + f64::from(f32::EPSILON) / 2.0),
        f64::from(f32::MIN_POSITIVE) * 0.999_999_99,
        f64::MIN_POSITIVE,
        f64::from_bits(1),
        -f64::from_bits(1),
        f64::MAX,
    ] {
        assert_eq!(format.round(x).to_bits(), f64::from(x as f32).to_bits(), "{x:e}");
    }
}
