// This file is part of the minifloat-codec project.
//
// Copyright (C) 2024-2025 Chen-Pang He <jdh8@skymizer.com>
//
// This Source Code Form is subject to the terms of the Mozilla
// Public License v. 2.0. If a copy of the MPL was not distributed
// with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
#![cfg(test)]
#![allow(clippy::float_cmp)]

use crate::{Error, Format, InvalidFormat, RoundingMode};

fn test_finite_bits(e: u32, m: u32, x: f64, bits: u32) {
    let format = Format::new(1, e, m).unwrap();
    assert_eq!(format.to_bits(x), bits);
    assert_eq!(format.from_bits(bits), x);

    for mode in RoundingMode::ALL {
        assert_eq!(format.to_bits_with(x, mode), bits);
    }
}

#[test]
#[allow(clippy::unusual_byte_groupings)]
fn test_finite_bits_f8() {
    test_finite_bits(3, 4, 2.0, 0x40);
    test_finite_bits(4, 3, 2.0, 0x40);
    test_finite_bits(5, 2, 2.0, 0x40);
    test_finite_bits(5, 7, 2.0, 0b0_10000_0000000);

    test_finite_bits(3, 4, 1.0, 0b0_011_0000);
    test_finite_bits(4, 3, 1.0, 0b0_0111_000);
    test_finite_bits(5, 2, 1.0, 0b0_01111_00);
    test_finite_bits(5, 7, 1.0, 0b0_01111_0000000);

    test_finite_bits(3, 4, -1.25, 0b1_011_0100);
    test_finite_bits(4, 3, -1.25, 0b1_0111_010);
    test_finite_bits(5, 2, -1.25, 0b1_01111_01);
    test_finite_bits(5, 7, -1.25, 0b1_01111_0100000);
}

#[test]
fn test_validation() {
    let error = |parameter: &'static str, value: i64| -> crate::Result<Format> {
        Err(Error::InvalidFormat(InvalidFormat {
            parameter,
            value,
            reason: match parameter {
                "sign bits" => "must be 0 or 1",
                "exponent bits" if value < 1 => "must be at least 1",
                "exponent bits" => "must be at most 8",
                "significand bits" if value < 1 => "must be at least 1",
                "significand bits" => "must be at most 23",
                _ => unreachable!(),
            },
        }))
    };

    assert_eq!(Format::new(2, 4, 3), error("sign bits", 2));
    assert_eq!(Format::new(1, 0, 3), error("exponent bits", 0));
    assert_eq!(Format::new(1, 9, 3), error("exponent bits", 9));
    assert_eq!(Format::new(1, 4, 0), error("significand bits", 0));
    assert_eq!(Format::new(1, 4, 24), error("significand bits", 24));

    assert!(Format::new(0, 8, 23).is_ok());
    assert!(Format::new(1, 8, 23).is_ok());
    assert!(Format::new(1, 1, 1).is_ok());
}

#[test]
fn test_bias_range() {
    assert!(Format::with_bias(1, 4, 3, 1023).is_ok());
    assert!(Format::with_bias(1, 8, 3, -768).is_ok());

    let Err(Error::InvalidFormat(error)) = Format::with_bias(1, 4, 3, 1024) else {
        panic!("bias 1024 accepted");
    };
    assert_eq!(error.parameter, "exponent bias");
    assert_eq!(error.value, 1024);

    let Err(Error::InvalidFormat(error)) = Format::with_bias(1, 8, 3, -769) else {
        panic!("bias -769 accepted");
    };
    assert_eq!(error.parameter, "exponent bias");
    assert_eq!(error.value, -769);

    assert!(Format::with_bias(1, 4, 3, i32::MIN).is_err());
    assert!(Format::with_bias(1, 4, 3, i32::MAX).is_err());
}

#[test]
fn test_error_messages() {
    let error = Format::new(1, 9, 3).unwrap_err();
    assert_eq!(error.to_string(), "invalid exponent bits: must be at most 8, got 9");

    let error = Format::with_bias(1, 4, 3, 2000).unwrap_err();
    assert_eq!(
        error.to_string(),
        "invalid exponent bias: too positive, must be at most 1023, got 2000"
    );
}

#[test]
fn test_derived_fields() {
    let format = Format::with_bias(1, 4, 3, -2).unwrap();
    assert_eq!(format.exponent_bias(), -2);
    assert_eq!(format.exponent_delta(), -1025);
    assert_eq!(format.max_exponent(), 15);
    assert_eq!(format.bits(), 8);
    assert_eq!(format.cardinality(), 256);
    assert_eq!(format.nan_bits(), 0xFF);
    assert_eq!(format.infinity_bits(), 0x78);
    assert_eq!(format.rounding(), RoundingMode::NearestEven);

    let format = Format::new(1, 8, 23).unwrap();
    assert_eq!(format.cardinality(), 1 << 32);
    assert_eq!(format.nan_bits(), u32::MAX);

    let format = Format::new(0, 1, 1).unwrap();
    assert_eq!(format.exponent_bias(), 0);
    assert_eq!(format.nan_bits(), 0b11);
    assert_eq!(format.infinity_bits(), 0b10);
}

#[test]
fn test_default_rounding() {
    let format = Format::new(1, 4, 3).unwrap().with_rounding(RoundingMode::Floor);
    assert_eq!(format.rounding(), RoundingMode::Floor);
    assert_eq!(format.round(1e100), 240.0);
    assert_eq!(format.round_with(1e100, RoundingMode::NearestEven), f64::INFINITY);

    let format = Format::with_options(0, 1, 1, None, RoundingMode::Truncate).unwrap();
    assert_eq!(format.round(-100.0), 0.0);
    assert_eq!(format.round(1.9), 1.0);
}

#[test]
fn test_labels() {
    for label in ["1.4.3", "1.4.3.-2", "1.4.3.15", "0.1.1", "0.5.5", "1.8.23", "1.4.3.1023"] {
        let format: Format = label.parse().unwrap();
        assert_eq!(format.label(), label);
    }

    assert_eq!(" 1.5.10 ".parse::<Format>(), Format::new(1, 5, 10));
    assert_eq!("1.4.3.7".parse::<Format>().unwrap().label(), "1.4.3");

    for label in ["", "1.4", "1.4.x", "1.4.3.", "1.4.3.2.1", "-1.4.3"] {
        assert_eq!(
            label.parse::<Format>(),
            Err(Error::MalformedLabel(label.to_owned())),
            "{label:?}"
        );
    }

    assert!(matches!("1.9.3".parse::<Format>(), Err(Error::InvalidFormat(_))));
}

#[test]
fn test_default_bias() {
    assert_eq!(crate::default_bias(1), 0);
    assert_eq!(crate::default_bias(5), 15);
    assert_eq!(crate::default_bias(8), 127);
    assert_eq!(crate::default_bias(0), 0);
    assert_eq!(crate::default_bias(9), 0);
    assert_eq!(crate::default_bias(30), 0);
}

#[test]
fn test_epsilon_when_one_rounds_to_smallest() {
    // Smallest positive value is 4, so ceiling takes 1 to pattern 1
    let format = Format::with_options(1, 4, 3, Some(-4), RoundingMode::Ceiling).unwrap();
    assert_eq!(format.to_bits(1.0), 1);
    assert_eq!(format.epsilon(), 4.0);
    assert!(!format.epsilon().is_nan());
}
