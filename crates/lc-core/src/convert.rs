//! The conversion engine.
//!
//! A conversion multiplies the parsed input by the source unit's factor and
//! divides by the target unit's factor. Bad input is reported in the result
//! value, never as an error.

use core::fmt;

use crate::{LengthUnit, Real};

/// Digits printed after the decimal point.
pub const DECIMAL_PLACES: usize = 4;

/// Text shown in place of a number when the input cannot be parsed.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";

/// Outcome of one conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConversionResult {
    /// Converted value with exactly [`DECIMAL_PLACES`] decimals.
    Converted(String),
    InvalidInput,
}

impl ConversionResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ConversionResult::Converted(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            ConversionResult::Converted(text) => text,
            ConversionResult::InvalidInput => INVALID_INPUT_MESSAGE,
        }
    }
}

impl fmt::Display for ConversionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input captured when the user triggers a conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConversionRequest {
    pub raw_input: String,
    pub from: LengthUnit,
    pub to: LengthUnit,
}

impl ConversionRequest {
    pub fn new(raw_input: impl Into<String>, from: LengthUnit, to: LengthUnit) -> Self {
        Self {
            raw_input: raw_input.into(),
            from,
            to,
        }
    }

    pub fn execute(self) -> ConversionResult {
        convert_units(&self.raw_input, self.from, self.to)
    }
}

/// Parse user text as a finite number. Surrounding whitespace is ignored.
pub fn parse_quantity(raw: &str) -> Option<Real> {
    raw.trim().parse::<Real>().ok().filter(|v| v.is_finite())
}

/// Fixed-point text. Negative zero prints as `0.0000`.
pub fn format_fixed(value: Real) -> String {
    format!("{:.*}", DECIMAL_PLACES, value + 0.0)
}

/// Convert `raw_input` from the unit with `from_factor` to the unit with
/// `to_factor`. Both factors must come from the unit table.
pub fn convert(raw_input: &str, from_factor: Real, to_factor: Real) -> ConversionResult {
    match parse_quantity(raw_input) {
        Some(value) => {
            ConversionResult::Converted(format_fixed(scale(value, from_factor, to_factor)))
        }
        None => ConversionResult::InvalidInput,
    }
}

pub fn convert_units(raw_input: &str, from: LengthUnit, to: LengthUnit) -> ConversionResult {
    convert(raw_input, from.factor(), to.factor())
}

#[inline]
fn scale(value: Real, from_factor: Real, to_factor: Real) -> Real {
    value * from_factor / to_factor
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn any_unit() -> impl Strategy<Value = LengthUnit> {
        prop::sample::select(LengthUnit::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn matches_formula(v in -1.0e6_f64..1.0e6_f64, from in any_unit(), to in any_unit()) {
            let raw = v.to_string();
            let expected = format_fixed(v * from.factor() / to.factor());
            prop_assert_eq!(convert_units(&raw, from, to), ConversionResult::Converted(expected));
        }

        #[test]
        fn same_unit_is_identity(v in -1.0e6_f64..1.0e6_f64, unit in any_unit()) {
            let raw = v.to_string();
            let converted = convert_units(&raw, unit, unit);
            let value: f64 = converted.as_str().parse().unwrap();
            // Half a unit in the 4th decimal, plus the last bit lost in v * f / f.
            let slack = 5.0e-5 + 1e-9;
            prop_assert!((value - v).abs() <= slack, "{} -> {}", v, converted);
        }

        #[test]
        fn round_trip_within_rounding(v in -1.0e4_f64..1.0e4_f64, from in any_unit(), to in any_unit()) {
            let raw = v.to_string();
            let there = convert_units(&raw, from, to);
            let back = convert_units(there.as_str(), to, from);
            let value: f64 = back.as_str().parse().unwrap();
            // Rounding of the first leg is rescaled by the factor ratio on the way back.
            let slack = 5.0e-5 * (to.factor() / from.factor()) + 5.0e-5 + 1e-9;
            prop_assert!((value - v).abs() <= slack, "{} -> {} -> {}", v, there, back);
        }

        #[test]
        fn never_panics_on_arbitrary_text(raw in ".*", from in any_unit(), to in any_unit()) {
            let result = convert_units(&raw, from, to);
            prop_assert_eq!(result.is_valid(), parse_quantity(&raw).is_some());
        }
    }
}
