// lc-core/src/units.rs

use core::fmt;
use core::str::FromStr;

use uom::si::f64::Length as UomLength;

use crate::LcError;

/// Floating point type used throughout the converter
pub type Real = f64;

// Public canonical quantity type (SI, f64)
pub type Length = UomLength;

/// One of the supported length units. Factors are relative to the metre.
///
/// The set is closed: a selection can only ever name one of these, so the
/// engine never sees an unknown or zero factor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LengthUnit {
    #[default]
    Metre,
    Millimetre,
    Mile,
    Foot,
}

impl LengthUnit {
    /// Selector order.
    pub const ALL: [LengthUnit; 4] = [
        LengthUnit::Metre,
        LengthUnit::Millimetre,
        LengthUnit::Mile,
        LengthUnit::Foot,
    ];

    /// How many of this unit make up one metre.
    pub const fn factor(self) -> Real {
        match self {
            LengthUnit::Metre => 1.0,
            LengthUnit::Millimetre => 1000.0,
            LengthUnit::Mile => 0.000621371,
            LengthUnit::Foot => 3.28084,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            LengthUnit::Metre => "Metre",
            LengthUnit::Millimetre => "Millimetre",
            LengthUnit::Mile => "Mile",
            LengthUnit::Foot => "Foot",
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Metre => "m",
            LengthUnit::Millimetre => "mm",
            LengthUnit::Mile => "mi",
            LengthUnit::Foot => "ft",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LengthUnit {
    type Err = LcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        LengthUnit::ALL
            .into_iter()
            .find(|u| {
                u.label().eq_ignore_ascii_case(name) || u.symbol().eq_ignore_ascii_case(name)
            })
            .ok_or_else(|| LcError::UnknownUnit {
                name: name.to_string(),
            })
    }
}

/// Lift a value expressed in `unit` into a uom length.
#[inline]
pub fn to_length(value: Real, unit: LengthUnit) -> Length {
    m(value / unit.factor())
}

/// Length of one `unit`, in metres.
pub fn metres_per_unit(unit: LengthUnit) -> Real {
    use uom::si::length::meter;
    to_length(1.0, unit).get::<meter>()
}

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}
