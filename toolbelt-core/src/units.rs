//! Length unit conversion, table-driven through meters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("unknown unit {0:?} (expected one of m, cm, km, ft, in)")]
    UnknownUnit(String),
}

/// Supported length units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Meter,
    Centimeter,
    Kilometer,
    Foot,
    Inch,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 5] = [
        LengthUnit::Meter,
        LengthUnit::Centimeter,
        LengthUnit::Kilometer,
        LengthUnit::Foot,
        LengthUnit::Inch,
    ];

    /// Meters per one of this unit.
    pub fn factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Inch => 0.0254,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Meter => "m",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Kilometer => "km",
            LengthUnit::Foot => "ft",
            LengthUnit::Inch => "in",
        }
    }

    pub fn next(self) -> LengthUnit {
        let i = Self::ALL.iter().position(|u| *u == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> LengthUnit {
        let i = Self::ALL.iter().position(|u| *u == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" => Ok(LengthUnit::Meter),
            "cm" => Ok(LengthUnit::Centimeter),
            "km" => Ok(LengthUnit::Kilometer),
            "ft" => Ok(LengthUnit::Foot),
            "in" => Ok(LengthUnit::Inch),
            other => Err(UnitError::UnknownUnit(other.to_string())),
        }
    }
}

/// Convert a value between units via the meter base.
pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value * from.factor() / to.factor()
}

/// Render a conversion the way the units panel displays it, result to six
/// decimal places.
pub fn format_conversion(value: f64, from: LengthUnit, to: LengthUnit) -> String {
    format!("{value} {from} = {result:.6} {to}", result = convert(value, from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hundred_meters_in_feet() {
        assert_eq!(
            format_conversion(100.0, LengthUnit::Meter, LengthUnit::Foot),
            "100 m = 328.083990 ft"
        );
    }

    #[test]
    fn identity_conversion() {
        assert_eq!(convert(42.0, LengthUnit::Meter, LengthUnit::Meter), 42.0);
    }

    #[test]
    fn round_trip_within_tolerance() {
        let x = 123.456;
        let there = convert(x, LengthUnit::Kilometer, LengthUnit::Inch);
        let back = convert(there, LengthUnit::Inch, LengthUnit::Kilometer);
        assert!((back - x).abs() < 1e-9);
    }

    #[test]
    fn parses_symbols() {
        assert_eq!("m".parse::<LengthUnit>().unwrap(), LengthUnit::Meter);
        assert_eq!(" FT ".parse::<LengthUnit>().unwrap(), LengthUnit::Foot);
        assert!(matches!(
            "furlong".parse::<LengthUnit>(),
            Err(UnitError::UnknownUnit(_))
        ));
    }

    #[test]
    fn cycling_covers_all_units() {
        let mut unit = LengthUnit::Meter;
        for _ in 0..LengthUnit::ALL.len() {
            unit = unit.next();
        }
        assert_eq!(unit, LengthUnit::Meter);
        assert_eq!(LengthUnit::Meter.prev(), LengthUnit::Inch);
    }
}
