//! # Unit Conversions
//!
//! Temperature, length and weight. Length and weight convert through a base
//! unit (metres, grams) using fixed factors.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::formulas::convert::{convert_length, LengthUnit};
//!
//! let metres = convert_length(1.0, LengthUnit::Mile, LengthUnit::Meter);
//! assert!((metres - 1609.34).abs() < 1e-9);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

// ============================================================================
// Temperature
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    pub const ALL: [TemperatureUnit; 3] = [
        TemperatureUnit::Celsius,
        TemperatureUnit::Fahrenheit,
        TemperatureUnit::Kelvin,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Kelvin => "K",
        }
    }

    fn to_celsius(self, value: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => value,
            TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
            TemperatureUnit::Kelvin => value - 273.15,
        }
    }

    fn from_celsius(self, celsius: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => celsius,
            TemperatureUnit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
            TemperatureUnit::Kelvin => celsius + 273.15,
        }
    }
}

impl FromStr for TemperatureUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" | "celsius" => Ok(TemperatureUnit::Celsius),
            "f" | "fahrenheit" => Ok(TemperatureUnit::Fahrenheit),
            "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
            _ => Err(CalcError::invalid_input("unit", s, "expected celsius, fahrenheit or kelvin")),
        }
    }
}

pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    to.from_celsius(from.to_celsius(value))
}

// ============================================================================
// Length
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 8] = [
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Meter,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Centimeter => "cm",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
            LengthUnit::Inch => "in",
            LengthUnit::Foot => "ft",
            LengthUnit::Yard => "yd",
            LengthUnit::Mile => "mi",
        }
    }

    /// Metres per unit
    pub fn meters(self) -> f64 {
        match self {
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Meter => 1.0,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => 1609.34,
        }
    }
}

impl FromStr for LengthUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        LengthUnit::ALL
            .into_iter()
            .find(|u| u.symbol() == key)
            .ok_or_else(|| CalcError::invalid_input("unit", s, "expected mm, cm, m, km, in, ft, yd or mi"))
    }
}

pub fn convert_length(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    value * from.meters() / to.meters()
}

// ============================================================================
// Weight
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    Milligram,
    Gram,
    Kilogram,
    Ounce,
    Pound,
    Stone,
}

impl WeightUnit {
    pub const ALL: [WeightUnit; 6] = [
        WeightUnit::Milligram,
        WeightUnit::Gram,
        WeightUnit::Kilogram,
        WeightUnit::Ounce,
        WeightUnit::Pound,
        WeightUnit::Stone,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Milligram => "mg",
            WeightUnit::Gram => "g",
            WeightUnit::Kilogram => "kg",
            WeightUnit::Ounce => "oz",
            WeightUnit::Pound => "lb",
            WeightUnit::Stone => "st",
        }
    }

    /// Grams per unit
    pub fn grams(self) -> f64 {
        match self {
            WeightUnit::Milligram => 0.001,
            WeightUnit::Gram => 1.0,
            WeightUnit::Kilogram => 1000.0,
            WeightUnit::Ounce => 28.3495,
            WeightUnit::Pound => 453.592,
            WeightUnit::Stone => 6350.29,
        }
    }
}

impl FromStr for WeightUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        WeightUnit::ALL
            .into_iter()
            .find(|u| u.symbol() == key)
            .ok_or_else(|| CalcError::invalid_input("unit", s, "expected mg, g, kg, oz, lb or st"))
    }
}

pub fn convert_weight(value: f64, from: WeightUnit, to: WeightUnit) -> f64 {
    value * from.grams() / to.grams()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_temperature() {
        use TemperatureUnit::*;
        assert!(close(convert_temperature(100.0, Celsius, Fahrenheit), 212.0));
        assert!(close(convert_temperature(32.0, Fahrenheit, Kelvin), 273.15));
        assert!(close(convert_temperature(0.0, Kelvin, Celsius), -273.15));
        assert!(close(convert_temperature(-40.0, Celsius, Fahrenheit), -40.0));
    }

    #[test]
    fn test_length() {
        assert!(close(convert_length(12.0, LengthUnit::Inch, LengthUnit::Foot), 1.0));
        assert!(close(convert_length(2.5, LengthUnit::Kilometer, LengthUnit::Meter), 2500.0));
    }

    #[test]
    fn test_weight() {
        assert!(close(convert_weight(1.0, WeightUnit::Kilogram, WeightUnit::Gram), 1000.0));
        assert!((convert_weight(1.0, WeightUnit::Stone, WeightUnit::Pound) - 14.0).abs() < 1e-3);
    }

    #[test]
    fn test_parse_units() {
        assert_eq!("F".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Fahrenheit);
        assert_eq!("Kelvin".parse::<TemperatureUnit>().unwrap(), TemperatureUnit::Kelvin);
        assert_eq!("FT".parse::<LengthUnit>().unwrap(), LengthUnit::Foot);
        assert_eq!("lb".parse::<WeightUnit>().unwrap(), WeightUnit::Pound);
        assert!("parsec".parse::<LengthUnit>().is_err());
        assert!("rankine".parse::<TemperatureUnit>().is_err());
    }
}
