//! Body mass index and basal metabolic rate.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::format::round_to;

/// WHO adult BMI bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiResult {
    /// Rounded to one decimal
    pub bmi: f64,
    pub category: BmiCategory,
}

/// BMI from weight in kilograms and height in metres.
///
/// The category is taken from the unrounded value.
pub fn bmi(weight_kg: f64, height_m: f64) -> CalcResult<BmiResult> {
    if height_m <= 0.0 {
        return Err(CalcError::invalid_input(
            "height",
            height_m.to_string(),
            "Height must be positive",
        ));
    }
    let value = weight_kg / (height_m * height_m);
    Ok(BmiResult {
        bmi: round_to(value, 1),
        category: BmiCategory::from_bmi(value),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl FromStr for Sex {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            other => Err(CalcError::invalid_input("gender", other, "expected 'male' or 'female'")),
        }
    }
}

/// Basal metabolic rate (kcal/day), Mifflin-St Jeor, rounded to a whole
/// number.
pub fn bmr(weight_kg: f64, height_cm: f64, age_years: f64, sex: Sex) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    let adjusted = match sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    };
    round_to(adjusted, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmi_value_and_category() {
        let result = bmi(70.0, 1.75).unwrap();
        assert_eq!(result.bmi, 22.9);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.category.to_string(), "Normal weight");
    }

    #[test]
    fn test_bmi_band_edges() {
        assert_eq!(BmiCategory::from_bmi(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_bmi_zero_height() {
        assert!(bmi(70.0, 0.0).is_err());
    }

    #[test]
    fn test_bmr() {
        assert_eq!(bmr(70.0, 175.0, 30.0, Sex::Male), 1649.0);
        assert_eq!(bmr(60.0, 165.0, 25.0, Sex::Female), 1345.0);
    }

    #[test]
    fn test_parse_sex() {
        assert_eq!("Female".parse::<Sex>().unwrap(), Sex::Female);
        assert!("other".parse::<Sex>().is_err());
    }
}
