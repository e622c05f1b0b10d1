//! Body measurements.

use serde_json::{json, Map, Value};

use super::{number, output, text, CalculatorUnit, FieldKind, FieldSpec};
use crate::errors::CalcResult;
use crate::formulas::health::{self, Sex};
use crate::validation::{schemas, Rule, ValidationSchema};

/// BMI from weight in kg and height in cm
pub struct Bmi;

impl CalculatorUnit for Bmi {
    fn key(&self) -> &'static str {
        "bmi"
    }

    fn title(&self) -> &'static str {
        "Body Mass Index"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::number("weight", "Weight (kg)"),
            FieldSpec::number("height", "Height (cm)"),
        ];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        schemas::bmi()
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        let weight = number(inputs, "weight")?;
        let height_m = number(inputs, "height")? / 100.0;
        let result = health::bmi(weight, height_m)?;
        output(&json!({
            "bmi": result.bmi,
            "category": result.category.label(),
        }))
    }
}

/// Basal metabolic rate
pub struct Bmr;

const SEXES: &[&str] = &["male", "female"];

impl CalculatorUnit for Bmr {
    fn key(&self) -> &'static str {
        "bmr"
    }

    fn title(&self) -> &'static str {
        "Basal Metabolic Rate"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::number("weight", "Weight (kg)"),
            FieldSpec::number("height", "Height (cm)"),
            FieldSpec::number("age", "Age (years)"),
            FieldSpec::new("gender", "Gender", FieldKind::Choice(SEXES)).with_default("male"),
        ];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        let sex = Rule::custom(|value| {
            value
                .as_str()
                .is_some_and(|s| s.parse::<Sex>().is_ok())
        })
        .with_message("Choose male or female");

        schemas::bmi()
            .field(
                "age",
                vec![
                    Rule::required().with_message("Age is required"),
                    Rule::range(1.0, 120.0).with_message("Age must be between 1 and 120"),
                ],
            )
            .field("gender", vec![Rule::required(), sex])
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        let sex: Sex = text(inputs, "gender")?.parse()?;
        let bmr = health::bmr(
            number(inputs, "weight")?,
            number(inputs, "height")?,
            number(inputs, "age")?,
            sex,
        );
        output(&json!({ "bmr": bmr }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Evaluation;

    fn evaluate(unit: &dyn CalculatorUnit, form: Value) -> Evaluation {
        unit.evaluate(form.as_object().unwrap()).unwrap()
    }

    #[test]
    fn test_bmi_takes_centimetres() {
        match evaluate(&Bmi, json!({ "weight": 70, "height": 175 })) {
            Evaluation::Computed(result) => {
                assert_eq!(result["bmi"], json!(22.9));
                assert_eq!(result["category"], json!("Normal weight"));
            }
            Evaluation::Invalid(errors) => panic!("{:?}", errors),
        }
    }

    #[test]
    fn test_bmi_rejects_height_in_metres() {
        match evaluate(&Bmi, json!({ "weight": 70, "height": 1.75 })) {
            Evaluation::Invalid(result) => assert!(result.errors.contains_key("height")),
            Evaluation::Computed(_) => panic!("1.75 cm should be out of range"),
        }
    }

    #[test]
    fn test_bmr() {
        let form = json!({ "weight": 70, "height": 175, "age": 30, "gender": "female" });
        match evaluate(&Bmr, form) {
            Evaluation::Computed(result) => assert_eq!(result["bmr"], json!(1483.0)),
            Evaluation::Invalid(errors) => panic!("{:?}", errors),
        }

        let form = json!({ "weight": 70, "height": 175, "age": 30 });
        match evaluate(&Bmr, form) {
            Evaluation::Computed(result) => assert_eq!(result["bmr"], json!(1649.0)),
            Evaluation::Invalid(errors) => panic!("{:?}", errors),
        }
    }

    #[test]
    fn test_bmr_unknown_gender() {
        let form = json!({ "weight": 70, "height": 175, "age": 30, "gender": "robot" });
        assert!(matches!(evaluate(&Bmr, form), Evaluation::Invalid(_)));
    }
}
