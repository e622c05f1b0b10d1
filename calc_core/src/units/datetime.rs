//! Date calculators.

use chrono::{NaiveDate, Utc};
use serde_json::{Map, Value};

use super::{output, CalculatorUnit, FieldKind, FieldSpec};
use crate::errors::{CalcError, CalcResult};
use crate::formulas::datetime;
use crate::validation::{coerce, schemas, Rule, ValidationSchema};

/// Age in years, months and days
pub struct AgeUnit;

fn date_field(inputs: &Map<String, Value>, field: &str) -> CalcResult<Option<NaiveDate>> {
    match inputs.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(value) => coerce::to_datetime(value)
            .map(|dt| Some(dt.date_naive()))
            .ok_or_else(|| CalcError::invalid_input(field, value.to_string(), "Please enter a valid date")),
    }
}

impl CalculatorUnit for AgeUnit {
    fn key(&self) -> &'static str {
        "age"
    }

    fn title(&self) -> &'static str {
        "Age Calculator"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("birth_date", "Date of birth", FieldKind::Date),
            FieldSpec::new("as_of", "Age on (optional)", FieldKind::Date),
        ];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        let optional_date = Rule::custom(|value| match value {
            Value::Null => true,
            Value::String(s) if s.trim().is_empty() => true,
            other => coerce::to_datetime(other).is_some(),
        })
        .with_message("Please enter a valid date");

        schemas::age().field("as_of", vec![optional_date])
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        let birth = date_field(inputs, "birth_date")?.ok_or_else(|| CalcError::missing_field("birth_date"))?;
        let today = date_field(inputs, "as_of")?.unwrap_or_else(|| Utc::now().date_naive());
        output(&datetime::age(birth, today)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Evaluation;
    use serde_json::json;

    #[test]
    fn test_age_on_given_day() {
        let form = json!({ "birth_date": "1990-06-15", "as_of": "2024-06-14" });
        match AgeUnit.evaluate(form.as_object().unwrap()).unwrap() {
            Evaluation::Computed(result) => {
                assert_eq!(result["years"], json!(33));
                assert_eq!(result["months"], json!(11));
                assert_eq!(result["days"], json!(30));
            }
            Evaluation::Invalid(errors) => panic!("{:?}", errors),
        }
    }

    #[test]
    fn test_age_defaults_to_today() {
        let form = json!({ "birth_date": "2000-01-01" });
        match AgeUnit.evaluate(form.as_object().unwrap()).unwrap() {
            Evaluation::Computed(result) => assert!(result["years"].as_u64().unwrap() >= 24),
            Evaluation::Invalid(errors) => panic!("{:?}", errors),
        }
    }

    #[test]
    fn test_age_bad_date() {
        let form = json!({ "birth_date": "not a date" });
        match AgeUnit.evaluate(form.as_object().unwrap()).unwrap() {
            Evaluation::Invalid(result) => {
                assert_eq!(result.errors["birth_date"][0], "Please enter a valid date");
            }
            Evaluation::Computed(_) => panic!("expected rejection"),
        }
    }
}
