//! Unit converters.

use std::str::FromStr;

use serde_json::{json, Map, Value};

use super::{number, output, text, CalculatorUnit, FieldKind, FieldSpec};
use crate::errors::CalcResult;
use crate::format::round_to;
use crate::formulas::convert::{
    convert_length, convert_temperature, convert_weight, LengthUnit, TemperatureUnit, WeightUnit,
};
use crate::validation::{schemas, Rule, ValidationSchema};

/// Decimal places kept in converted values
const PRECISION: i32 = 4;

const TEMPERATURE_UNITS: &[&str] = &["celsius", "fahrenheit", "kelvin"];
const LENGTH_UNITS: &[&str] = &["mm", "cm", "m", "km", "in", "ft", "yd", "mi"];
const WEIGHT_UNITS: &[&str] = &["mg", "g", "kg", "oz", "lb", "st"];

fn unit_rule<U: FromStr + 'static>() -> Rule {
    Rule::custom(|value| value.as_str().is_some_and(|s| s.parse::<U>().is_ok()))
        .with_message("Unknown unit")
}

/// Rules for a plain `value`/`from_unit`/`to_unit` form
fn conversion_schema<U: FromStr + 'static>() -> ValidationSchema {
    ValidationSchema::new()
        .field("value", vec![Rule::required().with_message("Value is required")])
        .field("from_unit", vec![Rule::required(), unit_rule::<U>()])
        .field("to_unit", vec![Rule::required(), unit_rule::<U>()])
}

pub struct Temperature;

impl CalculatorUnit for Temperature {
    fn key(&self) -> &'static str {
        "temperature"
    }

    fn title(&self) -> &'static str {
        "Temperature Converter"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::number("value", "Temperature"),
            FieldSpec::new("from_unit", "From", FieldKind::Choice(TEMPERATURE_UNITS))
                .with_default("celsius"),
            FieldSpec::new("to_unit", "To", FieldKind::Choice(TEMPERATURE_UNITS))
                .with_default("fahrenheit"),
        ];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        schemas::temperature()
            .field("from_unit", vec![Rule::required(), unit_rule::<TemperatureUnit>()])
            .field("to_unit", vec![Rule::required(), unit_rule::<TemperatureUnit>()])
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        let from: TemperatureUnit = text(inputs, "from_unit")?.parse()?;
        let to: TemperatureUnit = text(inputs, "to_unit")?.parse()?;
        let value = number(inputs, "value")?;
        let result = convert_temperature(value, from, to);
        output(&json!({
            "result": round_to(result, PRECISION),
            "symbol": to.symbol(),
        }))
    }
}

pub struct Length;

impl CalculatorUnit for Length {
    fn key(&self) -> &'static str {
        "length"
    }

    fn title(&self) -> &'static str {
        "Length Converter"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::number("value", "Length"),
            FieldSpec::new("from_unit", "From", FieldKind::Choice(LENGTH_UNITS)).with_default("m"),
            FieldSpec::new("to_unit", "To", FieldKind::Choice(LENGTH_UNITS)).with_default("ft"),
        ];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        conversion_schema::<LengthUnit>()
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        let from: LengthUnit = text(inputs, "from_unit")?.parse()?;
        let to: LengthUnit = text(inputs, "to_unit")?.parse()?;
        let result = convert_length(number(inputs, "value")?, from, to);
        output(&json!({
            "result": round_to(result, PRECISION),
            "symbol": to.symbol(),
        }))
    }
}

pub struct Weight;

impl CalculatorUnit for Weight {
    fn key(&self) -> &'static str {
        "weight"
    }

    fn title(&self) -> &'static str {
        "Weight Converter"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::number("value", "Weight"),
            FieldSpec::new("from_unit", "From", FieldKind::Choice(WEIGHT_UNITS)).with_default("kg"),
            FieldSpec::new("to_unit", "To", FieldKind::Choice(WEIGHT_UNITS)).with_default("lb"),
        ];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        conversion_schema::<WeightUnit>()
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        let from: WeightUnit = text(inputs, "from_unit")?.parse()?;
        let to: WeightUnit = text(inputs, "to_unit")?.parse()?;
        let result = convert_weight(number(inputs, "value")?, from, to);
        output(&json!({
            "result": round_to(result, PRECISION),
            "symbol": to.symbol(),
        }))
    }
}
