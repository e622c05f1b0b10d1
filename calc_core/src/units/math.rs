//! Geometry and percentage calculators.

use serde_json::{json, Map, Value};

use super::{number, optional_number, output, CalculatorUnit, FieldSpec};
use crate::errors::CalcResult;
use crate::format::{percentage, round_to};
use crate::formulas::geometry;
use crate::validation::{Rule, ValidationSchema};

fn positive(label: &str) -> Vec<Rule> {
    vec![
        Rule::required().with_message(format!("{} is required", label)),
        Rule::positive().with_message(format!("{} must be positive", label)),
    ]
}

fn optional_positive() -> Vec<Rule> {
    vec![Rule::custom(|value| match value {
        Value::Null => true,
        Value::String(s) if s.trim().is_empty() => true,
        other => crate::validation::coerce::to_number(other) > 0.0,
    })
    .with_message("Side lengths must be positive")]
}

pub struct Circle;

impl CalculatorUnit for Circle {
    fn key(&self) -> &'static str {
        "circle"
    }

    fn title(&self) -> &'static str {
        "Circle Area"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[FieldSpec::number("radius", "Radius")];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        ValidationSchema::new().field("radius", positive("Radius"))
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        output(&geometry::circle(number(inputs, "radius")?))
    }
}

pub struct Triangle;

impl CalculatorUnit for Triangle {
    fn key(&self) -> &'static str {
        "triangle"
    }

    fn title(&self) -> &'static str {
        "Triangle Area"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::number("base", "Base"),
            FieldSpec::number("height", "Height"),
        ];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        ValidationSchema::new()
            .field("base", positive("Base"))
            .field("height", positive("Height"))
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        let area = geometry::triangle_area(number(inputs, "base")?, number(inputs, "height")?);
        output(&json!({ "area": round_to(area, 2) }))
    }
}

pub struct Rectangle;

impl CalculatorUnit for Rectangle {
    fn key(&self) -> &'static str {
        "rectangle"
    }

    fn title(&self) -> &'static str {
        "Rectangle Area"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::number("length", "Length"),
            FieldSpec::number("width", "Width"),
        ];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        ValidationSchema::new()
            .field("length", positive("Length"))
            .field("width", positive("Width"))
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        output(&geometry::rectangle(
            number(inputs, "length")?,
            number(inputs, "width")?,
        ))
    }
}

pub struct Sphere;

impl CalculatorUnit for Sphere {
    fn key(&self) -> &'static str {
        "sphere"
    }

    fn title(&self) -> &'static str {
        "Sphere Volume"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[FieldSpec::number("radius", "Radius")];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        ValidationSchema::new().field("radius", positive("Radius"))
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        output(&geometry::sphere(number(inputs, "radius")?))
    }
}

pub struct Cylinder;

impl CalculatorUnit for Cylinder {
    fn key(&self) -> &'static str {
        "cylinder"
    }

    fn title(&self) -> &'static str {
        "Cylinder Volume"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::number("radius", "Radius"),
            FieldSpec::number("height", "Height"),
        ];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        ValidationSchema::new()
            .field("radius", positive("Radius"))
            .field("height", positive("Height"))
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        output(&geometry::cylinder(
            number(inputs, "radius")?,
            number(inputs, "height")?,
        ))
    }
}

/// Solves the missing side of a right triangle
pub struct Pythagorean;

impl CalculatorUnit for Pythagorean {
    fn key(&self) -> &'static str {
        "pythagorean"
    }

    fn title(&self) -> &'static str {
        "Pythagorean Theorem"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::number("a", "Side a"),
            FieldSpec::number("b", "Side b"),
            FieldSpec::number("c", "Hypotenuse c"),
        ];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        ValidationSchema::new()
            .field("a", optional_positive())
            .field("b", optional_positive())
            .field("c", optional_positive())
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        output(&geometry::pythagorean(
            optional_number(inputs, "a")?,
            optional_number(inputs, "b")?,
            optional_number(inputs, "c")?,
        )?)
    }
}

/// What percent `value` is of `total`
pub struct Percentage;

impl CalculatorUnit for Percentage {
    fn key(&self) -> &'static str {
        "percentage"
    }

    fn title(&self) -> &'static str {
        "Percentage"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::number("value", "Value"),
            FieldSpec::number("total", "Total"),
        ];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        ValidationSchema::new()
            .field("value", vec![Rule::required().with_message("Value is required")])
            .field("total", vec![Rule::required().with_message("Total is required")])
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        let value = number(inputs, "value")?;
        let total = number(inputs, "total")?;
        output(&json!({ "percentage": percentage(value, total) }))
    }
}
