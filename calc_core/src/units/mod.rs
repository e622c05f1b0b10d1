//! # Calculator Units
//!
//! A unit is the renderable, runnable part of a calculator: it declares
//! its input fields and their validation schema, and turns a raw form
//! (`serde_json` object) into a result object using [`crate::formulas`].
//!
//! Several catalog entries may share one unit; the mapping lives in
//! [`crate::resolver`].
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Evaluation, UnitRegistry};
//! use serde_json::json;
//!
//! let units = UnitRegistry::builtin();
//! let bmi = units.get("bmi").unwrap();
//!
//! let form = json!({ "weight": "70", "height": "175" });
//! match bmi.evaluate(form.as_object().unwrap()).unwrap() {
//!     Evaluation::Computed(result) => assert_eq!(result["bmi"], json!(22.9)),
//!     Evaluation::Invalid(errors) => panic!("{:?}", errors),
//! }
//! ```

pub mod convert;
pub mod datetime;
pub mod finance;
pub mod fun;
pub mod health;
pub mod math;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::errors::{CalcError, CalcResult};
use crate::validation::{coerce, validate_schema, Rule, SchemaResult, ValidationSchema};

// ============================================================================
// Field Layout
// ============================================================================

/// How an input is rendered and read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "options", rename_all = "lowercase")]
pub enum FieldKind {
    Number,
    Text,
    Date,
    Toggle,
    Choice(&'static [&'static str]),
}

/// One input of a calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    /// Value used when the form leaves the field empty
    pub default: Option<&'static str>,
}

impl FieldSpec {
    pub const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        FieldSpec {
            name,
            label,
            kind,
            default: None,
        }
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        FieldSpec::new(name, label, FieldKind::Number)
    }

    pub const fn with_default(self, default: &'static str) -> Self {
        FieldSpec {
            default: Some(default),
            ..self
        }
    }
}

// ============================================================================
// Unit Trait
// ============================================================================

/// Outcome of running a unit on a form
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// The form failed validation; nothing was computed
    Invalid(SchemaResult),
    Computed(Map<String, Value>),
}

pub trait CalculatorUnit {
    /// Stable key the resolver maps calculator ids to
    fn key(&self) -> &'static str;

    fn title(&self) -> &'static str;

    fn fields(&self) -> &'static [FieldSpec];

    fn schema(&self) -> ValidationSchema;

    /// Compute from an already-validated form.
    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>>;

    /// Apply field defaults, validate, then calculate.
    ///
    /// Every filled-in number field must be finite on top of its schema.
    /// Input a formula turns down (crossed bounds, an impossible triangle)
    /// comes back as [`Evaluation::Invalid`] too; `Err` is left for
    /// failures that are not the form's fault.
    fn evaluate(&self, inputs: &Map<String, Value>) -> CalcResult<Evaluation> {
        let mut form = inputs.clone();
        let mut schema = self.schema();
        for field in self.fields() {
            if let Some(default) = field.default {
                if is_blank(form.get(field.name)) {
                    form.insert(field.name.to_string(), Value::String(default.to_string()));
                }
            }
            if field.kind == FieldKind::Number && !is_blank(form.get(field.name)) {
                schema = schema.rule(field.name, Rule::finite());
            }
        }

        let check = validate_schema(&form, &schema);
        if !check.is_valid {
            tracing::debug!(unit = self.key(), failing = check.errors.len(), "form rejected");
            return Ok(Evaluation::Invalid(check));
        }
        match self.calculate(&form) {
            Ok(result) => Ok(Evaluation::Computed(result)),
            Err(CalcError::InvalidInput { field, reason, .. }) => {
                tracing::debug!(unit = self.key(), field = %field, "input rejected by formula");
                Ok(Evaluation::Invalid(SchemaResult::failure(field, reason)))
            }
            Err(CalcError::MissingField { field }) => {
                Ok(Evaluation::Invalid(SchemaResult::failure(field, "This field is required")))
            }
            Err(e) => Err(e),
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// The set of units available to the resolver
pub struct UnitRegistry {
    units: Vec<Box<dyn CalculatorUnit>>,
}

impl UnitRegistry {
    pub fn empty() -> Self {
        UnitRegistry { units: Vec::new() }
    }

    /// Every unit shipped with the crate
    pub fn builtin() -> Self {
        UnitRegistry {
            units: vec![
                Box::new(finance::Loan),
                Box::new(finance::CompoundInterest),
                Box::new(finance::SimpleInterest),
                Box::new(finance::Tip),
                Box::new(health::Bmi),
                Box::new(health::Bmr),
                Box::new(math::Circle),
                Box::new(math::Triangle),
                Box::new(math::Rectangle),
                Box::new(math::Sphere),
                Box::new(math::Cylinder),
                Box::new(math::Pythagorean),
                Box::new(math::Percentage),
                Box::new(convert::Temperature),
                Box::new(convert::Length),
                Box::new(convert::Weight),
                Box::new(datetime::AgeUnit),
                Box::new(fun::Dice),
                Box::new(fun::Coin),
                Box::new(fun::RandomNumber),
            ],
        }
    }

    /// Add a unit. Keys must be unique.
    pub fn register(&mut self, unit: Box<dyn CalculatorUnit>) -> CalcResult<()> {
        if self.contains(unit.key()) {
            return Err(CalcError::duplicate_id("unit", unit.key()));
        }
        self.units.push(unit);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&dyn CalculatorUnit> {
        self.units
            .iter()
            .find(|u| u.key() == key)
            .map(|u| u.as_ref())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.units.iter().map(|u| u.key())
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

// ============================================================================
// Input Helpers
// ============================================================================

fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        _ => false,
    }
}

/// Required numeric input
pub(crate) fn number(inputs: &Map<String, Value>, field: &str) -> CalcResult<f64> {
    optional_number(inputs, field)?.ok_or_else(|| CalcError::missing_field(field))
}

/// Numeric input that may be left blank
pub(crate) fn optional_number(inputs: &Map<String, Value>, field: &str) -> CalcResult<Option<f64>> {
    let value = inputs.get(field);
    if is_blank(value) {
        return Ok(None);
    }
    let raw = value.unwrap_or(&Value::Null);
    let n = coerce::to_number(raw);
    if !n.is_finite() {
        return Err(CalcError::invalid_input(field, raw.to_string(), "Not a number"));
    }
    Ok(Some(n))
}

/// Whole, non-negative numeric input
pub(crate) fn whole(inputs: &Map<String, Value>, field: &str) -> CalcResult<u32> {
    let n = number(inputs, field)?;
    if n < 0.0 || n.fract() != 0.0 || n > f64::from(u32::MAX) {
        return Err(CalcError::invalid_input(field, n.to_string(), "Expected a whole number"));
    }
    Ok(n as u32)
}

/// Required text input, trimmed
pub(crate) fn text(inputs: &Map<String, Value>, field: &str) -> CalcResult<String> {
    let value = inputs.get(field);
    if is_blank(value) {
        return Err(CalcError::missing_field(field));
    }
    coerce::to_text(value.unwrap_or(&Value::Null))
        .map(|s| s.trim().to_string())
        .ok_or_else(|| CalcError::invalid_input(field, "", "Expected text"))
}

/// Boolean toggle; strings `"true"`/`"on"`/`"1"` count as set
pub(crate) fn flag(inputs: &Map<String, Value>, field: &str, default: bool) -> bool {
    match inputs.get(field) {
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) if !s.trim().is_empty() => {
            matches!(s.trim().to_ascii_lowercase().as_str(), "true" | "on" | "1" | "yes")
        }
        _ => default,
    }
}

/// Serialize a formula result into a result object
pub(crate) fn output<T: Serialize>(result: &T) -> CalcResult<Map<String, Value>> {
    match serde_json::to_value(result)? {
        Value::Object(map) => Ok(map),
        other => {
            let mut map = Map::new();
            map.insert("result".to_string(), other);
            Ok(map)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_builtin_keys_unique() {
        let units = UnitRegistry::builtin();
        let mut keys: Vec<&str> = units.keys().collect();
        let total = keys.len();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), total);
    }

    #[test]
    fn test_register_rejects_duplicate() {
        let mut units = UnitRegistry::empty();
        units.register(Box::new(math::Circle)).unwrap();
        let err = units.register(Box::new(math::Circle)).unwrap_err();
        assert_eq!(err.error_code(), "DUPLICATE_ID");
        assert_eq!(units.len(), 1);
    }

    #[test]
    fn test_every_field_has_schema_or_default() {
        let units = UnitRegistry::builtin();
        for key in units.keys() {
            let unit = units.get(key).unwrap();
            let schema = unit.schema();
            for name in schema.field_names() {
                assert!(
                    unit.fields().iter().any(|f| f.name == name),
                    "{} validates unknown field {}",
                    key,
                    name
                );
            }
        }
    }

    #[test]
    fn test_evaluate_reports_invalid_form() {
        let units = UnitRegistry::builtin();
        let loan = units.get("loan").unwrap();
        match loan.evaluate(&form(json!({ "principal": "50" }))).unwrap() {
            Evaluation::Invalid(result) => {
                assert!(result.errors.contains_key("principal"));
                assert!(result.errors.contains_key("rate"));
            }
            Evaluation::Computed(_) => panic!("expected validation failure"),
        }
    }

    #[test]
    fn test_evaluate_applies_defaults() {
        let units = UnitRegistry::builtin();
        let dice = units.get("dice").unwrap();
        match dice.evaluate(&Map::new()).unwrap() {
            Evaluation::Computed(result) => {
                assert_eq!(result["rolls"].as_array().unwrap().len(), 1);
            }
            Evaluation::Invalid(errors) => panic!("{:?}", errors),
        }
    }

    #[test]
    fn test_input_helpers() {
        let inputs = form(json!({ "a": "12.5", "b": "", "c": "x", "d": 3, "t": "on" }));
        assert_eq!(number(&inputs, "a").unwrap(), 12.5);
        assert_eq!(optional_number(&inputs, "b").unwrap(), None);
        assert!(matches!(number(&inputs, "b"), Err(CalcError::MissingField { .. })));
        assert!(matches!(number(&inputs, "c"), Err(CalcError::InvalidInput { .. })));
        assert_eq!(whole(&inputs, "d").unwrap(), 3);
        assert!(whole(&inputs, "a").is_err());
        assert!(flag(&inputs, "t", false));
        assert!(flag(&inputs, "missing", true));
    }

    fn sample(field: &FieldSpec) -> &'static str {
        if let Some(default) = field.default {
            return default;
        }
        match field.kind {
            FieldKind::Number => "150",
            FieldKind::Text => "x",
            FieldKind::Date => "2000-01-01",
            FieldKind::Toggle => "false",
            FieldKind::Choice(options) => options.first().copied().unwrap_or(""),
        }
    }

    #[test]
    fn test_bad_numbers_never_escape_as_errors() {
        let units = UnitRegistry::builtin();
        let hostile = ["abc", "Infinity", "-Infinity", "1e400", "2.5", "0", "-1", "-1e308", "1e308", ""];
        for key in units.keys() {
            let unit = units.get(key).unwrap();
            for field in unit.fields() {
                for raw in hostile {
                    let mut inputs: Map<String, Value> = unit
                        .fields()
                        .iter()
                        .map(|f| (f.name.to_string(), json!(sample(f))))
                        .collect();
                    inputs.insert(field.name.to_string(), json!(raw));
                    let outcome = unit.evaluate(&inputs);
                    assert!(
                        outcome.is_ok(),
                        "{} with {}={:?} gave {:?}",
                        key,
                        field.name,
                        raw,
                        outcome
                    );
                }
            }
        }
    }

    fn rejected(key: &str, inputs: Value) -> SchemaResult {
        let units = UnitRegistry::builtin();
        match units.get(key).unwrap().evaluate(&form(inputs)).unwrap() {
            Evaluation::Invalid(result) => result,
            Evaluation::Computed(result) => panic!("{} accepted {:?}", key, result),
        }
    }

    #[test]
    fn test_form_level_rejections() {
        let loan = rejected("loan", json!({ "principal": "1000", "rate": "5", "term": "2.5" }));
        assert!(loan.errors.contains_key("term"));

        let pct = rejected("percentage", json!({ "value": "abc", "total": "10" }));
        assert_eq!(pct.errors["value"], vec!["Please enter a valid number"]);

        let circle = rejected("circle", json!({ "radius": "Infinity" }));
        assert_eq!(circle.errors["radius"], vec!["Please enter a valid number"]);

        let random = rejected("random-number", json!({ "min": "abc", "max": "10" }));
        assert!(random.errors.contains_key("min"));

        let wide = rejected("random-number", json!({ "min": "-1e308", "max": "1e308", "integer": "false" }));
        assert_eq!(wide.errors["range"], vec!["Range is too wide"]);

        let crossed = rejected("random-number", json!({ "min": "10", "max": "1" }));
        assert!(crossed.errors.contains_key("range"));
    }

    #[test]
    fn test_blank_optional_numbers_skip_finite_check() {
        let units = UnitRegistry::builtin();
        let unit = units.get("pythagorean").unwrap();
        let outcome = unit.evaluate(&form(json!({ "a": "3", "b": "4", "c": "" }))).unwrap();
        assert!(matches!(outcome, Evaluation::Computed(_)));
    }
}
