//! # Input Validation
//!
//! Declarative rules checked against raw form input before it reaches a
//! formula. Validation never fails with an error: every outcome is a
//! [`ValidationResult`] carrying the messages of every rule that did not
//! pass (not just the first).
//!
//! ## Rule Semantics
//!
//! | Rule | Passes when |
//! |------|-------------|
//! | `required` | trimmed non-empty string, finite number, or any other non-null value |
//! | `min` / `max` / `range` | coerced number compares in bounds |
//! | `integer` | coerced number is integral |
//! | `finite` | coerced number is neither NaN nor infinite |
//! | `positive` / `non_negative` | coerced number `> 0` / `>= 0` |
//! | `email` / `url` / `date` | value parses as one |
//! | `pattern` | regex matches the raw value |
//! | `custom` | caller predicate returns true |
//!
//! Coercion follows [`coerce::to_number`]; a value that cannot be coerced
//! fails every numeric rule.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::validation::{validate_value, validate_schema, Rule, ValidationSchema};
//! use serde_json::json;
//!
//! let result = validate_value(&json!(5), &[Rule::range(1.0, 10.0)]);
//! assert!(result.is_valid);
//!
//! let schema = ValidationSchema::new()
//!     .field("weight", vec![Rule::required(), Rule::positive()])
//!     .field("height", vec![Rule::required()]);
//! let data = json!({ "weight": "72" });
//! let result = validate_schema(data.as_object().unwrap(), &schema);
//! assert!(!result.is_valid);
//! assert!(result.errors.contains_key("height"));
//! ```

pub mod coerce;
pub mod form;
pub mod sanitize;
pub mod schemas;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

pub use form::FormValidator;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|_| unreachable!("static regex"))
});

/// Caller-supplied predicate for [`Rule::custom`]
pub type Predicate = Arc<dyn Fn(&Value) -> bool + Send + Sync>;

/// What a rule checks.
#[derive(Clone)]
pub enum RuleKind {
    Required,
    Min(f64),
    Max(f64),
    Range { min: f64, max: f64 },
    Integer,
    Finite,
    Positive,
    NonNegative,
    Email,
    Url,
    Date,
    Pattern(Regex),
    Custom(Predicate),
}

impl RuleKind {
    /// Short name, stable for serialization and logs
    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Required => "required",
            RuleKind::Min(_) => "min",
            RuleKind::Max(_) => "max",
            RuleKind::Range { .. } => "range",
            RuleKind::Integer => "integer",
            RuleKind::Finite => "finite",
            RuleKind::Positive => "positive",
            RuleKind::NonNegative => "nonNegative",
            RuleKind::Email => "email",
            RuleKind::Url => "url",
            RuleKind::Date => "date",
            RuleKind::Pattern(_) => "pattern",
            RuleKind::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::Min(v) => write!(f, "Min({})", v),
            RuleKind::Max(v) => write!(f, "Max({})", v),
            RuleKind::Range { min, max } => write!(f, "Range({}..={})", min, max),
            RuleKind::Pattern(re) => write!(f, "Pattern({})", re.as_str()),
            other => f.write_str(other.name()),
        }
    }
}

/// A named predicate plus the message shown when it fails.
#[derive(Debug, Clone)]
pub struct Rule {
    pub kind: RuleKind,
    pub message: String,
}

impl Rule {
    fn with_default(kind: RuleKind, message: impl Into<String>) -> Self {
        Rule {
            kind,
            message: message.into(),
        }
    }

    /// Replace the failure message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn required() -> Self {
        Rule::with_default(RuleKind::Required, "This field is required")
    }

    pub fn min(min: f64) -> Self {
        Rule::with_default(RuleKind::Min(min), format!("Value must be at least {}", min))
    }

    pub fn max(max: f64) -> Self {
        Rule::with_default(RuleKind::Max(max), format!("Value must be at most {}", max))
    }

    pub fn range(min: f64, max: f64) -> Self {
        Rule::with_default(
            RuleKind::Range { min, max },
            format!("Value must be between {} and {}", min, max),
        )
    }

    pub fn integer() -> Self {
        Rule::with_default(RuleKind::Integer, "Value must be a whole number")
    }

    /// Rejects anything that does not coerce to a finite number
    pub fn finite() -> Self {
        Rule::with_default(RuleKind::Finite, "Please enter a valid number")
    }

    pub fn positive() -> Self {
        Rule::with_default(RuleKind::Positive, "Value must be positive")
    }

    pub fn non_negative() -> Self {
        Rule::with_default(RuleKind::NonNegative, "Value must be non-negative")
    }

    pub fn email() -> Self {
        Rule::with_default(RuleKind::Email, "Please enter a valid email address")
    }

    pub fn url() -> Self {
        Rule::with_default(RuleKind::Url, "Please enter a valid URL")
    }

    pub fn date() -> Self {
        Rule::with_default(RuleKind::Date, "Please enter a valid date")
    }

    pub fn pattern(regex: Regex) -> Self {
        Rule::with_default(RuleKind::Pattern(regex), "Invalid format")
    }

    pub fn custom<F>(predicate: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Rule::with_default(RuleKind::Custom(Arc::new(predicate)), "Invalid value")
    }

    /// Evaluate the rule. Anything that cannot be evaluated is a failure.
    pub fn check(&self, value: &Value) -> bool {
        match &self.kind {
            RuleKind::Required => match value {
                Value::String(s) => !s.trim().is_empty(),
                Value::Number(n) => n.as_f64().is_some_and(f64::is_finite),
                Value::Null => false,
                _ => true,
            },
            RuleKind::Min(min) => with_number(value, |n| n >= *min),
            RuleKind::Max(max) => with_number(value, |n| n <= *max),
            RuleKind::Range { min, max } => with_number(value, |n| n >= *min && n <= *max),
            RuleKind::Integer => with_number(value, |n| n.is_finite() && n.fract() == 0.0),
            RuleKind::Finite => coerce::to_number(value).is_finite(),
            RuleKind::Positive => with_number(value, |n| n > 0.0),
            RuleKind::NonNegative => with_number(value, |n| n >= 0.0),
            RuleKind::Email => coerce::to_text(value).is_some_and(|s| EMAIL_RE.is_match(&s)),
            RuleKind::Url => match value {
                Value::String(s) => url::Url::parse(s).is_ok(),
                _ => false,
            },
            RuleKind::Date => coerce::to_datetime(value).is_some(),
            RuleKind::Pattern(re) => coerce::to_text(value).is_some_and(|s| re.is_match(&s)),
            RuleKind::Custom(predicate) => predicate(value),
        }
    }
}

fn with_number(value: &Value, test: impl Fn(f64) -> bool) -> bool {
    let n = coerce::to_number(value);
    !n.is_nan() && test(n)
}

// ============================================================================
// Results
// ============================================================================

/// Outcome of checking one value against its rules.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    /// Failure messages in rule order
    pub errors: Vec<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        ValidationResult {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }
}

/// Outcome of checking a whole form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SchemaResult {
    /// True only if every field passed
    pub is_valid: bool,
    /// Result for every field in the schema
    pub fields: BTreeMap<String, ValidationResult>,
    /// Messages for failing fields only
    pub errors: BTreeMap<String, Vec<String>>,
}

impl SchemaResult {
    /// A result with a single failing field
    pub fn failure(field: impl Into<String>, message: impl Into<String>) -> Self {
        let field = field.into();
        let message = message.into();
        let mut result = SchemaResult::default();
        result.fields.insert(
            field.clone(),
            ValidationResult {
                is_valid: false,
                errors: vec![message.clone()],
            },
        );
        result.errors.insert(field, vec![message]);
        result
    }
}

// ============================================================================
// Schema
// ============================================================================

/// Ordered mapping from field name to the rules for that field.
#[derive(Debug, Clone, Default)]
pub struct ValidationSchema {
    fields: Vec<(String, Vec<Rule>)>,
}

impl ValidationSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the rules for a field
    pub fn field(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = rules,
            None => self.fields.push((name, rules)),
        }
        self
    }

    /// Append one rule to a field, declaring the field if needed
    pub fn rule(mut self, name: &str, rule: Rule) -> Self {
        match self.fields.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => existing.push(rule),
            None => self.fields.push((name.to_string(), vec![rule])),
        }
        self
    }

    pub fn rules_for(&self, name: &str) -> Option<&[Rule]> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, rules)| rules.as_slice())
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.fields.iter().map(|(n, r)| (n.as_str(), r.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// ============================================================================
// Entry Points
// ============================================================================

/// Check a value against every rule in order, collecting every failure.
pub fn validate_value(value: &Value, rules: &[Rule]) -> ValidationResult {
    let errors: Vec<String> = rules
        .iter()
        .filter(|rule| !rule.check(value))
        .map(|rule| rule.message.clone())
        .collect();

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// Check every schema field of `data`. Fields missing from `data` are
/// validated as null.
pub fn validate_schema(data: &Map<String, Value>, schema: &ValidationSchema) -> SchemaResult {
    let mut result = SchemaResult {
        is_valid: true,
        ..SchemaResult::default()
    };

    for (field, rules) in schema.iter() {
        let value = data.get(field).unwrap_or(&Value::Null);
        let field_result = validate_value(value, rules);
        if !field_result.is_valid {
            result.is_valid = false;
            result
                .errors
                .insert(field.to_string(), field_result.errors.clone());
        }
        result.fields.insert(field.to_string(), field_result);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_range_valid() {
        let result = validate_value(&json!(5), &[Rule::range(1.0, 10.0)]);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_positive_rejects_negative_with_one_error() {
        let result = validate_value(&json!(-1), &[Rule::positive()]);
        assert!(!result.is_valid);
        assert_eq!(result.errors, vec!["Value must be positive".to_string()]);
    }

    #[test]
    fn test_all_failures_collected_in_order() {
        let rules = [
            Rule::required(),
            Rule::positive().with_message("must be positive"),
            Rule::min(10.0).with_message("too small"),
        ];
        let result = validate_value(&json!(-3), &rules);
        assert_eq!(result.errors, vec!["must be positive", "too small"]);
    }

    #[test]
    fn test_required() {
        let rule = [Rule::required()];
        assert!(validate_value(&json!("x"), &rule).is_valid);
        assert!(validate_value(&json!(0), &rule).is_valid);
        assert!(validate_value(&json!(false), &rule).is_valid);
        assert!(!validate_value(&json!("   "), &rule).is_valid);
        assert!(!validate_value(&json!(""), &rule).is_valid);
        assert!(!validate_value(&Value::Null, &rule).is_valid);
    }

    #[test]
    fn test_numeric_rules_coerce_strings() {
        assert!(validate_value(&json!("12.5"), &[Rule::min(10.0)]).is_valid);
        assert!(validate_value(&json!("12kg"), &[Rule::max(12.0)]).is_valid);
        assert!(!validate_value(&json!("abc"), &[Rule::min(0.0)]).is_valid);
        assert!(!validate_value(&json!("abc"), &[Rule::max(0.0)]).is_valid);
        assert!(!validate_value(&Value::Null, &[Rule::non_negative()]).is_valid);
    }

    #[test]
    fn test_default_messages() {
        assert_eq!(Rule::min(100.0).message, "Value must be at least 100");
        assert_eq!(Rule::max(0.5).message, "Value must be at most 0.5");
        assert_eq!(Rule::range(1.0, 50.0).message, "Value must be between 1 and 50");
    }

    #[test]
    fn test_integer() {
        assert!(validate_value(&json!(4), &[Rule::integer()]).is_valid);
        assert!(validate_value(&json!("4.0"), &[Rule::integer()]).is_valid);
        assert!(!validate_value(&json!(4.5), &[Rule::integer()]).is_valid);
        assert!(!validate_value(&json!("Infinity"), &[Rule::integer()]).is_valid);
    }

    #[test]
    fn test_positive_and_non_negative_boundaries() {
        assert!(!validate_value(&json!(0), &[Rule::positive()]).is_valid);
        assert!(validate_value(&json!(0), &[Rule::non_negative()]).is_valid);
        assert!(!validate_value(&json!(-0.01), &[Rule::non_negative()]).is_valid);
    }

    #[test]
    fn test_pattern() {
        let rule = [Rule::pattern(Regex::new(r"^\d{5}$").unwrap())];
        assert!(validate_value(&json!("90210"), &rule).is_valid);
        assert!(validate_value(&json!(90210), &rule).is_valid);
        assert!(!validate_value(&json!("9021"), &rule).is_valid);
        assert!(!validate_value(&Value::Null, &rule).is_valid);
    }

    #[test]
    fn test_email_url_date() {
        assert!(validate_value(&json!("a@b.co"), &[Rule::email()]).is_valid);
        assert!(!validate_value(&json!("a@b"), &[Rule::email()]).is_valid);
        assert!(validate_value(&json!("https://kceva.com/x"), &[Rule::url()]).is_valid);
        assert!(!validate_value(&json!("kceva dot com"), &[Rule::url()]).is_valid);
        assert!(validate_value(&json!("2000-01-01"), &[Rule::date()]).is_valid);
        assert!(!validate_value(&json!("yesterday"), &[Rule::date()]).is_valid);
    }

    #[test]
    fn test_custom_gets_raw_value() {
        let rule = Rule::custom(|v| v.as_str() == Some("yes")).with_message("say yes");
        assert!(validate_value(&json!("yes"), &[rule.clone()]).is_valid);
        let result = validate_value(&json!(1), &[rule]);
        assert_eq!(result.errors, vec!["say yes"]);
    }

    #[test]
    fn test_schema_reports_only_failing_fields() {
        let schema = ValidationSchema::new()
            .field("a", vec![Rule::required()])
            .field("b", vec![Rule::required()]);
        let result = validate_schema(&object(json!({ "a": 5 })), &schema);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors.contains_key("b"));
        assert!(result.fields["a"].is_valid);
        assert_eq!(result.fields.len(), 2);
    }

    #[test]
    fn test_schema_all_valid() {
        let schema = ValidationSchema::new().field("x", vec![Rule::range(0.0, 1.0)]);
        let result = validate_schema(&object(json!({ "x": "0.5", "extra": 1 })), &schema);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_schema_field_replaces_rules() {
        let schema = ValidationSchema::new()
            .field("x", vec![Rule::required()])
            .field("x", vec![Rule::positive(), Rule::integer()]);
        assert_eq!(schema.len(), 1);
        assert_eq!(schema.rules_for("x").map(|r| r.len()), Some(2));
    }

    #[test]
    fn test_finite() {
        let rules = [Rule::finite()];
        assert!(validate_value(&json!("12.5"), &rules).is_valid);
        assert!(validate_value(&json!(-3), &rules).is_valid);
        for bad in [json!("abc"), json!("Infinity"), json!("-Infinity"), json!(""), Value::Null] {
            let result = validate_value(&bad, &rules);
            assert_eq!(result.errors, vec!["Please enter a valid number"], "{}", bad);
        }
    }

    #[test]
    fn test_schema_rule_appends() {
        let schema = ValidationSchema::new()
            .field("x", vec![Rule::required()])
            .rule("x", Rule::finite())
            .rule("y", Rule::finite());
        assert_eq!(schema.rules_for("x").map(|r| r.len()), Some(2));
        assert_eq!(schema.field_names().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn test_single_failure_result() {
        let result = SchemaResult::failure("term", "Loan term must be a whole number");
        assert!(!result.is_valid);
        assert_eq!(result.errors["term"], vec!["Loan term must be a whole number"]);
        assert!(!result.fields["term"].is_valid);
    }
}
