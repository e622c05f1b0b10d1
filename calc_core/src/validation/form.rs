//! Stateful form validation
//!
//! Tracks the current form data, per-field errors and which fields the user
//! has touched, so a renderer only shows errors for fields already visited.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::{Map, Value};

use super::{validate_schema, validate_value, SchemaResult, ValidationResult, ValidationSchema};

#[derive(Debug, Clone)]
pub struct FormValidator {
    schema: ValidationSchema,
    data: Map<String, Value>,
    errors: BTreeMap<String, Vec<String>>,
    touched: BTreeSet<String>,
    is_valid: bool,
}

impl FormValidator {
    pub fn new(schema: ValidationSchema, initial: Map<String, Value>) -> Self {
        FormValidator {
            schema,
            data: initial,
            errors: BTreeMap::new(),
            touched: BTreeSet::new(),
            is_valid: true,
        }
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn errors(&self) -> &BTreeMap<String, Vec<String>> {
        &self.errors
    }

    pub fn is_touched(&self, field: &str) -> bool {
        self.touched.contains(field)
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Validate one field and mark it touched. Fields outside the schema
    /// always pass and are left untouched.
    pub fn validate_field(&mut self, field: &str, value: &Value) -> ValidationResult {
        let Some(rules) = self.schema.rules_for(field) else {
            return ValidationResult::valid();
        };

        let result = validate_value(value, rules);
        self.errors.insert(field.to_string(), result.errors.clone());
        self.touched.insert(field.to_string());
        self.is_valid = self.errors.values().all(Vec::is_empty);
        result
    }

    /// Validate the whole form and mark every schema field touched.
    pub fn validate_all(&mut self) -> SchemaResult {
        let result = validate_schema(&self.data, &self.schema);
        self.errors = result.errors.clone();
        self.touched = self.schema.field_names().map(str::to_string).collect();
        self.is_valid = result.is_valid;
        result
    }

    /// Store a new value and validate it
    pub fn update_field(&mut self, field: &str, value: Value) -> ValidationResult {
        let result = self.validate_field(field, &value);
        self.data.insert(field.to_string(), value);
        result
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
        self.touched.clear();
        self.is_valid = true;
    }

    /// First error of a touched field
    pub fn field_error(&self, field: &str) -> Option<&str> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors
            .get(field)
            .and_then(|errors| errors.first())
            .map(String::as_str)
    }

    pub fn has_field_error(&self, field: &str) -> bool {
        self.field_error(field).is_some()
    }
}
