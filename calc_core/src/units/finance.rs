//! Loan, interest and tip calculators.

use serde_json::{json, Map, Value};

use super::{number, output, whole, CalculatorUnit, FieldSpec};
use crate::errors::CalcResult;
use crate::format::round_to;
use crate::formulas::finance;
use crate::validation::{schemas, Rule, ValidationSchema};

fn money(x: f64) -> f64 {
    round_to(x, 2)
}

/// Amortizing loan payment. Rate in percent, term in years.
pub struct Loan;

impl CalculatorUnit for Loan {
    fn key(&self) -> &'static str {
        "loan"
    }

    fn title(&self) -> &'static str {
        "Loan Payment"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::number("principal", "Loan amount"),
            FieldSpec::number("rate", "Annual interest rate (%)"),
            FieldSpec::number("term", "Loan term (years)"),
        ];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        schemas::loan()
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        let principal = number(inputs, "principal")?;
        let rate = number(inputs, "rate")? / 100.0;
        let years = whole(inputs, "term")?;

        let summary = finance::loan_summary(principal, rate, years)?;
        output(&json!({
            "monthly_payment": money(summary.monthly_payment),
            "total_payment": money(summary.total_payment),
            "total_interest": money(summary.total_interest),
            "payments": summary.payments,
        }))
    }
}

pub struct CompoundInterest;

impl CalculatorUnit for CompoundInterest {
    fn key(&self) -> &'static str {
        "compound-interest"
    }

    fn title(&self) -> &'static str {
        "Compound Interest"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::number("principal", "Initial amount"),
            FieldSpec::number("rate", "Annual interest rate (%)"),
            FieldSpec::number("years", "Years"),
            FieldSpec::number("compounds_per_year", "Compounds per year").with_default("12"),
        ];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        ValidationSchema::new()
            .field("principal", vec![Rule::required(), Rule::non_negative()])
            .field("rate", vec![Rule::required(), Rule::non_negative(), Rule::max(100.0)])
            .field("years", vec![Rule::required(), Rule::non_negative(), Rule::max(200.0)])
            .field(
                "compounds_per_year",
                vec![Rule::integer(), Rule::range(1.0, 365.0)],
            )
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        let result = finance::compound_interest(
            number(inputs, "principal")?,
            number(inputs, "rate")? / 100.0,
            number(inputs, "years")?,
            whole(inputs, "compounds_per_year")?,
        )?;
        output(&json!({
            "final_amount": money(result.final_amount),
            "interest_earned": money(result.interest_earned),
        }))
    }
}

pub struct SimpleInterest;

impl CalculatorUnit for SimpleInterest {
    fn key(&self) -> &'static str {
        "simple-interest"
    }

    fn title(&self) -> &'static str {
        "Simple Interest"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::number("principal", "Principal"),
            FieldSpec::number("rate", "Annual interest rate (%)"),
            FieldSpec::number("years", "Years"),
        ];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        ValidationSchema::new()
            .field("principal", vec![Rule::required(), Rule::non_negative()])
            .field("rate", vec![Rule::required(), Rule::non_negative()])
            .field("years", vec![Rule::required(), Rule::non_negative()])
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        let result = finance::simple_interest(
            number(inputs, "principal")?,
            number(inputs, "rate")? / 100.0,
            number(inputs, "years")?,
        );
        output(&json!({
            "final_amount": money(result.final_amount),
            "interest_earned": money(result.interest_earned),
        }))
    }
}

/// Tip and bill split
pub struct Tip;

impl CalculatorUnit for Tip {
    fn key(&self) -> &'static str {
        "tip"
    }

    fn title(&self) -> &'static str {
        "Tip and Split"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::number("bill", "Bill amount"),
            FieldSpec::number("tip_percent", "Tip (%)").with_default("15"),
            FieldSpec::number("people", "Number of people").with_default("1"),
        ];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        ValidationSchema::new()
            .field(
                "bill",
                vec![
                    Rule::required().with_message("Bill amount is required"),
                    Rule::non_negative().with_message("Bill amount cannot be negative"),
                ],
            )
            .field("tip_percent", vec![Rule::range(0.0, 100.0)])
            .field(
                "people",
                vec![
                    Rule::integer(),
                    Rule::range(1.0, 100.0).with_message("Split between 1 and 100 people"),
                ],
            )
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        let result = finance::tip(
            number(inputs, "bill")?,
            number(inputs, "tip_percent")?,
            whole(inputs, "people")?,
        )?;
        output(&json!({
            "tip": money(result.tip),
            "total": money(result.total),
            "per_person": money(result.per_person),
        }))
    }
}
