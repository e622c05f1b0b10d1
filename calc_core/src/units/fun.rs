//! Random generators. Each call draws from the thread-local RNG.

use serde_json::{json, Map, Value};

use super::{flag, number, output, whole, CalculatorUnit, FieldKind, FieldSpec};
use crate::errors::CalcResult;
use crate::formulas::random::{self, MAX_DICE};
use crate::validation::{Rule, ValidationSchema};

pub struct Dice;

impl CalculatorUnit for Dice {
    fn key(&self) -> &'static str {
        "dice"
    }

    fn title(&self) -> &'static str {
        "Dice Roller"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::number("count", "Number of dice").with_default("1"),
            FieldSpec::number("sides", "Sides per die").with_default("6"),
        ];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        ValidationSchema::new()
            .field(
                "count",
                vec![
                    Rule::integer().with_message("Number of dice must be a whole number"),
                    Rule::range(1.0, f64::from(MAX_DICE))
                        .with_message(format!("Roll between 1 and {} dice", MAX_DICE)),
                ],
            )
            .field(
                "sides",
                vec![
                    Rule::integer().with_message("Sides must be a whole number"),
                    Rule::range(2.0, 1000.0).with_message("A die needs between 2 and 1000 sides"),
                ],
            )
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        let count = whole(inputs, "count")?;
        let sides = whole(inputs, "sides")?;
        output(&random::roll_dice(&mut rand::thread_rng(), count, sides)?)
    }
}

pub struct Coin;

impl CalculatorUnit for Coin {
    fn key(&self) -> &'static str {
        "coin"
    }

    fn title(&self) -> &'static str {
        "Coin Flip"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        &[]
    }

    fn schema(&self) -> ValidationSchema {
        ValidationSchema::new()
    }

    fn calculate(&self, _inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        let side = random::flip_coin(&mut rand::thread_rng());
        output(&json!({ "side": side, "label": side.to_string() }))
    }
}

pub struct RandomNumber;

impl CalculatorUnit for RandomNumber {
    fn key(&self) -> &'static str {
        "random-number"
    }

    fn title(&self) -> &'static str {
        "Random Number Generator"
    }

    fn fields(&self) -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::number("min", "Minimum").with_default("1"),
            FieldSpec::number("max", "Maximum").with_default("100"),
            FieldSpec::new("integer", "Whole numbers only", FieldKind::Toggle).with_default("true"),
        ];
        FIELDS
    }

    fn schema(&self) -> ValidationSchema {
        ValidationSchema::new()
            .field("min", vec![Rule::required().with_message("Minimum is required")])
            .field("max", vec![Rule::required().with_message("Maximum is required")])
    }

    fn calculate(&self, inputs: &Map<String, Value>) -> CalcResult<Map<String, Value>> {
        let min = number(inputs, "min")?;
        let max = number(inputs, "max")?;
        let integer = flag(inputs, "integer", true);
        let value = random::random_number(&mut rand::thread_rng(), min, max, integer)?;
        output(&json!({ "value": value }))
    }
}
