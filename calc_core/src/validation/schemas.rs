//! Ready-made schemas for the calculators whose forms are validated before
//! computing.

use chrono::{DateTime, Utc};

use super::{coerce, Rule, ValidationSchema};

/// Lowest Celsius temperature accepted by the temperature converter
pub const ABSOLUTE_ZERO_C: f64 = -273.15;

pub fn bmi() -> ValidationSchema {
    ValidationSchema::new()
        .field(
            "weight",
            vec![
                Rule::required().with_message("Weight is required"),
                Rule::positive().with_message("Weight must be positive"),
                Rule::range(1.0, 1000.0).with_message("Weight must be between 1 and 1000 kg"),
            ],
        )
        .field(
            "height",
            vec![
                Rule::required().with_message("Height is required"),
                Rule::positive().with_message("Height must be positive"),
                Rule::range(50.0, 300.0).with_message("Height must be between 50 and 300 cm"),
            ],
        )
}

pub fn loan() -> ValidationSchema {
    ValidationSchema::new()
        .field(
            "principal",
            vec![
                Rule::required().with_message("Loan amount is required"),
                Rule::positive().with_message("Loan amount must be positive"),
                Rule::min(100.0).with_message("Minimum loan amount is $100"),
            ],
        )
        .field(
            "rate",
            vec![
                Rule::required().with_message("Interest rate is required"),
                Rule::non_negative().with_message("Interest rate cannot be negative"),
                Rule::max(50.0).with_message("Interest rate seems too high (max 50%)"),
            ],
        )
        .field(
            "term",
            vec![
                Rule::required().with_message("Loan term is required"),
                Rule::positive().with_message("Loan term must be positive"),
                Rule::integer().with_message("Loan term must be a whole number of years"),
                Rule::range(1.0, 50.0).with_message("Loan term must be between 1 and 50 years"),
            ],
        )
}

/// Age schema checked against the current clock
pub fn age() -> ValidationSchema {
    age_at(Utc::now())
}

/// Age schema with birth dates after `now` rejected
pub fn age_at(now: DateTime<Utc>) -> ValidationSchema {
    ValidationSchema::new().field(
        "birth_date",
        vec![
            Rule::required().with_message("Birth date is required"),
            Rule::date().with_message("Please enter a valid date"),
            Rule::custom(move |value| coerce::to_datetime(value).is_some_and(|d| d <= now))
                .with_message("Birth date cannot be in the future"),
        ],
    )
}

pub fn currency() -> ValidationSchema {
    ValidationSchema::new()
        .field(
            "amount",
            vec![
                Rule::required().with_message("Amount is required"),
                Rule::positive().with_message("Amount must be positive"),
                Rule::max(1e12).with_message("Amount is too large"),
            ],
        )
        .field(
            "from_currency",
            vec![Rule::required().with_message("Source currency is required")],
        )
        .field(
            "to_currency",
            vec![Rule::required().with_message("Target currency is required")],
        )
}

pub fn temperature() -> ValidationSchema {
    ValidationSchema::new()
        .field(
            "value",
            vec![
                Rule::required().with_message("Temperature value is required"),
                Rule::custom(|value| coerce::to_number(value) >= ABSOLUTE_ZERO_C)
                    .with_message("Temperature cannot be below absolute zero (-273.15°C)"),
            ],
        )
        .field(
            "from_unit",
            vec![Rule::required().with_message("Source unit is required")],
        )
        .field(
            "to_unit",
            vec![Rule::required().with_message("Target unit is required")],
        )
}

/// Look up a named schema (`bmi`, `loan`, `age`, `currency`, `temperature`)
pub fn for_calculator(name: &str) -> Option<ValidationSchema> {
    match name {
        "bmi" => Some(bmi()),
        "loan" => Some(loan()),
        "age" => Some(age()),
        "currency" => Some(currency()),
        "temperature" => Some(temperature()),
        _ => None,
    }
}
