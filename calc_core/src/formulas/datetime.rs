//! Calendar age.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Whole years, months and days between a birth date and a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Age {
    pub years: u32,
    pub months: u32,
    pub days: u32,
    pub total_days: i64,
}

/// Age on `today` of someone born on `birth`.
///
/// Whole months are counted first; adding them to a month-end birth date
/// clamps to the end of the shorter month, and the remaining days are
/// counted from there. Jan 31 to Mar 1 (leap year) is one month and one day.
pub fn age(birth: NaiveDate, today: NaiveDate) -> CalcResult<Age> {
    if birth > today {
        return Err(CalcError::invalid_input(
            "birth_date",
            birth.to_string(),
            "Birth date cannot be in the future",
        ));
    }

    let mut months = (today.year() - birth.year()) * 12 + today.month() as i32 - birth.month() as i32;
    if today.day() < birth.day() {
        months -= 1;
    }
    let months = months.max(0) as u32;

    let anchor = birth.checked_add_months(Months::new(months)).ok_or_else(|| {
        CalcError::calculation_failed("age", format!("date out of range adding {} months", months))
    })?;

    Ok(Age {
        years: months / 12,
        months: months % 12,
        days: (today - anchor).num_days().max(0) as u32,
        total_days: (today - birth).num_days(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_age_exact_birthday() {
        let a = age(d(1990, 6, 15), d(2024, 6, 15)).unwrap();
        assert_eq!((a.years, a.months, a.days), (34, 0, 0));
    }

    #[test]
    fn test_age_day_before_birthday() {
        let a = age(d(1990, 6, 15), d(2024, 6, 14)).unwrap();
        assert_eq!((a.years, a.months, a.days), (33, 11, 30));
    }

    #[test]
    fn test_age_month_end() {
        let a = age(d(2024, 1, 31), d(2024, 3, 1)).unwrap();
        assert_eq!((a.years, a.months, a.days), (0, 1, 1));
        assert_eq!(a.total_days, 30);
    }

    #[test]
    fn test_future_birth_rejected() {
        assert!(age(d(2030, 1, 1), d(2024, 1, 1)).is_err());
    }
}
