//! # Finance Formulas
//!
//! Loan amortization (PMT), compound and simple interest, and tip splitting.
//! Rates are annual and given as decimals (`0.05` for 5%).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::formulas::finance::{loan_payment, simple_interest};
//!
//! let payment = loan_payment(200_000.0, 0.06, 360).unwrap();
//! assert!((payment - 1199.10).abs() < 0.01);
//!
//! let growth = simple_interest(1000.0, 0.05, 2.0);
//! assert_eq!(growth.final_amount, 1100.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Compounding periods per year used when none is given
pub const DEFAULT_COMPOUNDS_PER_YEAR: u32 = 12;

/// Monthly payment for a fully amortizing loan.
///
/// A zero rate spreads the principal evenly over the periods.
pub fn loan_payment(principal: f64, annual_rate: f64, periods: u32) -> CalcResult<f64> {
    if periods == 0 {
        return Err(CalcError::invalid_input("periods", "0", "Loan term must be positive"));
    }
    let n = f64::from(periods);
    if annual_rate == 0.0 {
        return Ok(principal / n);
    }

    let monthly_rate = annual_rate / 12.0;
    let growth = (1.0 + monthly_rate).powf(n);
    let payment = principal * (monthly_rate * growth) / (growth - 1.0);
    if !payment.is_finite() {
        return Err(CalcError::calculation_failed(
            "loan payment",
            format!("payment overflowed for rate {} over {} periods", annual_rate, periods),
        ));
    }
    Ok(payment)
}

/// Payment breakdown for a loan
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanSummary {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub payments: u32,
}

/// Summarize a loan given its term in whole years.
pub fn loan_summary(principal: f64, annual_rate: f64, years: u32) -> CalcResult<LoanSummary> {
    let payments = years.checked_mul(12).ok_or_else(|| {
        CalcError::invalid_input("term", years.to_string(), "Loan term is too long")
    })?;
    let monthly_payment = loan_payment(principal, annual_rate, payments)?;
    let total_payment = monthly_payment * f64::from(payments);
    Ok(LoanSummary {
        monthly_payment,
        total_payment,
        total_interest: total_payment - principal,
        payments,
    })
}

/// Balance after growth, and the part of it that is interest
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InterestResult {
    pub final_amount: f64,
    pub interest_earned: f64,
}

pub fn compound_interest(principal: f64, annual_rate: f64, years: f64, compounds_per_year: u32) -> CalcResult<InterestResult> {
    if compounds_per_year == 0 {
        return Err(CalcError::invalid_input(
            "compounds_per_year",
            "0",
            "Compounding frequency must be positive",
        ));
    }
    let k = f64::from(compounds_per_year);
    let final_amount = principal * (1.0 + annual_rate / k).powf(k * years);
    Ok(InterestResult {
        final_amount,
        interest_earned: final_amount - principal,
    })
}

pub fn simple_interest(principal: f64, annual_rate: f64, years: f64) -> InterestResult {
    let interest_earned = principal * annual_rate * years;
    InterestResult {
        final_amount: principal + interest_earned,
        interest_earned,
    }
}

/// Tip, total and per-person share of a bill
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TipResult {
    pub tip: f64,
    pub total: f64,
    pub per_person: f64,
}

pub fn tip(bill: f64, tip_percent: f64, people: u32) -> CalcResult<TipResult> {
    if people == 0 {
        return Err(CalcError::invalid_input("people", "0", "At least one person must pay"));
    }
    let tip = bill * tip_percent / 100.0;
    let total = bill + tip;
    Ok(TipResult {
        tip,
        total,
        per_person: total / f64::from(people),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_loan_payment() {
        let payment = loan_payment(100_000.0, 0.05, 360).unwrap();
        assert!(close(payment, 536.82, 0.01));
    }

    #[test]
    fn test_zero_rate_is_even_split() {
        assert_eq!(loan_payment(1200.0, 0.0, 12).unwrap(), 100.0);
    }

    #[test]
    fn test_zero_periods_rejected() {
        let err = loan_payment(1000.0, 0.05, 0).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_loan_summary() {
        let summary = loan_summary(10_000.0, 0.0, 1).unwrap();
        assert_eq!(summary.payments, 12);
        assert!(close(summary.total_payment, 10_000.0, 1e-9));
        assert!(close(summary.total_interest, 0.0, 1e-9));
    }

    #[test]
    fn test_compound_interest() {
        let result = compound_interest(1000.0, 0.05, 10.0, 1).unwrap();
        assert!(close(result.final_amount, 1628.89, 0.01));
        assert!(close(result.interest_earned, 628.89, 0.01));

        let monthly = compound_interest(1000.0, 0.05, 10.0, DEFAULT_COMPOUNDS_PER_YEAR).unwrap();
        assert!(monthly.final_amount > result.final_amount);
    }

    #[test]
    fn test_tip_split() {
        let result = tip(80.0, 15.0, 4).unwrap();
        assert_eq!(result.tip, 12.0);
        assert_eq!(result.total, 92.0);
        assert_eq!(result.per_person, 23.0);
        assert!(tip(80.0, 15.0, 0).is_err());
    }
}
