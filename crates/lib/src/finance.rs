//! # EMI Finance Calculator
//!
//! The closed-form equated monthly installment math behind the site's
//! finance calculator: `P * r * (1 + r)^n / ((1 + r)^n - 1)` with a monthly
//! rate `r` and term `n` in months. Pure arithmetic, no currency handling
//! beyond rounding to cents.

use crate::errors::ChatError;
use serde::Serialize;

/// The result of an EMI calculation, rounded to cents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmiQuote {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
}

/// Calculates the equated monthly installment for a loan.
///
/// `annual_rate_pct` is the nominal annual rate as a percentage (e.g. `2.99`
/// for 2.99% APR). A zero rate degenerates to straight division of the
/// principal over the term.
pub fn calculate_emi(
    principal: f64,
    annual_rate_pct: f64,
    term_months: u32,
) -> Result<EmiQuote, ChatError> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(ChatError::InvalidInput(
            "Principal must be a positive amount".to_string(),
        ));
    }
    if !annual_rate_pct.is_finite() || annual_rate_pct < 0.0 {
        return Err(ChatError::InvalidInput(
            "Annual rate must not be negative".to_string(),
        ));
    }
    if term_months == 0 {
        return Err(ChatError::InvalidInput(
            "Term must be at least one month".to_string(),
        ));
    }

    let n = f64::from(term_months);
    let monthly_payment = if annual_rate_pct == 0.0 {
        principal / n
    } else {
        let r = annual_rate_pct / 100.0 / 12.0;
        let growth = (1.0 + r).powf(n);
        principal * r * growth / (growth - 1.0)
    };

    // Extreme rate/term combinations overflow the growth factor to infinity,
    // which turns the quotient into NaN.
    if !monthly_payment.is_finite() {
        return Err(ChatError::InvalidInput(
            "Loan terms are out of range".to_string(),
        ));
    }

    let monthly_payment = round_cents(monthly_payment);
    let total_payment = round_cents(monthly_payment * n);
    Ok(EmiQuote {
        monthly_payment,
        total_payment,
        total_interest: round_cents(total_payment - principal),
    })
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
