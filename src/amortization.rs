//! EMI (equated monthly installment) calculations for group loans.
//!
//! All arithmetic is done in `Decimal` and no function here rounds
//! internally. Rounding to display precision happens once, at format time,
//! so derived totals stay exact through intermediate steps.

use anyhow::Result;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;

use crate::records::Loan;

/// Payment breakdown for a single month of a repayment schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleEntry {
    /// 1-based month number within the term.
    pub month: u32,
    /// Portion of the installment covering interest on the open balance.
    pub interest_component: Decimal,
    /// Portion of the installment reducing the principal.
    pub principal_component: Decimal,
    /// Balance remaining after this installment.
    pub closing_balance: Decimal,
}

/// Converts an annual percentage rate to the flat monthly rate used for
/// EMI loans: `annual / 12 / 100`.
fn monthly_rate(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / dec!(12) / dec!(100)
}

/// Calculates the equated monthly installment for a loan.
///
/// Uses the standard reducing-balance formula
/// `EMI = P * r * (1 + r)^n / ((1 + r)^n - 1)` with the flat monthly rate
/// `r = annual / 12 / 100`. A zero rate degenerates to flat division of
/// the principal over the term; the compounding formula is undefined there
/// and is special-cased rather than guarded.
///
/// # Arguments
///
/// * `principal` - The amount borrowed. Must be positive.
/// * `annual_rate_percent` - Annual interest rate as a percentage (e.g. `12` for 12%).
/// * `term_months` - The number of monthly installments.
///
/// # Errors
///
/// Returns an error if `term_months` is zero, `principal` is not positive,
/// or the rate is negative. A silently wrong installment is a financial
/// defect, so invalid inputs fail rather than produce a number.
pub fn compute_emi(
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
) -> Result<Decimal> {
    if term_months == 0 {
        return Err(anyhow::anyhow!("Term months cannot be zero."));
    }
    if principal <= Decimal::ZERO {
        return Err(anyhow::anyhow!("Principal must be positive."));
    }
    if annual_rate_percent < Decimal::ZERO {
        return Err(anyhow::anyhow!("Interest rate cannot be negative."));
    }

    let rate = monthly_rate(annual_rate_percent);
    if rate.is_zero() {
        return Ok(principal / Decimal::from(term_months));
    }

    let growth = (dec!(1) + rate).powu(term_months.into());
    Ok(principal * rate * growth / (growth - dec!(1)))
}

/// Total amount repaid over the life of the loan: `emi * term_months`.
pub fn compute_total_repayment(emi_amount: Decimal, term_months: u32) -> Decimal {
    emi_amount * Decimal::from(term_months)
}

/// Interest paid over the life of the loan: `total_repayment - principal`.
///
/// Zero is legitimate (a zero-rate loan). A negative result means the
/// caller derived the total from an installment and term inconsistent with
/// the stated principal, so it is reported as an error instead of being
/// clamped away.
pub fn compute_interest_amount(principal: Decimal, total_repayment: Decimal) -> Result<Decimal> {
    let interest = total_repayment - principal;
    if interest < Decimal::ZERO {
        return Err(anyhow::anyhow!(
            "Total repayment {} is below principal {}; inconsistent loan figures.",
            total_repayment,
            principal
        ));
    }
    Ok(interest)
}

/// Builds the month-by-month repayment schedule for a loan.
///
/// Each installment is split into its interest and principal components
/// against the running balance. The final balance clamps at zero so a
/// residual from non-terminating division never shows as a negative debt.
///
/// # Errors
///
/// Same input requirements as [`compute_emi`].
pub fn amortization_schedule(
    principal: Decimal,
    annual_rate_percent: Decimal,
    term_months: u32,
) -> Result<Vec<ScheduleEntry>> {
    let emi = compute_emi(principal, annual_rate_percent, term_months)?;
    let rate = monthly_rate(annual_rate_percent);

    let mut balance = principal;
    let mut schedule = Vec::with_capacity(term_months as usize);

    for month in 1..=term_months {
        let interest_component = balance * rate;
        let principal_component = emi - interest_component;
        balance -= principal_component;
        schedule.push(ScheduleEntry {
            month,
            interest_component,
            principal_component,
            closing_balance: balance.max(Decimal::ZERO),
        });
    }

    Ok(schedule)
}

/// Amount still owed on a loan, from its row's running `total_repaid`.
///
/// The installment is recomputed from the row's principal, rate, and term;
/// the stored `emi_amount` copy is never trusted, so a row whose rate or
/// term was edited after creation still yields a consistent figure.
///
/// # Errors
///
/// Fails on invalid loan terms, or if `total_repaid` exceeds the total
/// repayment (an overpaid loan indicates corrupt figures upstream).
pub fn outstanding_balance(loan: &Loan) -> Result<Decimal> {
    let emi = compute_emi(loan.principal, loan.annual_interest_rate, loan.term_months)?;
    let total = compute_total_repayment(emi, loan.term_months);
    let outstanding = total - loan.total_repaid;
    if outstanding < Decimal::ZERO {
        return Err(anyhow::anyhow!(
            "Repaid amount {} exceeds total repayment {}.",
            loan.total_repaid,
            total
        ));
    }
    Ok(outstanding)
}
