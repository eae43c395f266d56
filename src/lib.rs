//! `shg_finance` is the loan amortization and financial-summary engine for a
//! savings-group (SHG) management platform.
//!
//! Members save monthly and borrow from the pooled fund; presidents and
//! admins watch dashboards built from those records. This crate holds the
//! numeric core behind all of it:
//! - **Amortization**: EMI (equated monthly installment), total repayment,
//!   interest, and month-by-month repayment schedules.
//! - **Aggregation**: group and platform dashboard figures derived from
//!   savings, loan, membership, and transaction rows.
//! - **Formatting**: `en-IN` rupee and date rendering, and the `YYYY-MM`
//!   savings period key.
//!
//! Everything is pure, synchronous computation over `rust_decimal` values:
//! identical inputs always produce identical outputs, so callers can rerun
//! any derivation freely. Fetching rows, authentication, and authorization
//! live with the caller.
//!
//! ## Usage
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use shg_finance::{compute_emi, compute_interest_amount, compute_total_repayment, format_currency};
//!
//! fn main() -> Result<(), anyhow::Error> {
//!     let emi = compute_emi(dec!(100_000), dec!(12), 12)?;
//!     let total = compute_total_repayment(emi, 12);
//!     let interest = compute_interest_amount(dec!(100_000), total)?;
//!
//!     println!("EMI:      {}", format_currency(emi));
//!     println!("Total:    {}", format_currency(total));
//!     println!("Interest: {}", format_currency(interest));
//!     Ok(())
//! }
//! ```

pub mod aggregation;
pub mod amortization;
pub mod formatting;
pub mod records;

pub use aggregation::{
    GroupFinancials, GroupSummary, PlatformStats, aggregate_platform_stats, aggregate_savings,
    count_active_loans, group_financials, group_summary, sum_transactions_by_type,
};
pub use amortization::{
    ScheduleEntry, amortization_schedule, compute_emi, compute_interest_amount,
    compute_total_repayment, outstanding_balance,
};
pub use formatting::{format_currency, format_date, parse_currency, period_key};
pub use records::{
    Group, GroupMembership, GroupStatus, Loan, LoanStatus, RecordStatus, SavingsRecord, Transaction,
};
