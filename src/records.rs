//! Row-shaped records as delivered by the backing store.
//!
//! These types mirror the store's snake_case rows so a fetched JSON payload
//! deserializes directly. The library never mutates them; every function in
//! this crate reads records and derives fresh values.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle of a loan from application to settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Pending,
    Approved,
    Disbursed,
    Repaying,
    Closed,
    Rejected,
}

impl LoanStatus {
    /// A loan is active once money has left the group and is not yet settled.
    /// Approved-but-not-disbursed does not count.
    pub fn is_active(self) -> bool {
        matches!(self, LoanStatus::Disbursed | LoanStatus::Repaying)
    }
}

/// Approval state shared by savings records and group memberships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Pending,
    Approved,
}

/// Approval state of a savings group itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    Pending,
    Approved,
    Rejected,
}

/// A member loan as stored.
///
/// `emi_amount` is persisted at application time as a convenience copy;
/// anything that needs a trustworthy figure recomputes it from the
/// principal, rate, and term instead of reading it back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub principal: Decimal,
    /// Annual interest rate as a percentage, e.g. `12` for 12%.
    pub annual_interest_rate: Decimal,
    pub term_months: u32,
    pub status: LoanStatus,
    pub emi_amount: Decimal,
    pub total_repaid: Decimal,
}

/// One member's contribution for one savings period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsRecord {
    /// Period key in `YYYY-MM` form; the store enforces one record per
    /// member per period.
    pub month_year: String,
    pub amount: Decimal,
    pub status: RecordStatus,
}

/// A savings group as stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub status: GroupStatus,
    /// Group-wide annual lending rate applied to new loan applications.
    pub interest_rate: Decimal,
}

/// A member's row in a group, carrying their running savings total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupMembership {
    pub status: RecordStatus,
    pub total_savings: Decimal,
}

/// A ledger entry in the group's transaction history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_type: String,
    pub amount: Decimal,
}
