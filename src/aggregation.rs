//! Dashboard and report aggregates derived from store records.
//!
//! Every aggregate is an independent filter-and-reduce over one collection.
//! A collection that failed to load upstream degrades that aggregate to its
//! identity value; the other figures are still produced, so a dashboard
//! stays partially usable when one query fails.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::records::{
    Group, GroupMembership, GroupStatus, Loan, RecordStatus, SavingsRecord, Transaction,
};

/// Financial position of a single group. Recomputed on every read, never
/// cached past the current view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupFinancials {
    /// Sum of approved savings contributions.
    pub total_savings: Decimal,
    /// Loans currently disbursed or repaying.
    pub active_loan_count: usize,
}

/// The figures on a president's group dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSummary {
    pub total_members: usize,
    /// Membership requests awaiting the president's approval.
    pub pending_approvals: usize,
    pub total_savings: Decimal,
    pub active_loans: usize,
    /// Funds the group holds; currently equal to its approved savings.
    pub group_balance: Decimal,
}

/// Platform-wide figures on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformStats {
    pub total_groups: usize,
    pub pending_groups: usize,
    pub approved_groups: usize,
    pub active_members: usize,
    pub total_loans: usize,
    pub total_savings: Decimal,
}

/// Sums contribution amounts over the records as given.
///
/// No status filter is applied here; a view that distinguishes approved
/// from pending contributions filters before calling.
pub fn aggregate_savings(records: &[SavingsRecord]) -> Decimal {
    records.iter().map(|record| record.amount).sum()
}

/// Counts loans that are disbursed or repaying. No other status counts as
/// active, including approved-but-not-yet-disbursed.
pub fn count_active_loans(loans: &[Loan]) -> usize {
    loans.iter().filter(|loan| loan.status.is_active()).count()
}

/// Derives a group's financial position from its savings and loan rows.
pub fn group_financials(savings: &[SavingsRecord], loans: &[Loan]) -> GroupFinancials {
    let total_savings = savings
        .iter()
        .filter(|record| record.status == RecordStatus::Approved)
        .map(|record| record.amount)
        .sum();

    GroupFinancials {
        total_savings,
        active_loan_count: count_active_loans(loans),
    }
}

/// Derives the full president-dashboard summary for one group.
pub fn group_summary(
    members: &[GroupMembership],
    savings: &[SavingsRecord],
    loans: &[Loan],
) -> GroupSummary {
    let financials = group_financials(savings, loans);
    let total_members = members
        .iter()
        .filter(|member| member.status == RecordStatus::Approved)
        .count();
    let pending_approvals = members
        .iter()
        .filter(|member| member.status == RecordStatus::Pending)
        .count();

    GroupSummary {
        total_members,
        pending_approvals,
        total_savings: financials.total_savings,
        active_loans: financials.active_loan_count,
        group_balance: financials.total_savings,
    }
}

/// Derives platform-wide statistics across all groups.
///
/// Each source collection is optional: `None` means that query failed or
/// has not loaded, and only the aggregates drawn from it fall back to zero.
pub fn aggregate_platform_stats(
    groups: Option<&[Group]>,
    members: Option<&[GroupMembership]>,
    loans: Option<&[Loan]>,
    savings: Option<&[SavingsRecord]>,
) -> PlatformStats {
    let groups = groups.unwrap_or_default();
    let members = members.unwrap_or_default();
    let loans = loans.unwrap_or_default();
    let savings = savings.unwrap_or_default();

    PlatformStats {
        total_groups: groups.len(),
        pending_groups: groups
            .iter()
            .filter(|group| group.status == GroupStatus::Pending)
            .count(),
        approved_groups: groups
            .iter()
            .filter(|group| group.status == GroupStatus::Approved)
            .count(),
        active_members: members
            .iter()
            .filter(|member| member.status == RecordStatus::Approved)
            .count(),
        total_loans: loans.len(),
        total_savings: aggregate_savings(savings),
    }
}

/// Totals the group's ledger per transaction type, ordered by type name.
pub fn sum_transactions_by_type(transactions: &[Transaction]) -> BTreeMap<String, Decimal> {
    let mut totals = BTreeMap::new();
    for transaction in transactions {
        *totals
            .entry(transaction.transaction_type.clone())
            .or_insert(Decimal::ZERO) += transaction.amount;
    }
    totals
}
