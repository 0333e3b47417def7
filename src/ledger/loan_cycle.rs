//! Loan-cycle summary
//!
//! A loan cycle runs from a loan's disbursement to the present. The current
//! cycle starts at the member's most recent LoanTaken entry, and repayment
//! and interest activity within it is summarized for display.

use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::models::{Member, Money, Transaction, TransactionKind};

/// Summary of the member's current loan cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanCycleSummary {
    /// When the current cycle's loan was disbursed
    pub start_date: DateTime<Utc>,
    /// Number of repayment installments within the cycle
    pub repayment_count: usize,
    /// Principal repaid within the cycle
    pub total_principal_repaid: Money,
    /// Interest collected within the cycle
    pub total_interest_paid: Money,
}

/// Summarize the member's current loan cycle, if any.
///
/// Returns `None` when the member has no outstanding principal, and also
/// when the principal is nonzero but no LoanTaken entry exists (inconsistent
/// state: nothing displayable rather than an error).
///
/// The cycle boundary is the member's latest LoanTaken entry. When a new
/// loan is taken before the previous one is cleared, the cycle re-bases at
/// the new disbursement: repayments before it are not counted here, even
/// though the outstanding principal still includes the older loan.
pub fn loan_cycle_summary(member: &Member, transactions: &[Transaction]) -> Option<LoanCycleSummary> {
    if !member.has_active_loan() {
        return None;
    }

    let cycle_start = transactions
        .iter()
        .filter(|t| t.member_id == member.id && t.kind == TransactionKind::LoanTaken)
        .map(|t| t.date)
        .max()?;

    let mut summary = LoanCycleSummary {
        start_date: cycle_start,
        repayment_count: 0,
        total_principal_repaid: Money::zero(),
        total_interest_paid: Money::zero(),
    };

    for txn in transactions
        .iter()
        .filter(|t| t.member_id == member.id && t.date >= cycle_start)
    {
        match txn.kind {
            TransactionKind::LoanRepayment => {
                summary.repayment_count += 1;
                summary.total_principal_repaid += txn.amount;
            }
            TransactionKind::InterestPaid => {
                summary.total_interest_paid += txn.amount;
            }
            _ => {}
        }
    }

    Some(summary)
}

/// Interest due for one month on the member's outstanding principal,
/// rounded to the nearest rupee.
pub fn estimated_interest_due(member: &Member, settings: &Settings) -> Money {
    let principal = member.current_loan_principal.rupees() as f64;
    Money::from_rupees((principal * settings.interest_rate / 100.0).round() as i64)
}
