//! Organization-wide aggregates
//!
//! Derived totals for the dashboard. Nothing here is persisted: the shared
//! fund's position is always recomputed from the full transaction log, and
//! the member-side totals from the member collection.

use crate::models::{Member, Money, Transaction, TransactionKind};

/// Cash position of the shared fund, folded over the transaction log
///
/// Deposits and interest flow into the fund, disbursed loans flow out, and
/// repayments flow back in. The fold is order-independent: only sums are
/// involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OrganizationStats {
    /// Cash on hand in the shared fund
    pub org_balance: Money,
    /// Cumulative interest collected across all loans
    pub total_interest_earned: Money,
}

impl OrganizationStats {
    /// Fold the full transaction log into the fund's cash position
    pub fn compute(transactions: &[Transaction]) -> Self {
        let mut org_balance = Money::zero();
        let mut total_interest_earned = Money::zero();

        for txn in transactions {
            match txn.kind {
                TransactionKind::Deposit => org_balance += txn.amount,
                TransactionKind::InterestPaid => {
                    org_balance += txn.amount;
                    total_interest_earned += txn.amount;
                }
                TransactionKind::LoanTaken => org_balance -= txn.amount,
                TransactionKind::LoanRepayment => org_balance += txn.amount,
            }
        }

        Self {
            org_balance,
            total_interest_earned,
        }
    }
}

/// Member-side totals for the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MembershipTotals {
    /// Number of active members
    pub active_members: usize,
    /// Sum of all members' savings balances
    pub total_savings: Money,
    /// Sum of all members' outstanding loan principal
    pub total_loans_outstanding: Money,
}

impl MembershipTotals {
    /// Sum balances across the member collection
    ///
    /// Savings and principal include inactive members: soft-deleted members
    /// keep their balances, only the active count excludes them.
    pub fn compute(members: &[Member]) -> Self {
        let mut totals = Self::default();
        for member in members {
            if member.is_active {
                totals.active_members += 1;
            }
            totals.total_savings += member.total_savings;
            totals.total_loans_outstanding += member.current_loan_principal;
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::models::MemberId;

    fn txn(kind: TransactionKind, amount: i64) -> Transaction {
        Transaction::new(MemberId::new(), kind, Money::from_rupees(amount), Utc::now())
    }

    #[test]
    fn test_empty_log() {
        let stats = OrganizationStats::compute(&[]);
        assert!(stats.org_balance.is_zero());
        assert!(stats.total_interest_earned.is_zero());
    }

    #[test]
    fn test_cash_flow_directions() {
        let entries = vec![
            txn(TransactionKind::Deposit, 1000),
            txn(TransactionKind::LoanTaken, 5000),
            txn(TransactionKind::LoanRepayment, 2000),
            txn(TransactionKind::InterestPaid, 150),
        ];
        let stats = OrganizationStats::compute(&entries);
        // 1000 - 5000 + 2000 + 150
        assert_eq!(stats.org_balance.rupees(), -1850);
        assert_eq!(stats.total_interest_earned.rupees(), 150);
    }

    #[test]
    fn test_order_independence() {
        let entries = vec![
            txn(TransactionKind::Deposit, 1000),
            txn(TransactionKind::LoanTaken, 5000),
            txn(TransactionKind::LoanRepayment, 2000),
            txn(TransactionKind::InterestPaid, 150),
            txn(TransactionKind::Deposit, 300),
        ];
        let forward = OrganizationStats::compute(&entries);

        let mut reversed = entries.clone();
        reversed.reverse();
        assert_eq!(OrganizationStats::compute(&reversed), forward);

        let mut rotated = entries;
        rotated.rotate_left(2);
        assert_eq!(OrganizationStats::compute(&rotated), forward);
    }

    #[test]
    fn test_membership_totals() {
        let mut active = Member::new("Rahima Begum", "01712345678");
        active.total_savings = Money::from_rupees(500);
        active.current_loan_principal = Money::from_rupees(2000);

        let mut inactive = Member::new("Karim Mia", "01898765432");
        inactive.total_savings = Money::from_rupees(300);
        inactive.deactivate();

        let totals = MembershipTotals::compute(&[active, inactive]);
        assert_eq!(totals.active_members, 1);
        assert_eq!(totals.total_savings.rupees(), 800);
        assert_eq!(totals.total_loans_outstanding.rupees(), 2000);
    }
}
