//! Transaction application
//!
//! The single set of rules by which a ledger entry changes a member's
//! balances. Pure functions: same input, same output, no I/O.

use crate::error::{SamityError, SamityResult};
use crate::models::{Member, Money, Transaction, TransactionKind};

/// Apply one transaction to a member, returning the updated member.
///
/// - `Deposit` adds to `total_savings`.
/// - `LoanTaken` adds to `current_loan_principal`.
/// - `LoanRepayment` subtracts from the principal, clamping at zero. The
///   service boundary rejects over-repayments before they get here; the
///   clamp only preserves the non-negativity invariant if one slips through.
/// - `InterestPaid` changes neither balance: interest is organization
///   revenue, not a member asset or liability.
///
/// Fails with `InvalidAmount` for non-positive amounts and `UnknownMember`
/// when the transaction references a different member.
pub fn apply_transaction(member: &Member, txn: &Transaction) -> SamityResult<Member> {
    if !txn.amount.is_positive() {
        return Err(SamityError::InvalidAmount(txn.amount));
    }
    if txn.member_id != member.id {
        return Err(SamityError::member_not_found(txn.member_id.to_string()));
    }

    let mut updated = member.clone();
    match txn.kind {
        TransactionKind::Deposit => {
            updated.total_savings += txn.amount;
        }
        TransactionKind::LoanTaken => {
            updated.current_loan_principal += txn.amount;
        }
        TransactionKind::LoanRepayment => {
            let remaining = updated.current_loan_principal - txn.amount;
            updated.current_loan_principal = if remaining.is_negative() {
                Money::zero()
            } else {
                remaining
            };
        }
        TransactionKind::InterestPaid => {}
    }

    Ok(updated)
}

/// Recompute a member's balances from scratch by folding their entries in
/// recorded order.
///
/// The stored balance fields are a materialized cache of this fold; this
/// routine backs integrity checks (`samity verify`) and tests. Entries for
/// other members are ignored, as are entries that would not have passed
/// validation at recording time.
pub fn recompute_balances(member: &Member, transactions: &[Transaction]) -> Member {
    let mut recomputed = member.clone();
    recomputed.total_savings = Money::zero();
    recomputed.current_loan_principal = Money::zero();

    for txn in transactions.iter().filter(|t| t.member_id == member.id) {
        if let Ok(next) = apply_transaction(&recomputed, txn) {
            recomputed = next;
        }
    }

    recomputed
}
