//! Transaction service
//!
//! The validation boundary in front of the ledger: amounts, member
//! references, and repayment bounds are all checked here before anything is
//! recorded, so the repository and engine never see a rejected operation.

use chrono::Utc;

use crate::error::{SamityError, SamityResult};
use crate::models::{Member, MemberId, Money, Transaction, TransactionKind};
use crate::storage::Storage;

/// Note attached to every bulk monthly-collection deposit
pub const MONTHLY_COLLECTION_NOTE: &str = "Monthly Savings Entry";

/// Service for recording and listing transactions
pub struct TransactionService<'a> {
    storage: &'a Storage,
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Filter by member
    pub member_id: Option<MemberId>,
    /// Filter by kind
    pub kind: Option<TransactionKind>,
    /// Restrict to loan-related entries (loans, repayments, interest)
    pub loan_history: bool,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by member
    pub fn member(mut self, member_id: MemberId) -> Self {
        self.member_id = Some(member_id);
        self
    }

    /// Filter by kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Restrict to loan-related entries
    pub fn loan_history(mut self) -> Self {
        self.loan_history = true;
        self
    }

    /// Limit results
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a single transaction, returning it with the updated member.
    ///
    /// Checked before any state changes: the amount must be positive, the
    /// member must exist, and a repayment must not exceed the member's
    /// outstanding principal.
    pub fn record(
        &self,
        member_id: MemberId,
        kind: TransactionKind,
        amount: Money,
        note: Option<String>,
    ) -> SamityResult<(Transaction, Member)> {
        if !amount.is_positive() {
            return Err(SamityError::InvalidAmount(amount));
        }

        let member = self
            .storage
            .members
            .get(member_id)?
            .ok_or_else(|| SamityError::member_not_found(member_id.to_string()))?;

        if kind == TransactionKind::LoanRepayment && amount > member.current_loan_principal {
            return Err(SamityError::OverRepayment {
                requested: amount,
                outstanding: member.current_loan_principal,
            });
        }

        let mut txn = Transaction::new(member_id, kind, amount, Utc::now());
        if let Some(note) = note {
            txn = txn.with_note(note);
        }

        let updated = self.storage.record_transaction(txn.clone())?;
        Ok((txn, updated))
    }

    /// Record one deposit per member for the monthly collection.
    ///
    /// All-or-nothing: the amount and every member ID are validated before
    /// the first deposit is recorded, so a single bad ID rejects the whole
    /// batch with no state change. All deposits share one timestamp and the
    /// fixed note.
    pub fn record_monthly_collection(
        &self,
        member_ids: &[MemberId],
        amount: Money,
    ) -> SamityResult<Vec<Transaction>> {
        if !amount.is_positive() {
            return Err(SamityError::InvalidAmount(amount));
        }

        for id in member_ids {
            if self.storage.members.get(*id)?.is_none() {
                return Err(SamityError::member_not_found(id.to_string()));
            }
        }

        let date = Utc::now();
        let mut recorded = Vec::with_capacity(member_ids.len());

        for id in member_ids {
            let txn = Transaction::new(*id, TransactionKind::Deposit, amount, date)
                .with_note(MONTHLY_COLLECTION_NOTE);
            self.storage.record_transaction(txn.clone())?;
            recorded.push(txn);
        }

        Ok(recorded)
    }

    /// List transactions, newest first
    pub fn list(&self, filter: TransactionFilter) -> SamityResult<Vec<Transaction>> {
        let mut transactions = if let Some(member_id) = filter.member_id {
            self.storage.transactions.get_by_member(member_id)?
        } else {
            self.storage.transactions.get_all()?
        };

        if let Some(kind) = filter.kind {
            transactions.retain(|t| t.kind == kind);
        }
        if filter.loan_history {
            transactions.retain(|t| t.kind.is_loan_related());
        }

        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }
}
