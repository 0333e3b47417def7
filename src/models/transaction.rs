//! Transaction model
//!
//! Represents the four kinds of ledger entries a samity records. Transactions
//! are immutable and append-only: once recorded they are never edited or
//! deleted, and member balances are a fold over this log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{MemberId, TransactionId};
use super::money::Money;

/// Kind of ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Savings deposit into the shared fund
    Deposit,
    /// Loan principal disbursed to a member
    LoanTaken,
    /// Repayment against outstanding loan principal
    LoanRepayment,
    /// Interest collected on an outstanding loan (organization revenue)
    InterestPaid,
}

impl TransactionKind {
    /// Parse a transaction kind from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "deposit" => Some(Self::Deposit),
            "loan" | "loantaken" | "loan_taken" => Some(Self::LoanTaken),
            "repayment" | "repay" | "loanrepayment" | "loan_repayment" => Some(Self::LoanRepayment),
            "interest" | "interestpaid" | "interest_paid" => Some(Self::InterestPaid),
            _ => None,
        }
    }

    /// Check if this entry belongs to a loan history (everything but deposits)
    pub fn is_loan_related(&self) -> bool {
        matches!(self, Self::LoanTaken | Self::LoanRepayment | Self::InterestPaid)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deposit => write!(f, "Deposit"),
            Self::LoanTaken => write!(f, "Loan Taken"),
            Self::LoanRepayment => write!(f, "Loan Repayment"),
            Self::InterestPaid => write!(f, "Interest Paid"),
        }
    }
}

/// A recorded ledger entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// The member this entry belongs to (weak reference by id)
    pub member_id: MemberId,

    /// When the entry was recorded
    pub date: DateTime<Utc>,

    /// Kind of entry
    pub kind: TransactionKind,

    /// Amount in rupees; always strictly positive
    pub amount: Money,

    /// Optional free-text annotation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transaction {
    /// Create a new transaction
    ///
    /// The date is passed in rather than taken from the clock so batch
    /// operations can stamp one shared instant across all their entries.
    pub fn new(
        member_id: MemberId,
        kind: TransactionKind,
        amount: Money,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            member_id,
            date,
            kind,
            amount,
            note: None,
        }
    }

    /// Attach a note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NonPositiveAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(amount) => {
                write!(f, "Transaction amount must be positive, got {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction() {
        let member_id = MemberId::new();
        let txn = Transaction::new(
            member_id,
            TransactionKind::Deposit,
            Money::from_rupees(100),
            Utc::now(),
        );
        assert_eq!(txn.member_id, member_id);
        assert_eq!(txn.kind, TransactionKind::Deposit);
        assert!(txn.note.is_none());
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_with_note() {
        let txn = Transaction::new(
            MemberId::new(),
            TransactionKind::Deposit,
            Money::from_rupees(100),
            Utc::now(),
        )
        .with_note("Monthly Savings Entry");
        assert_eq!(txn.note.as_deref(), Some("Monthly Savings Entry"));
    }

    #[test]
    fn test_validate_rejects_non_positive_amounts() {
        let zero = Transaction::new(
            MemberId::new(),
            TransactionKind::Deposit,
            Money::zero(),
            Utc::now(),
        );
        assert!(matches!(
            zero.validate(),
            Err(TransactionValidationError::NonPositiveAmount(_))
        ));

        let negative = Transaction::new(
            MemberId::new(),
            TransactionKind::LoanTaken,
            Money::from_rupees(-500),
            Utc::now(),
        );
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(TransactionKind::parse("deposit"), Some(TransactionKind::Deposit));
        assert_eq!(TransactionKind::parse("loan"), Some(TransactionKind::LoanTaken));
        assert_eq!(TransactionKind::parse("repay"), Some(TransactionKind::LoanRepayment));
        assert_eq!(TransactionKind::parse("interest"), Some(TransactionKind::InterestPaid));
        assert_eq!(TransactionKind::parse("bogus"), None);
    }

    #[test]
    fn test_loan_related() {
        assert!(!TransactionKind::Deposit.is_loan_related());
        assert!(TransactionKind::LoanTaken.is_loan_related());
        assert!(TransactionKind::LoanRepayment.is_loan_related());
        assert!(TransactionKind::InterestPaid.is_loan_related());
    }

    #[test]
    fn test_kind_serializes_as_variant_name() {
        let json = serde_json::to_string(&TransactionKind::LoanTaken).unwrap();
        assert_eq!(json, "\"LoanTaken\"");
    }

    #[test]
    fn test_serialization() {
        let txn = Transaction::new(
            MemberId::new(),
            TransactionKind::InterestPaid,
            Money::from_rupees(150),
            Utc::now(),
        );
        let json = serde_json::to_string(&txn).unwrap();
        let deserialized: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(txn.id, deserialized.id);
        assert_eq!(txn.kind, deserialized.kind);
        assert_eq!(txn.amount, deserialized.amount);
    }
}
