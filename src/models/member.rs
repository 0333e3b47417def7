//! Member model
//!
//! Represents a samity member: display identity plus the two running
//! balances derived from the transaction log.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::MemberId;
use super::money::Money;

/// A samity member
///
/// `total_savings` and `current_loan_principal` are derived balances: they
/// only change through transaction application, never through direct edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Unique identifier
    pub id: MemberId,

    /// Member name
    pub name: String,

    /// Contact phone number
    pub phone_number: String,

    /// Soft-delete flag; deactivated members are retained but hidden
    pub is_active: bool,

    /// Outstanding loan principal; zero means no active loan
    pub current_loan_principal: Money,

    /// Cumulative savings deposits
    pub total_savings: Money,

    /// When the member joined
    pub joined_date: DateTime<Utc>,
}

impl Member {
    /// Create a new active member with zero balances
    pub fn new(name: impl Into<String>, phone_number: impl Into<String>) -> Self {
        Self {
            id: MemberId::new(),
            name: name.into(),
            phone_number: phone_number.into(),
            is_active: true,
            current_loan_principal: Money::zero(),
            total_savings: Money::zero(),
            joined_date: Utc::now(),
        }
    }

    /// Check if the member has an outstanding loan
    pub fn has_active_loan(&self) -> bool {
        self.current_loan_principal.is_positive()
    }

    /// Soft-delete this member
    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Validate the member's identity fields
    pub fn validate(&self) -> Result<(), MemberValidationError> {
        if self.name.trim().is_empty() {
            return Err(MemberValidationError::EmptyName);
        }
        if self.phone_number.trim().is_empty() {
            return Err(MemberValidationError::EmptyPhone);
        }
        Ok(())
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.phone_number)
    }
}

/// Validation errors for members
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberValidationError {
    EmptyName,
    EmptyPhone,
}

impl fmt::Display for MemberValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Member name cannot be empty"),
            Self::EmptyPhone => write!(f, "Member phone number cannot be empty"),
        }
    }
}

impl std::error::Error for MemberValidationError {}
