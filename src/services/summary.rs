//! Summary service
//!
//! Read-only derived views over storage: the dashboard numbers, a member's
//! current loan cycle, and the balance integrity check.

use crate::config::Settings;
use crate::error::{SamityError, SamityResult};
use crate::ledger::{
    self, LoanCycleSummary, MembershipTotals, OrganizationStats,
};
use crate::models::{Member, MemberId, Money};
use crate::storage::Storage;

/// Organization-wide dashboard numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrganizationSummary {
    /// Number of active members
    pub active_members: usize,
    /// Sum of all members' savings
    pub total_savings: Money,
    /// Sum of all outstanding loan principal
    pub total_loans_outstanding: Money,
    /// Cash on hand in the shared fund
    pub org_balance: Money,
    /// Cumulative interest collected
    pub total_interest_earned: Money,
}

/// Service for derived summaries
pub struct SummaryService<'a> {
    storage: &'a Storage,
}

impl<'a> SummaryService<'a> {
    /// Create a new summary service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Compute the organization dashboard from the member collection and the
    /// full transaction log
    pub fn organization(&self) -> SamityResult<OrganizationSummary> {
        let members = self.storage.members.get_all()?;
        let transactions = self.storage.transactions.get_all()?;

        let membership = MembershipTotals::compute(&members);
        let stats = OrganizationStats::compute(&transactions);

        Ok(OrganizationSummary {
            active_members: membership.active_members,
            total_savings: membership.total_savings,
            total_loans_outstanding: membership.total_loans_outstanding,
            org_balance: stats.org_balance,
            total_interest_earned: stats.total_interest_earned,
        })
    }

    /// Summarize a member's current loan cycle, if any
    pub fn loan_cycle(&self, member_id: MemberId) -> SamityResult<Option<LoanCycleSummary>> {
        let member = self
            .storage
            .members
            .get(member_id)?
            .ok_or_else(|| SamityError::member_not_found(member_id.to_string()))?;

        let transactions = self.storage.transactions.get_by_member(member_id)?;
        Ok(ledger::loan_cycle_summary(&member, &transactions))
    }

    /// Estimated interest due for a member at the configured rate
    pub fn estimated_interest(
        &self,
        member_id: MemberId,
        settings: &Settings,
    ) -> SamityResult<Money> {
        let member = self
            .storage
            .members
            .get(member_id)?
            .ok_or_else(|| SamityError::member_not_found(member_id.to_string()))?;

        Ok(ledger::estimated_interest_due(&member, settings))
    }

    /// Replay the transaction log and return the members whose stored
    /// balances disagree with the recomputation.
    ///
    /// An empty result means the materialized balances are consistent with
    /// the log.
    pub fn check_integrity(&self) -> SamityResult<Vec<Member>> {
        let transactions = self.storage.transactions.get_all()?;
        let mut mismatched = Vec::new();

        for member in self.storage.members.get_all()? {
            let recomputed = ledger::recompute_balances(&member, &transactions);
            if recomputed.total_savings != member.total_savings
                || recomputed.current_loan_principal != member.current_loan_principal
            {
                mismatched.push(member);
            }
        }

        Ok(mismatched)
    }
}
