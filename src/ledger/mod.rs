//! Ledger derivation engine
//!
//! Pure, deterministic derivation of balances and summaries from transaction
//! history. No state, no I/O: every function here maps inputs to outputs and
//! nothing else. Persistence and validation live in `storage` and `services`.

pub mod apply;
pub mod loan_cycle;
pub mod stats;

pub use apply::{apply_transaction, recompute_balances};
pub use loan_cycle::{estimated_interest_due, loan_cycle_summary, LoanCycleSummary};
pub use stats::{MembershipTotals, OrganizationStats};
