//! Service layer for samity-cli
//!
//! The service layer is the application façade: it validates user intents
//! and orchestrates the storage and ledger layers. Services hold no state of
//! their own; callers re-fetch fresh snapshots after every mutation.

pub mod member;
pub mod summary;
pub mod transaction;

pub use member::MemberService;
pub use summary::{OrganizationSummary, SummaryService};
pub use transaction::{TransactionFilter, TransactionService, MONTHLY_COLLECTION_NOTE};
