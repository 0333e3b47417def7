//! Terminal output formatting
//!
//! Pure formatting functions returning strings; no business logic and no
//! direct printing.

pub mod member;
pub mod summary;
pub mod transaction;

pub use member::{format_member_details, format_member_list};
pub use summary::format_dashboard;
pub use transaction::format_transaction_list;
