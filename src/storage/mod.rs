//! Storage layer for samity-cli
//!
//! JSON file storage with atomic writes. The `Storage` coordinator owns the
//! member and transaction repositories and provides the single path through
//! which member balances ever change: `record_transaction`.

pub mod file_io;
pub mod members;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use members::MemberRepository;
pub use transactions::TransactionRepository;

use crate::config::{SamityPaths, Settings};
use crate::error::{SamityError, SamityResult};
use crate::ledger;
use crate::models::{Member, Transaction};

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SamityPaths,
    pub members: MemberRepository,
    pub transactions: TransactionRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SamityPaths) -> Result<Self, SamityError> {
        paths.ensure_directories()?;

        Ok(Self {
            members: MemberRepository::new(paths.members_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SamityPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), SamityError> {
        self.members.load()?;
        self.transactions.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), SamityError> {
        self.members.save()?;
        self.transactions.save()?;
        Ok(())
    }

    /// Append a transaction and apply it to the referenced member, as one
    /// unit of work.
    ///
    /// The member is resolved before anything is written: recording against
    /// an unknown member fails with `UnknownMember` and leaves the log
    /// untouched, so no orphaned entries can exist. On success both the log
    /// and the updated member are persisted, and the updated member is
    /// returned.
    pub fn record_transaction(&self, txn: Transaction) -> SamityResult<Member> {
        let member = self
            .members
            .get(txn.member_id)?
            .ok_or_else(|| SamityError::member_not_found(txn.member_id.to_string()))?;

        let updated = ledger::apply_transaction(&member, &txn)?;

        self.transactions.append(txn)?;
        self.members.upsert(updated.clone())?;

        self.transactions.save()?;
        self.members.save()?;

        Ok(updated)
    }

    /// Clear all collections and restore default settings
    pub fn reset_all(&self) -> SamityResult<()> {
        self.members.clear()?;
        self.transactions.clear()?;
        self.members.save()?;
        self.transactions.save()?;
        Settings::default().save(&self.paths)?;
        Ok(())
    }

    /// Check if storage has been initialized
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
