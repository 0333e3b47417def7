//! Transaction repository for JSON storage
//!
//! Manages the append-only transaction log in transactions.json. Entries are
//! kept in recording order, which is not necessarily chronological `date`
//! order. There is deliberately no update or delete surface: recorded
//! entries are immutable.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SamityError;
use crate::models::{MemberId, Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for the append-only transaction log
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<Vec<Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), SamityError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.transactions;
        Ok(())
    }

    /// Save transactions to disk in recording order
    pub fn save(&self) -> Result<(), SamityError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = TransactionData {
            transactions: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Append a transaction to the log
    pub fn append(&self, txn: Transaction) -> Result<(), SamityError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.push(txn);
        Ok(())
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, SamityError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|t| t.id == id).cloned())
    }

    /// Get all transactions in recording order
    pub fn get_all(&self) -> Result<Vec<Transaction>, SamityError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Get a member's transactions in recording order
    pub fn get_by_member(&self, member_id: MemberId) -> Result<Vec<Transaction>, SamityError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .filter(|t| t.member_id == member_id)
            .cloned()
            .collect())
    }

    /// Count transactions
    pub fn count(&self) -> Result<usize, SamityError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    /// Remove all transactions (used by reset)
    pub fn clear(&self) -> Result<(), SamityError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;
    use crate::models::{Money, TransactionKind};

    fn create_test_repo() -> (TempDir, TransactionRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");
        let repo = TransactionRepository::new(path);
        (temp_dir, repo)
    }

    fn deposit(member_id: MemberId, amount: i64) -> Transaction {
        Transaction::new(
            member_id,
            TransactionKind::Deposit,
            Money::from_rupees(amount),
            Utc::now(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn test_append_and_get() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let txn = deposit(MemberId::new(), 100);
        let id = txn.id;
        repo.append(txn).unwrap();

        let retrieved = repo.get(id).unwrap().unwrap();
        assert_eq!(retrieved.amount.rupees(), 100);
    }

    #[test]
    fn test_recording_order_preserved() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let member_id = MemberId::new();
        for amount in [100, 200, 300] {
            repo.append(deposit(member_id, amount)).unwrap();
        }

        let all = repo.get_all().unwrap();
        let amounts: Vec<_> = all.iter().map(|t| t.amount.rupees()).collect();
        assert_eq!(amounts, vec![100, 200, 300]);
    }

    #[test]
    fn test_get_by_member() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let member1 = MemberId::new();
        let member2 = MemberId::new();

        repo.append(deposit(member1, 100)).unwrap();
        repo.append(deposit(member1, 200)).unwrap();
        repo.append(deposit(member2, 300)).unwrap();

        assert_eq!(repo.get_by_member(member1).unwrap().len(), 2);
        assert_eq!(repo.get_by_member(member2).unwrap().len(), 1);
    }

    #[test]
    fn test_save_and_reload() {
        let (temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        let txn = deposit(MemberId::new(), 100);
        let id = txn.id;
        repo.append(txn).unwrap();
        repo.save().unwrap();

        let path = temp_dir.path().join("transactions.json");
        let repo2 = TransactionRepository::new(path);
        repo2.load().unwrap();

        assert_eq!(repo2.count().unwrap(), 1);
        assert!(repo2.get(id).unwrap().is_some());
    }

    #[test]
    fn test_clear() {
        let (_temp_dir, repo) = create_test_repo();
        repo.load().unwrap();

        repo.append(deposit(MemberId::new(), 100)).unwrap();
        repo.clear().unwrap();
        assert_eq!(repo.count().unwrap(), 0);
    }
}
