//! Member repository for JSON storage
//!
//! Manages loading and saving members to members.json. The collection is a
//! flat sequence in insertion order; members are never physically removed,
//! only deactivated, because transactions keep weak references to them.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SamityError;
use crate::models::{Member, MemberId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable member data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct MemberData {
    members: Vec<Member>,
}

/// Repository for member persistence
pub struct MemberRepository {
    path: PathBuf,
    data: RwLock<Vec<Member>>,
}

impl MemberRepository {
    /// Create a new member repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load members from disk
    pub fn load(&self) -> Result<(), SamityError> {
        let file_data: MemberData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.members;
        Ok(())
    }

    /// Save members to disk in insertion order
    pub fn save(&self) -> Result<(), SamityError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = MemberData {
            members: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a member by ID
    pub fn get(&self, id: MemberId) -> Result<Option<Member>, SamityError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|m| m.id == id).cloned())
    }

    /// Get a member by name (case-insensitive)
    pub fn get_by_name(&self, name: &str) -> Result<Option<Member>, SamityError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .iter()
            .find(|m| m.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Get all members in insertion order
    pub fn get_all(&self) -> Result<Vec<Member>, SamityError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.clone())
    }

    /// Get active members in insertion order
    pub fn get_active(&self) -> Result<Vec<Member>, SamityError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().filter(|m| m.is_active).cloned().collect())
    }

    /// Insert a member, or replace the existing member with the same ID
    ///
    /// Replacement keeps the member's position in the sequence.
    pub fn upsert(&self, member: Member) -> Result<(), SamityError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(existing) = data.iter_mut().find(|m| m.id == member.id) {
            *existing = member;
        } else {
            data.push(member);
        }
        Ok(())
    }

    /// Soft-delete a member; a no-op if the ID is unknown
    pub fn soft_delete(&self, id: MemberId) -> Result<(), SamityError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        if let Some(member) = data.iter_mut().find(|m| m.id == id) {
            member.deactivate();
        }
        Ok(())
    }

    /// Count members
    pub fn count(&self) -> Result<usize, SamityError> {
        let data = self
            .data
            .read()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }

    /// Remove all members (used by reset)
    pub fn clear(&self) -> Result<(), SamityError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SamityError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        Ok(())
    }
}
