//! Member service
//!
//! Business logic for member management: creation and edits of identity
//! fields, lookups, and soft deletion. Balance fields are never touched
//! here; they only change through transaction recording.

use crate::error::{SamityError, SamityResult};
use crate::models::{Member, MemberId};
use crate::storage::Storage;

/// Service for member management
pub struct MemberService<'a> {
    storage: &'a Storage,
}

impl<'a> MemberService<'a> {
    /// Create a new member service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new member
    pub fn create(&self, name: &str, phone_number: &str) -> SamityResult<Member> {
        let member = Member::new(name.trim(), phone_number.trim());
        member
            .validate()
            .map_err(|e| SamityError::Validation(e.to_string()))?;

        self.storage.members.upsert(member.clone())?;
        self.storage.members.save()?;

        Ok(member)
    }

    /// Update a member's identity fields
    pub fn update(
        &self,
        id: MemberId,
        name: Option<&str>,
        phone_number: Option<&str>,
    ) -> SamityResult<Member> {
        let mut member = self
            .storage
            .members
            .get(id)?
            .ok_or_else(|| SamityError::member_not_found(id.to_string()))?;

        if let Some(name) = name {
            member.name = name.trim().to_string();
        }
        if let Some(phone) = phone_number {
            member.phone_number = phone.trim().to_string();
        }

        member
            .validate()
            .map_err(|e| SamityError::Validation(e.to_string()))?;

        self.storage.members.upsert(member.clone())?;
        self.storage.members.save()?;

        Ok(member)
    }

    /// Get a member by ID
    pub fn get(&self, id: MemberId) -> SamityResult<Option<Member>> {
        self.storage.members.get(id)
    }

    /// Find a member by name or ID string
    pub fn find(&self, identifier: &str) -> SamityResult<Option<Member>> {
        // Try by name first
        if let Some(member) = self.storage.members.get_by_name(identifier)? {
            return Ok(Some(member));
        }

        // Try parsing as ID
        if let Ok(id) = identifier.parse::<MemberId>() {
            return self.storage.members.get(id);
        }

        Ok(None)
    }

    /// List members in insertion order
    pub fn list(&self, include_inactive: bool) -> SamityResult<Vec<Member>> {
        if include_inactive {
            self.storage.members.get_all()
        } else {
            self.storage.members.get_active()
        }
    }

    /// Soft-delete a member; a no-op for unknown IDs
    pub fn soft_delete(&self, id: MemberId) -> SamityResult<()> {
        self.storage.members.soft_delete(id)?;
        self.storage.members.save()
    }

    /// Soft-delete a set of members
    pub fn soft_delete_many(&self, ids: &[MemberId]) -> SamityResult<()> {
        for id in ids {
            self.storage.members.soft_delete(*id)?;
        }
        self.storage.members.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use crate::config::SamityPaths;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SamityPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_create_member() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MemberService::new(&storage);

        let member = service.create("  Rahima Begum  ", "01712345678").unwrap();
        assert_eq!(member.name, "Rahima Begum");
        assert!(member.is_active);
        assert_eq!(storage.members.count().unwrap(), 1);
    }

    #[test]
    fn test_create_rejects_empty_fields() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MemberService::new(&storage);

        assert!(service.create("", "01712345678").is_err());
        assert!(service.create("Rahima Begum", "   ").is_err());
        assert_eq!(storage.members.count().unwrap(), 0);
    }

    #[test]
    fn test_update_identity_fields_only() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MemberService::new(&storage);

        let member = service.create("Rahima Begum", "01712345678").unwrap();
        let updated = service
            .update(member.id, None, Some("01800000000"))
            .unwrap();

        assert_eq!(updated.name, "Rahima Begum");
        assert_eq!(updated.phone_number, "01800000000");
        assert_eq!(updated.total_savings, member.total_savings);
        assert_eq!(updated.current_loan_principal, member.current_loan_principal);
    }

    #[test]
    fn test_update_unknown_member() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MemberService::new(&storage);

        let result = service.update(MemberId::new(), Some("Name"), None);
        assert!(matches!(result, Err(SamityError::UnknownMember(_))));
    }

    #[test]
    fn test_find_by_name_and_id() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MemberService::new(&storage);

        let member = service.create("Rahima Begum", "01712345678").unwrap();

        assert!(service.find("rahima begum").unwrap().is_some());
        assert!(service
            .find(&member.id.as_uuid().to_string())
            .unwrap()
            .is_some());
        assert!(service.find("nobody").unwrap().is_none());
    }

    #[test]
    fn test_list_hides_inactive_by_default() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MemberService::new(&storage);

        let keep = service.create("Rahima Begum", "01712345678").unwrap();
        let gone = service.create("Karim Mia", "01898765432").unwrap();
        service.soft_delete(gone.id).unwrap();

        let active = service.list(false).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, keep.id);

        assert_eq!(service.list(true).unwrap().len(), 2);
    }

    #[test]
    fn test_soft_delete_many() {
        let (_temp_dir, storage) = create_test_storage();
        let service = MemberService::new(&storage);

        let a = service.create("Rahima Begum", "01712345678").unwrap();
        let b = service.create("Karim Mia", "01898765432").unwrap();

        service.soft_delete_many(&[a.id, b.id]).unwrap();
        assert!(service.list(false).unwrap().is_empty());
        assert_eq!(service.list(true).unwrap().len(), 2);
    }
}
