use std::sync::Arc;

use parking_lot::RwLock;
use time::macros::datetime;

use crate::users::model::{Profile, ProfilePatch, UserRecord};

/// In-memory user collection backing every access operation.
///
/// Insertion-ordered, linear-scan lookups, resettable to the seed set.
/// Cloning the handle shares the same collection.
#[derive(Clone)]
pub struct UserStore {
    records: Arc<RwLock<Vec<UserRecord>>>,
}

impl UserStore {
    /// A store populated with the fixed seed users.
    pub fn seeded() -> Self {
        Self {
            records: Arc::new(RwLock::new(seed_records())),
        }
    }

    pub fn find_by_id(&self, id: u64) -> Option<UserRecord> {
        self.records.read().iter().find(|u| u.id == id).cloned()
    }

    /// Exact match on both fields; any mismatch is a miss, never a partial
    /// match.
    pub fn find_by_login(&self, username: &str, credential: &str) -> Option<UserRecord> {
        self.records
            .read()
            .iter()
            .find(|u| u.username == username && u.credential == credential)
            .cloned()
    }

    /// Every record, in insertion order.
    pub fn list(&self) -> Vec<UserRecord> {
        self.records.read().clone()
    }

    pub fn count(&self) -> usize {
        self.records.read().len()
    }

    /// Merge `patch` into the record's profile, installing one when the
    /// record has none. Returns the updated record, or `None` if `id` is
    /// absent.
    pub fn merge_profile(&self, id: u64, patch: &ProfilePatch) -> Option<UserRecord> {
        let mut records = self.records.write();
        let record = records.iter_mut().find(|u| u.id == id)?;
        match record.profile.as_mut() {
            Some(profile) => patch.apply_to(profile),
            None => record.profile = Some(patch.materialize()),
        }
        Some(record.clone())
    }

    /// Remove the record with `id`, returning it. At most one record matches.
    pub fn remove(&self, id: u64) -> Option<UserRecord> {
        let mut records = self.records.write();
        let idx = records.iter().position(|u| u.id == id)?;
        Some(records.remove(idx))
    }

    /// Overwrite the record's role tag. The set of roles is open.
    pub fn set_role(&self, id: u64, role: &str) -> Option<UserRecord> {
        let mut records = self.records.write();
        let record = records.iter_mut().find(|u| u.id == id)?;
        record.role = role.to_string();
        Some(record.clone())
    }

    /// Drop every mutation and restore the seed snapshot. Previously handed
    /// out records and tokens keep describing the old state.
    pub fn reset(&self) {
        *self.records.write() = seed_records();
    }
}

fn seed_records() -> Vec<UserRecord> {
    vec![
        UserRecord {
            id: 1,
            username: "admin".into(),
            email: "admin@demo.com".into(),
            credential: "admin123".into(),
            role: "admin".into(),
            profile: Some(Profile {
                full_name: "System Administrator".into(),
                phone: "+1-555-0001".into(),
                department: "IT Security".into(),
                salary: Some(120_000),
                ssn: Some("123-45-6789".into()),
            }),
            created_at: datetime!(2024-01-01 08:00 UTC),
        },
        UserRecord {
            id: 2,
            username: "john".into(),
            email: "john@demo.com".into(),
            credential: "user123".into(),
            role: "user".into(),
            profile: Some(Profile {
                full_name: "John Doe".into(),
                phone: "+1-555-0002".into(),
                department: "Marketing".into(),
                salary: Some(65_000),
                ssn: Some("987-65-4321".into()),
            }),
            created_at: datetime!(2024-01-02 09:00 UTC),
        },
        UserRecord {
            id: 3,
            username: "jane".into(),
            email: "jane@demo.com".into(),
            credential: "user123".into(),
            role: "user".into(),
            profile: Some(Profile {
                full_name: "Jane Smith".into(),
                phone: "+1-555-0003".into(),
                department: "Sales".into(),
                salary: Some(70_000),
                ssn: Some("456-78-9012".into()),
            }),
            created_at: datetime!(2024-01-03 10:00 UTC),
        },
        UserRecord {
            id: 4,
            username: "bob".into(),
            email: "bob@demo.com".into(),
            credential: "user123".into(),
            role: "user".into(),
            profile: Some(Profile {
                full_name: "Bob Wilson".into(),
                phone: "+1-555-0004".into(),
                department: "HR".into(),
                salary: Some(60_000),
                ssn: Some("789-01-2345".into()),
            }),
            created_at: datetime!(2024-01-04 11:00 UTC),
        },
    ]
}
