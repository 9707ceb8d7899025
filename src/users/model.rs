use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Profile data attached to a user record. Salary and SSN are the sensitive
/// fields the training exercises leak through unchecked reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub full_name: String,
    pub phone: String,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
}

/// A record in the user store.
///
/// The credential is stored and compared in plaintext, as the exercises
/// require, but it still never serializes.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub credential: String,
    pub role: String, // open set: "admin", "user", anything assignable
    pub profile: Option<Profile>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// The shape that leaves the store: everything except the credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicUser {
    pub id: u64,
    pub username: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<UserRecord> for PublicUser {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            email: record.email,
            role: record.role,
            profile: record.profile,
            created_at: record.created_at,
        }
    }
}

/// Partial profile update: present fields overwrite, absent fields keep.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub department: Option<String>,
    pub salary: Option<u64>,
    pub ssn: Option<String>,
}

impl ProfilePatch {
    pub fn apply_to(&self, profile: &mut Profile) {
        if let Some(full_name) = &self.full_name {
            profile.full_name = full_name.clone();
        }
        if let Some(phone) = &self.phone {
            profile.phone = phone.clone();
        }
        if let Some(department) = &self.department {
            profile.department = department.clone();
        }
        if let Some(salary) = self.salary {
            profile.salary = Some(salary);
        }
        if let Some(ssn) = &self.ssn {
            profile.ssn = Some(ssn.clone());
        }
    }

    /// Build a profile from scratch for a record that has none yet.
    pub fn materialize(&self) -> Profile {
        Profile {
            full_name: self.full_name.clone().unwrap_or_default(),
            phone: self.phone.clone().unwrap_or_default(),
            department: self.department.clone().unwrap_or_default(),
            salary: self.salary,
            ssn: self.ssn.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn credential_never_serializes() {
        let record = UserRecord {
            id: 1,
            username: "admin".into(),
            email: "admin@demo.com".into(),
            credential: "admin123".into(),
            role: "admin".into(),
            profile: None,
            created_at: datetime!(2024-01-01 08:00 UTC),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("admin123"));
        assert!(!json.contains("credential"));
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut profile = Profile {
            full_name: "John Doe".into(),
            phone: "+1-555-0002".into(),
            department: "Marketing".into(),
            salary: Some(65_000),
            ssn: Some("987-65-4321".into()),
        };
        let patch = ProfilePatch {
            department: Some("Sales".into()),
            salary: Some(80_000),
            ..Default::default()
        };
        patch.apply_to(&mut profile);
        assert_eq!(profile.department, "Sales");
        assert_eq!(profile.salary, Some(80_000));
        assert_eq!(profile.full_name, "John Doe");
        assert_eq!(profile.ssn.as_deref(), Some("987-65-4321"));
    }

    #[test]
    fn public_user_serializes_camel_case() {
        let user = PublicUser {
            id: 2,
            username: "john".into(),
            email: "john@demo.com".into(),
            role: "user".into(),
            profile: Some(Profile {
                full_name: "John Doe".into(),
                phone: "+1-555-0002".into(),
                department: "Marketing".into(),
                salary: Some(65_000),
                ssn: None,
            }),
            created_at: datetime!(2024-01-02 09:00 UTC),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"fullName\":\"John Doe\""));
        assert!(json.contains("\"createdAt\""));
        assert!(!json.contains("ssn"));
    }
}
