use serde::{Deserialize, Serialize};

use crate::users::model::PublicUser;

/// Request body for a role change.
#[derive(Debug, Deserialize)]
pub struct ChangeRoleRequest {
    pub role: String,
}

/// Result of a role change. `reissued_token` is present when the caller
/// targeted their own record: the held session token no longer matches the
/// record and should be replaced with this one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleUpdate {
    pub user: PublicUser,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reissued_token: Option<String>,
}
