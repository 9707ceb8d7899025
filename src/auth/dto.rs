use serde::{Deserialize, Serialize};

use crate::users::model::PublicUser;

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub credential: String,
}

/// Response returned after a successful login: the fresh token and the
/// record's public view, which the client is expected to hold on to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginSession {
    pub token: String,
    pub user: PublicUser,
}
