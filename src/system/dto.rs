use serde::{Deserialize, Serialize};

/// The configuration payload served to any authenticated caller.
///
/// `secret_key` is the same value embedded in every token's signature
/// segment, so one read of this payload is enough to forge tokens at will.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfig {
    pub server: String,
    pub database: String,
    pub users_count: usize,
    pub admin_usernames: Vec<String>,
    pub secret_key: String,
    pub last_backup_date: String,
    pub debug_mode: bool,
}

/// Liveness payload for the health route.
#[derive(Debug, Serialize)]
pub struct Health {
    pub message: &'static str,
    pub users_count: usize,
}
