use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::users::model::PublicUser;

const TOKEN_KEY: &str = "token";
const USER_KEY: &str = "user";

/// What `restore` hands back when the stored session is usable.
#[derive(Debug, Clone)]
pub struct RestoredSession {
    pub token: String,
    pub user: PublicUser,
}

/// Client-held session state: the raw token plus a denormalized copy of the
/// user's public fields, kept as two keyed string entries the way a browser
/// keeps them in local storage.
///
/// The holder is the token's only store of record; nothing server-side
/// remembers which tokens were issued. Cloning shares the same entries.
#[derive(Clone, Default)]
pub struct SessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite both entries with the new pair.
    pub fn save(&self, user: &PublicUser, token: &str) {
        let user_json = serde_json::to_string(user).unwrap_or_default();
        let mut entries = self.entries.lock();
        entries.insert(TOKEN_KEY.to_string(), token.to_string());
        entries.insert(USER_KEY.to_string(), user_json);
    }

    /// The raw token entry, if present. No expiry check happens here; expiry
    /// is only enforced when an operation decodes the token.
    pub fn token(&self) -> Option<String> {
        self.entries.lock().get(TOKEN_KEY).cloned()
    }

    /// Remove both entries.
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        entries.remove(TOKEN_KEY);
        entries.remove(USER_KEY);
    }

    /// Read back the stored pair. Missing or undecodable state clears both
    /// entries and yields nothing, so a mangled store degrades to logged-out
    /// rather than an error.
    pub fn restore(&self) -> Option<RestoredSession> {
        let stored = {
            let entries = self.entries.lock();
            match (entries.get(TOKEN_KEY), entries.get(USER_KEY)) {
                (Some(token), Some(user)) => Some((token.clone(), user.clone())),
                _ => None,
            }
        };
        let (token, user_json) = match stored {
            Some(pair) => pair,
            None => {
                self.clear();
                return None;
            }
        };
        match serde_json::from_str::<PublicUser>(&user_json) {
            Ok(user) => Some(RestoredSession { token, user }),
            Err(_) => {
                debug!("stored user entry did not parse; clearing session");
                self.clear();
                None
            }
        }
    }
}
