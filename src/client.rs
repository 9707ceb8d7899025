//! In-process driver for the access operations, holding a session the way a
//! browser tab would: the token lives in the session store, goes out with
//! every call, and is replaced when a self-targeted role change reissues it.
//! The exploit walkthroughs in the exercises run against this client.

use crate::auth::services as auth;
use crate::error::ApiError;
use crate::session::{RestoredSession, SessionStore};
use crate::state::AppState;
use crate::system::dto::SystemConfig;
use crate::system::services as system;
use crate::users::model::{ProfilePatch, PublicUser};
use crate::users::services as users;

pub struct SessionClient {
    state: AppState,
    session: SessionStore,
}

impl SessionClient {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            session: SessionStore::new(),
        }
    }

    /// Reattach to previously persisted session state, as after a reload.
    pub fn with_session(state: AppState, session: SessionStore) -> Self {
        Self { state, session }
    }

    /// The stored session, if any. No validity check: a stale or forged
    /// token sits here just as comfortably as a fresh one.
    pub fn current(&self) -> Option<RestoredSession> {
        self.session.restore()
    }

    pub async fn login(&self, username: &str, credential: &str) -> Result<PublicUser, ApiError> {
        let session = auth::login(&self.state, username, credential).await?;
        self.session.save(&session.user, &session.token);
        Ok(session.user)
    }

    pub fn logout(&self) {
        self.session.clear();
    }

    pub async fn read_profile(&self, target_id: u64) -> Result<PublicUser, ApiError> {
        let token = self.session.token();
        users::read_profile(&self.state, token.as_deref(), target_id).await
    }

    pub async fn update_profile(
        &self,
        target_id: u64,
        patch: &ProfilePatch,
    ) -> Result<PublicUser, ApiError> {
        let token = self.session.token();
        users::update_profile(&self.state, token.as_deref(), target_id, patch).await
    }

    pub async fn list_users(&self) -> Result<Vec<PublicUser>, ApiError> {
        let token = self.session.token();
        users::list_users(&self.state, token.as_deref()).await
    }

    pub async fn delete_user(&self, target_id: u64) -> Result<PublicUser, ApiError> {
        let token = self.session.token();
        users::delete_user(&self.state, token.as_deref(), target_id).await
    }

    /// Change any record's role. A self-targeted change replaces the held
    /// session with the reissued token, so the escalated role takes effect
    /// for every following call.
    pub async fn change_role(&self, target_id: u64, role: &str) -> Result<PublicUser, ApiError> {
        let token = self.session.token();
        let update = users::change_role(&self.state, token.as_deref(), target_id, role).await?;
        if let Some(reissued) = &update.reissued_token {
            self.session.save(&update.user, reissued);
        }
        Ok(update.user)
    }

    pub async fn system_config(&self) -> Result<SystemConfig, ApiError> {
        let token = self.session.token();
        system::system_config(&self.state, token.as_deref()).await
    }
}
