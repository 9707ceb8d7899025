//! The data operations on user records.
//!
//! Every operation here runs the same flawed contract: authenticate the
//! token, then act on the caller-supplied target id without ever comparing
//! it to the caller's own identity or role. Each one logs who did what to
//! whom, which is the only trace the missing checks leave behind.

use tracing::warn;

use crate::auth::services::authenticate;
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::dto::RoleUpdate;
use crate::users::model::{ProfilePatch, PublicUser};

fn not_found(target_id: u64) -> ApiError {
    ApiError::NotFound(format!("user {target_id} not found"))
}

/// Read any record by id. The caller's own id and role are decoded from the
/// token and then ignored.
pub async fn read_profile(
    state: &AppState,
    token: Option<&str>,
    target_id: u64,
) -> Result<PublicUser, ApiError> {
    state.simulate_latency().await;
    let caller = authenticate(&state.codec, token)?;

    let user = state
        .store
        .find_by_id(target_id)
        .ok_or_else(|| not_found(target_id))?;

    warn!(
        caller_id = caller.id,
        caller_role = %caller.role,
        target_id,
        "profile read without ownership check"
    );
    Ok(PublicUser::from(user))
}

/// Merge a patch into any record's profile, unconditionally.
pub async fn update_profile(
    state: &AppState,
    token: Option<&str>,
    target_id: u64,
    patch: &ProfilePatch,
) -> Result<PublicUser, ApiError> {
    state.simulate_latency().await;
    let caller = authenticate(&state.codec, token)?;

    let user = state
        .store
        .merge_profile(target_id, patch)
        .ok_or_else(|| not_found(target_id))?;

    warn!(
        caller_id = caller.id,
        caller_username = %caller.username,
        target_id,
        "profile updated without ownership check"
    );
    Ok(PublicUser::from(user))
}

/// Every record in the store, for any authenticated caller.
pub async fn list_users(state: &AppState, token: Option<&str>) -> Result<Vec<PublicUser>, ApiError> {
    state.simulate_latency().await;
    let caller = authenticate(&state.codec, token)?;

    warn!(
        caller_id = caller.id,
        caller_role = %caller.role,
        "full user list served without role check"
    );
    Ok(state
        .store
        .list()
        .into_iter()
        .map(PublicUser::from)
        .collect())
}

/// Remove any record by id. Nothing stops a caller from deleting themself;
/// only the UI layer of the original exercise discourages it.
pub async fn delete_user(
    state: &AppState,
    token: Option<&str>,
    target_id: u64,
) -> Result<PublicUser, ApiError> {
    state.simulate_latency().await;
    let caller = authenticate(&state.codec, token)?;

    let removed = state
        .store
        .remove(target_id)
        .ok_or_else(|| not_found(target_id))?;

    warn!(
        caller_id = caller.id,
        target_id,
        target_username = %removed.username,
        "user deleted without role check"
    );
    Ok(PublicUser::from(removed))
}

/// Overwrite any record's role. When the caller retargets their own record,
/// a fresh token is issued for the updated record so the held session can
/// reflect the new role immediately.
pub async fn change_role(
    state: &AppState,
    token: Option<&str>,
    target_id: u64,
    new_role: &str,
) -> Result<RoleUpdate, ApiError> {
    state.simulate_latency().await;
    let caller = authenticate(&state.codec, token)?;

    let previous = state
        .store
        .find_by_id(target_id)
        .ok_or_else(|| not_found(target_id))?;
    let updated = state
        .store
        .set_role(target_id, new_role)
        .ok_or_else(|| not_found(target_id))?;

    warn!(
        caller_id = caller.id,
        target_id,
        old_role = %previous.role,
        new_role,
        "role changed without role check"
    );

    let reissued_token = (target_id == caller.id)
        .then(|| state.codec.issue(updated.id, &updated.username, &updated.role));
    Ok(RoleUpdate {
        user: PublicUser::from(updated),
        reissued_token,
    })
}
