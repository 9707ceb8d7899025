use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use tracing::instrument;

use crate::auth::extractors::BearerToken;
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::dto::{ChangeRoleRequest, RoleUpdate};
use crate::users::model::{ProfilePatch, PublicUser};
use crate::users::services;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/:id",
            get(read_profile).put(update_profile).delete(delete_user),
        )
        .route("/users/:id/role", put(change_role))
        .route("/admin/users", get(list_users))
}

#[instrument(skip(state, token))]
pub async fn read_profile(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(id): Path<u64>,
) -> Result<Json<PublicUser>, ApiError> {
    let user = services::read_profile(&state, token.as_deref(), id).await?;
    Ok(Json(user))
}

#[instrument(skip(state, token, patch))]
pub async fn update_profile(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(id): Path<u64>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<PublicUser>, ApiError> {
    let user = services::update_profile(&state, token.as_deref(), id, &patch).await?;
    Ok(Json(user))
}

#[instrument(skip(state, token))]
pub async fn list_users(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<Vec<PublicUser>>, ApiError> {
    let users = services::list_users(&state, token.as_deref()).await?;
    Ok(Json(users))
}

#[instrument(skip(state, token))]
pub async fn delete_user(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(id): Path<u64>,
) -> Result<Json<PublicUser>, ApiError> {
    let removed = services::delete_user(&state, token.as_deref(), id).await?;
    Ok(Json(removed))
}

#[instrument(skip(state, token, payload))]
pub async fn change_role(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
    Path(id): Path<u64>,
    Json(payload): Json<ChangeRoleRequest>,
) -> Result<Json<RoleUpdate>, ApiError> {
    let update = services::change_role(&state, token.as_deref(), id, &payload.role).await?;
    Ok(Json(update))
}
