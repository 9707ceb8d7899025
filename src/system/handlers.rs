use axum::{extract::State, routing::get, Json, Router};
use tracing::instrument;

use crate::auth::extractors::BearerToken;
use crate::error::ApiError;
use crate::state::AppState;
use crate::system::dto::{Health, SystemConfig};
use crate::system::services;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/system/info", get(system_info))
        .route("/health", get(health))
}

#[instrument(skip(state, token))]
pub async fn system_info(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<SystemConfig>, ApiError> {
    let config = services::system_config(&state, token.as_deref()).await?;
    Ok(Json(config))
}

#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> Json<Health> {
    Json(Health {
        message: "access-control training API up",
        users_count: state.store.count(),
    })
}
