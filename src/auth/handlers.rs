use axum::{extract::State, routing::post, Json, Router};
use tracing::instrument;

use crate::auth::dto::{LoginRequest, LoginSession};
use crate::auth::services;
use crate::error::ApiError;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginSession>, ApiError> {
    let session = services::login(&state, &payload.username, &payload.credential).await?;
    Ok(Json(session))
}
