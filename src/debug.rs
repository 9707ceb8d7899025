//! Escape hatches for the training exercises: reset the store, mint a token
//! for arbitrary claims. These live outside the access operations and are
//! only routed when debug mode is on; the core never calls them.

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::auth::token::TokenCodec;
use crate::state::AppState;

/// Build a token for an identity without going through login.
pub fn forge_token(codec: &TokenCodec, id: u64, username: &str, role: &str) -> String {
    info!(id, username, role, "forging token outside login");
    codec.issue(id, username, role)
}

/// Claims requested for a forged token.
#[derive(Debug, Deserialize)]
pub struct ForgeRequest {
    pub id: u64,
    pub username: String,
    pub role: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/debug/reset", post(reset))
        .route("/debug/token", post(forge))
}

async fn reset(State(state): State<AppState>) -> Json<Value> {
    state.store.reset();
    info!("user store reset to seed data");
    Json(json!({
        "message": "store reset to seed data",
        "users_count": state.store.count(),
    }))
}

async fn forge(State(state): State<AppState>, Json(req): Json<ForgeRequest>) -> Json<Value> {
    let token = forge_token(&state.codec, req.id, &req.username, &req.role);
    Json(json!({ "token": token }))
}
