use tracing::warn;

use crate::auth::services::authenticate;
use crate::error::ApiError;
use crate::state::AppState;
use crate::system::dto::SystemConfig;

/// The full system configuration, signing secret included, for any caller
/// holding a structurally valid token. Role is decoded and ignored.
pub async fn system_config(state: &AppState, token: Option<&str>) -> Result<SystemConfig, ApiError> {
    state.simulate_latency().await;
    let caller = authenticate(&state.codec, token)?;

    warn!(
        caller_id = caller.id,
        caller_role = %caller.role,
        "system config served including signing secret"
    );

    let labels = &state.config.system;
    Ok(SystemConfig {
        server: labels.server.clone(),
        database: labels.database.clone(),
        users_count: state.store.count(),
        admin_usernames: labels.admin_users.clone(),
        secret_key: state.codec.secret().to_string(),
        last_backup_date: labels.last_backup.clone(),
        debug_mode: state.config.debug_mode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::services::login;
    use crate::state::AppState;

    #[tokio::test]
    async fn plain_users_receive_the_signing_secret() {
        let state = AppState::fake();
        let session = login(&state, "bob", "user123").await.unwrap();

        let config = system_config(&state, Some(&session.token)).await.unwrap();
        assert_eq!(config.secret_key, "vulnerable-secret-key");
        assert_eq!(config.users_count, 4);
        assert_eq!(config.admin_usernames, ["admin"]);

        // the leaked secret mints tokens indistinguishable from issued ones
        let forged = state.codec.issue(1, "admin", "admin");
        assert!(state.codec.parse(&forged).valid().is_some());
    }

    #[tokio::test]
    async fn unauthenticated_callers_are_still_turned_away() {
        let state = AppState::fake();
        let err = system_config(&state, None).await.unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated(_)));

        let err = system_config(&state, Some("x.y")).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidToken(_)));
    }

    #[tokio::test]
    async fn payload_serializes_with_the_expected_field_names() {
        let state = AppState::fake();
        let session = login(&state, "admin", "admin123").await.unwrap();
        let config = system_config(&state, Some(&session.token)).await.unwrap();

        let json = serde_json::to_string(&config).unwrap();
        for field in [
            "server",
            "database",
            "usersCount",
            "adminUsernames",
            "secretKey",
            "lastBackupDate",
            "debugMode",
        ] {
            assert!(json.contains(field), "missing {field}");
        }
    }
}
