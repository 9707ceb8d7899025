use tracing::{info, warn};

use crate::auth::claims::Claims;
use crate::auth::dto::LoginSession;
use crate::auth::token::{TokenCodec, TokenOutcome};
use crate::error::ApiError;
use crate::state::AppState;
use crate::users::model::PublicUser;

/// The whole gate in front of every data operation: a token must be present
/// and must decode. Whose claims they are is never compared to anything the
/// operation is about to touch.
pub fn authenticate(codec: &TokenCodec, token: Option<&str>) -> Result<Claims, ApiError> {
    let token = token.ok_or_else(|| ApiError::Unauthenticated("token required".into()))?;
    match codec.parse(token) {
        TokenOutcome::Valid(claims) => Ok(claims),
        TokenOutcome::Expired => Err(ApiError::InvalidToken("token expired".into())),
        TokenOutcome::Malformed => Err(ApiError::InvalidToken("token malformed".into())),
    }
}

/// Exact-match login. Both fields must match a record verbatim; any mismatch
/// is the same authentication failure.
pub async fn login(
    state: &AppState,
    username: &str,
    credential: &str,
) -> Result<LoginSession, ApiError> {
    state.simulate_latency().await;

    let user = state
        .store
        .find_by_login(username, credential)
        .ok_or_else(|| {
            warn!(username, "login rejected");
            ApiError::Unauthenticated("invalid credentials".into())
        })?;

    let token = state.codec.issue(user.id, &user.username, &user.role);
    info!(user_id = user.id, username = %user.username, "user logged in");
    Ok(LoginSession {
        token,
        user: PublicUser::from(user),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::token::TokenOutcome;
    use crate::state::AppState;
    use time::OffsetDateTime;

    #[tokio::test]
    async fn login_succeeds_on_exact_match() {
        let state = AppState::fake();
        let session = login(&state, "john", "user123").await.expect("login");
        assert_eq!(session.user.id, 2);
        assert_eq!(session.user.username, "john");

        let claims = state.codec.parse(&session.token).valid().unwrap();
        assert_eq!(claims.id, 2);
        assert_eq!(claims.role, "user");
    }

    #[tokio::test]
    async fn login_fails_on_any_single_field_mismatch() {
        let state = AppState::fake();
        for (username, credential) in [
            ("john", "wrong"),
            ("wrong", "user123"),
            ("john", "USER123"),
            ("John", "user123"),
            ("", ""),
        ] {
            let err = login(&state, username, credential).await.unwrap_err();
            assert!(matches!(err, ApiError::Unauthenticated(_)), "{username}/{credential}");
        }
    }

    #[tokio::test]
    async fn login_response_carries_no_credential() {
        let state = AppState::fake();
        let session = login(&state, "admin", "admin123").await.unwrap();
        let json = serde_json::to_string(&session).unwrap();
        assert!(!json.contains("admin123"));
    }

    #[test]
    fn authenticate_requires_a_token() {
        let state = AppState::fake();
        let err = authenticate(&state.codec, None).unwrap_err();
        assert!(matches!(err, ApiError::Unauthenticated(_)));
    }

    #[test]
    fn authenticate_maps_parse_outcomes_to_invalid_token() {
        let state = AppState::fake();

        let err = authenticate(&state.codec, Some("garbage")).unwrap_err();
        assert!(matches!(err, ApiError::InvalidToken(_)));

        let now = OffsetDateTime::now_utc().unix_timestamp();
        let expired = state.codec.issue_claims(&Claims {
            id: 1,
            username: "admin".into(),
            role: "admin".into(),
            iat: now - 100_000,
            exp: now - 10,
        });
        assert_eq!(state.codec.parse(&expired), TokenOutcome::Expired);
        let err = authenticate(&state.codec, Some(&expired)).unwrap_err();
        assert!(matches!(err, ApiError::InvalidToken(_)));
    }

    #[test]
    fn authenticate_never_relates_claims_to_anything() {
        // A token for an identity that no longer exists (or never did) still
        // authenticates; only shape and expiry matter.
        let state = AppState::fake();
        let token = state.codec.issue(999, "ghost", "superadmin");
        let claims = authenticate(&state.codec, Some(&token)).unwrap();
        assert_eq!(claims.id, 999);
        assert_eq!(claims.role, "superadmin");
    }
}
