use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

/// Failure kinds surfaced by the access operations.
///
/// There is no Forbidden variant: once a caller is authenticated, every
/// operation treats them as fully authorized. That missing kind is the
/// access-control gap this application demonstrates.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No token was presented, or login credentials did not match.
    #[error("{0}")]
    Unauthenticated(String),
    /// A token was presented but did not decode, or has expired.
    #[error("{0}")]
    InvalidToken(String),
    /// The caller-supplied target id matched no record.
    #[error("{0}")]
    NotFound(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::InvalidToken(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Unauthenticated(_) => "unauthenticated",
            ApiError::InvalidToken(_) => "invalid_token",
            ApiError::NotFound(_) => "not_found",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let body = json!({
            "error": self.code(),
            "message": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_error_kinds() {
        assert_eq!(
            ApiError::Unauthenticated("no token".into()).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::InvalidToken("expired".into()).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::NotFound("user 9 not found".into()).status(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn message_passes_through() {
        let err = ApiError::NotFound("user 9 not found".into());
        assert_eq!(err.to_string(), "user 9 not found");
    }
}
