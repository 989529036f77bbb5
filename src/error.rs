//! API error taxonomy.
//!
//! Every fallible operation in the service resolves to one of these
//! variants; the `IntoResponse` impl maps them onto the HTTP boundary so no
//! error escapes as a crash or a leaked internal message.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed, missing or out-of-range input. Carries per-field messages.
    #[error("Validation failed")]
    Validation(Vec<String>),

    /// Entity not resolvable in the actor's scope. Also returned for
    /// "exists but not visible" so existence is not leaked.
    #[error("{0}")]
    NotFound(String),

    /// State-gated operation refused (non-pending edit, overlapping range,
    /// referenced service type, ...).
    #[error("{0}")]
    Conflict(String),

    /// Authenticated but the role lacks the capability.
    #[error("{0}")]
    Forbidden(String),

    /// Missing, invalid or expired credential.
    #[error("{0}")]
    Auth(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    /// Single-message validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(vec![msg.into()])
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::Forbidden(msg.into())
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Auth(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            // Conflict maps to 400 alongside validation, matching the
            // reference API contract rather than 409.
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// JSON body for error responses, matching the `{ success, message,
/// errors? }` envelope of success responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            ApiError::Validation(errors) => ErrorBody {
                success: false,
                message: "Validation failed".to_string(),
                errors: Some(errors),
            },
            ApiError::Database(ref e) => {
                tracing::error!("Database error: {e}");
                ErrorBody {
                    success: false,
                    message: "Internal server error".to_string(),
                    errors: None,
                }
            }
            ApiError::Internal(ref e) => {
                tracing::error!("Internal error: {e:?}");
                ErrorBody {
                    success: false,
                    message: "Internal server error".to_string(),
                    errors: None,
                }
            }
            other => ErrorBody {
                success: false,
                message: other.to_string(),
                errors: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::validation("bad").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::conflict("stale").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::auth("nope").status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::forbidden("role").status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::not_found("gone").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_collects_messages() {
        let err = ApiError::Validation(vec!["a".into(), "b".into()]);
        match err {
            ApiError::Validation(msgs) => assert_eq!(msgs.len(), 2),
            _ => unreachable!(),
        }
    }
}
