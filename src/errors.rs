//! Centralized error handling.
//!
//! Provides a unified error type for the entire application. Responses
//! carry the client-facing status code in the body envelope
//! (`{message, status}`); the transport status line uses conventional
//! HTTP codes, which the external interface permits to differ.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

use crate::domain::ImageKind;
use crate::types::Violation;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Field-level input violations, returned as a list
    #[error("validation failed")]
    Validation(Vec<Violation>),

    // Registration guards
    #[error("Confirm Password does not match with password")]
    ConfirmPasswordMismatch,

    #[error("Email is already registered please try with another email")]
    AlreadyRegistered,

    #[error("{0} picture upload failed please try again")]
    MediaUpload(ImageKind),

    // Login guards
    #[error("Agency not found")]
    AgencyNotFound,

    #[error("Password mismatch")]
    PasswordMismatch,

    // Persistence failure at insert time
    #[error("Agency failed to save")]
    Storage(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[error("Token error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Internal error")]
    Internal(String),
}

impl AppError {
    /// Client-facing status code carried in the response body.
    pub fn body_status(&self) -> u16 {
        match self {
            AppError::Validation(_) => 402,
            AppError::ConfirmPasswordMismatch
            | AppError::AlreadyRegistered
            | AppError::MediaUpload(_)
            | AppError::PasswordMismatch
            | AppError::Database(_)
            | AppError::Jwt(_)
            | AppError::Internal(_) => 406,
            AppError::AgencyNotFound => 404,
            AppError::Storage(_) => 400,
        }
    }

    /// Transport status line.
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ConfirmPasswordMismatch | AppError::MediaUpload(_) => {
                StatusCode::NOT_ACCEPTABLE
            }
            AppError::AlreadyRegistered => StatusCode::CONFLICT,
            AppError::AgencyNotFound => StatusCode::NOT_FOUND,
            AppError::PasswordMismatch => StatusCode::UNAUTHORIZED,
            AppError::Storage(_) | AppError::Database(_) | AppError::Jwt(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Body `message` field. Violation lists are returned as an array;
    /// everything else as a string. Internal details are logged here and
    /// never leaked to the caller.
    fn message(&self) -> Value {
        match self {
            AppError::Validation(violations) => {
                json!(violations)
            }
            AppError::Storage(detail) => {
                tracing::error!("Storage error: {}", detail);
                Value::String(self.to_string())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                Value::String("Internal error".to_string())
            }
            AppError::Jwt(e) => {
                tracing::error!("Token error: {:?}", e);
                Value::String("Internal error".to_string())
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                Value::String("Internal error".to_string())
            }
            _ => Value::String(self.to_string()),
        }
    }

    /// Response body envelope: `{message, status}`.
    pub fn envelope(&self) -> Value {
        json!({
            "message": self.message(),
            "status": self.body_status(),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = self.envelope();
        (status, Json(body)).into_response()
    }
}

/// Login-scoped error wrapper. The login contract returns the same
/// envelope with an explicit `agency: null` on every failure.
#[derive(Debug)]
pub struct LoginError(pub AppError);

impl From<AppError> for LoginError {
    fn from(err: AppError) -> Self {
        LoginError(err)
    }
}

impl IntoResponse for LoginError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        let mut body = self.0.envelope();
        if let Value::Object(map) = &mut body {
            map.insert("agency".to_string(), Value::Null);
        }
        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn validation(violations: Vec<Violation>) -> Self {
        AppError::Validation(violations)
    }

    pub fn storage(detail: impl Into<String>) -> Self {
        AppError::Storage(detail.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        AppError::Internal(detail.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_status_follows_legacy_codes() {
        assert_eq!(AppError::Validation(vec![]).body_status(), 402);
        assert_eq!(AppError::ConfirmPasswordMismatch.body_status(), 406);
        assert_eq!(AppError::AlreadyRegistered.body_status(), 406);
        assert_eq!(AppError::AgencyNotFound.body_status(), 404);
        assert_eq!(AppError::PasswordMismatch.body_status(), 406);
        assert_eq!(AppError::storage("disk full").body_status(), 400);
        assert_eq!(AppError::internal("boom").body_status(), 406);
    }

    #[test]
    fn internal_detail_never_reaches_the_envelope() {
        let body = AppError::internal("connection refused to 10.0.0.7").envelope();
        assert_eq!(body["message"], "Internal error");
        assert_eq!(body["status"], 406);
    }

    #[test]
    fn login_error_carries_null_agency() {
        use axum::response::IntoResponse;

        let response = LoginError(AppError::PasswordMismatch).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn violations_serialize_as_a_list() {
        let violations = vec![Violation::new("email", "email", "Invalid email format")];
        let body = AppError::Validation(violations).envelope();
        assert!(body["message"].is_array());
        assert_eq!(body["message"][0]["field"], "email");
    }
}
