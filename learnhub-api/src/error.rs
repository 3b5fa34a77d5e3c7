/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// All handlers return `Result<T, ApiError>` which automatically converts
/// to the appropriate HTTP status code with a JSON body.
///
/// Domain failures carry a stable status and a human-readable message.
/// Unexpected storage/infrastructure failures are logged with detail
/// server-side and surfaced as an opaque 500 — no internal detail leaks to
/// the caller, and there is no retry or transient/permanent distinction:
/// every unexpected error is terminal for that request.
///
/// # Example
///
/// ```ignore
/// use learnhub_api::error::{ApiError, ApiResult};
/// use axum::Json;
///
/// async fn handler() -> ApiResult<Json<serde_json::Value>> {
///     let data = fetch_data().await?;
///     Ok(Json(serde_json::json!({ "data": data })))
/// }
/// ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use learnhub_shared::auth::{jwt::JwtError, middleware, password::PasswordError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400) - duplicate identity, invalid credentials
    BadRequest(String),

    /// Unauthorized (401) - missing, malformed, expired, or forged token
    Unauthorized(String),

    /// Forbidden (403) - authenticated but lacking the required role
    Forbidden(String),

    /// Not found (404) - course or enrollment does not exist
    NotFound(String),

    /// Conflict (409) - duplicate enrollment
    Conflict(String),

    /// Presence-check failures (400)
    ValidationError(Vec<ValidationErrorDetail>),

    /// Internal server error (500)
    InternalError(String),
}

/// Validation error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorDetail {
    /// Field that failed validation
    pub field: String,

    /// Error message
    pub message: String,
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code (e.g., "bad_request", "unauthorized")
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationErrorDetail>>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ApiError::ValidationError(errors) => {
                write!(f, "Validation failed: {} errors", errors.len())
            }
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg, None),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg, None),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg, None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg, None),
            ApiError::ValidationError(errors) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                "Request validation failed".to_string(),
                Some(errors),
            ),
            ApiError::InternalError(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error_code.to_string(),
            message,
            details,
        });

        (status, body).into_response()
    }
}

/// Convert sqlx errors to API errors
///
/// Unique-constraint violations on known indexes map to domain errors; the
/// email check backstops the lookup-then-insert race in registration, and the
/// enrollment pair index is the atomic existence check for enrolling.
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".to_string()),
            sqlx::Error::Database(db_err) => {
                if let Some(constraint) = db_err.constraint() {
                    if constraint.contains("email") {
                        return ApiError::BadRequest("User already exists".to_string());
                    }
                    if constraint.contains("user_course") {
                        return ApiError::Conflict("Already enrolled in this course".to_string());
                    }
                }

                ApiError::InternalError(format!("Database error: {}", db_err))
            }
            _ => ApiError::InternalError(format!("Database error: {}", err)),
        }
    }
}

/// Convert auth middleware errors to API errors
///
/// All variants collapse into one 401 so missing, malformed, expired, and
/// forged tokens are externally indistinguishable.
impl From<middleware::AuthError> for ApiError {
    fn from(_: middleware::AuthError) -> Self {
        ApiError::Unauthorized(middleware::AUTH_FAILED_MESSAGE.to_string())
    }
}

/// Convert password errors to API errors
///
/// Hashing only fails on infrastructure problems; credential mismatches are
/// `Ok(false)` and never reach this path.
impl From<PasswordError> for ApiError {
    fn from(err: PasswordError) -> Self {
        ApiError::InternalError(format!("Password operation failed: {}", err))
    }
}

/// Convert JWT errors to API errors
///
/// Token creation failures are server-side problems; every validation
/// failure is the uniform 401.
impl From<JwtError> for ApiError {
    fn from(err: JwtError) -> Self {
        match err {
            JwtError::CreateError(msg) => {
                ApiError::InternalError(format!("Token creation failed: {}", msg))
            }
            JwtError::Expired | JwtError::ValidationError(_) => {
                ApiError::Unauthorized(middleware::AUTH_FAILED_MESSAGE.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::BadRequest("Invalid email or password".to_string());
        assert_eq!(err.to_string(), "Bad request: Invalid email or password");

        let err = ApiError::NotFound("Course not found".to_string());
        assert_eq!(err.to_string(), "Not found: Course not found");
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (
                ApiError::BadRequest("User already exists".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::Unauthorized("nope".to_string()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                ApiError::Forbidden("admins only".to_string()),
                StatusCode::FORBIDDEN,
            ),
            (
                ApiError::NotFound("Enrollment not found".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                ApiError::Conflict("Already enrolled".to_string()),
                StatusCode::CONFLICT,
            ),
            (
                ApiError::InternalError("boom".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_validation_error_maps_to_bad_request() {
        let err = ApiError::ValidationError(vec![ValidationErrorDetail {
            field: "title".to_string(),
            message: "Title is required".to_string(),
        }]);

        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_auth_error_collapses_to_uniform_401() {
        let variants = [
            middleware::AuthError::MissingCredentials,
            middleware::AuthError::InvalidFormat("basic".to_string()),
            middleware::AuthError::InvalidToken("expired".to_string()),
        ];

        for variant in variants {
            let err: ApiError = variant.into();
            match err {
                ApiError::Unauthorized(msg) => {
                    assert_eq!(msg, middleware::AUTH_FAILED_MESSAGE)
                }
                other => panic!("Expected Unauthorized, got {:?}", other),
            }
        }
    }
}
