/// Authentication middleware support for Axum
///
/// The API server gates every identity-scoped route behind a bearer-token
/// check. This module provides the pieces that layer uses: header parsing,
/// the authentication context injected into request extensions, and the
/// error type for authentication failures.
///
/// Missing header, malformed header, expired token, and invalid signature are
/// deliberately indistinguishable to the caller: every [`AuthError`] variant
/// renders as the same 401 response.
///
/// # Example
///
/// ```
/// use axum::Extension;
/// use learnhub_shared::auth::middleware::AuthContext;
///
/// async fn handler(Extension(auth): Extension<AuthContext>) -> String {
///     format!("User: {}", auth.user_id)
/// }
/// ```

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use super::jwt::Claims;

/// Message returned for every authentication failure
pub const AUTH_FAILED_MESSAGE: &str = "Invalid or missing authentication token";

/// Authentication context added to request extensions
///
/// Added to the request after successful token validation. Handlers extract
/// it with Axum's `Extension` extractor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct AuthContext {
    /// Authenticated user ID
    pub user_id: Uuid,
}

impl AuthContext {
    /// Creates an auth context from validated JWT claims
    pub fn from_claims(claims: &Claims) -> Self {
        Self {
            user_id: claims.sub,
        }
    }
}

/// Error type for authentication failures
///
/// The variants exist for server-side logging; externally they all produce
/// the identical 401 response.
#[derive(Debug)]
pub enum AuthError {
    /// Missing authorization header
    MissingCredentials,

    /// Authorization header is not a Bearer token
    InvalidFormat(String),

    /// Token validation failed (bad signature, expired, malformed)
    InvalidToken(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": "unauthorized",
            "message": AUTH_FAILED_MESSAGE,
        }));
        (StatusCode::UNAUTHORIZED, body).into_response()
    }
}

/// Extracts the bearer token from the Authorization header
///
/// # Errors
///
/// - `AuthError::MissingCredentials` if the header is absent or not valid UTF-8
/// - `AuthError::InvalidFormat` if the header does not carry a Bearer token
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingCredentials)?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::InvalidFormat("Expected Bearer token".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_bearer_token_present() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );

        let token = bearer_token(&headers).expect("Should extract token");
        assert_eq!(token, "abc.def.ghi");
    }

    #[test]
    fn test_bearer_token_missing_header() {
        let headers = HeaderMap::new();

        let result = bearer_token(&headers);
        assert!(matches!(result, Err(AuthError::MissingCredentials)));
    }

    #[test]
    fn test_bearer_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Basic dXNlcjpwYXNz"),
        );

        let result = bearer_token(&headers);
        assert!(matches!(result, Err(AuthError::InvalidFormat(_))));
    }

    #[test]
    fn test_auth_errors_are_indistinguishable() {
        // Every failure variant must render identically
        let responses = [
            AuthError::MissingCredentials.into_response(),
            AuthError::InvalidFormat("wrong scheme".to_string()).into_response(),
            AuthError::InvalidToken("expired".to_string()).into_response(),
        ];

        for response in &responses {
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[test]
    fn test_auth_context_from_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new(user_id);

        let ctx = AuthContext::from_claims(&claims);
        assert_eq!(ctx.user_id, user_id);
    }
}
