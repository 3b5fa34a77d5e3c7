/// Tests for the bearer-token gate on protected routes
///
/// These tests run against a router whose pool never connects: every request
/// here is rejected (or validated) before any database access, so no
/// PostgreSQL instance is needed.
///
/// The property under test: missing header, malformed header, garbage token,
/// and expired token must produce the same externally visible failure.

mod common;

use axum::http::StatusCode;
use chrono::Duration;
use common::{TestContext, TEST_JWT_SECRET};
use learnhub_shared::auth::jwt::{create_token, Claims};
use serde_json::json;
use uuid::Uuid;

fn course_body() -> serde_json::Value {
    json!({
        "title": "Intro to Rust",
        "description": "Ownership and borrowing",
        "lessons": ["lesson-1"],
    })
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let ctx = TestContext::without_database();

    let (status, body) = ctx.post_json("/api/courses/create", None, course_body()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized");
}

#[tokio::test]
async fn test_auth_failures_are_indistinguishable() {
    let ctx = TestContext::without_database();

    // Expired token, signed with the right secret
    let expired_claims = Claims::with_expiration(Uuid::new_v4(), Duration::seconds(-3600));
    let expired = create_token(&expired_claims, TEST_JWT_SECRET).unwrap();

    // Token signed with the wrong secret
    let forged_claims = Claims::new(Uuid::new_v4());
    let forged = create_token(&forged_claims, "some-other-secret-entirely-wrong!").unwrap();

    let mut responses = Vec::new();
    for token in [None, Some("not.a.jwt"), Some(expired.as_str()), Some(forged.as_str())] {
        let (status, body) = ctx
            .post_json("/api/courses/enroll", token, json!({ "courseId": Uuid::new_v4() }))
            .await;
        responses.push((status, body));
    }

    // Malformed header (wrong scheme) goes through the raw request path
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/courses/enroll")
        .header("content-type", "application/json")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(axum::body::Body::from(
            json!({ "courseId": Uuid::new_v4() }).to_string(),
        ))
        .unwrap();
    let mut app = ctx.app.clone();
    let response = tower::Service::call(&mut app, request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    responses.push((status, serde_json::from_slice(&bytes).unwrap()));

    let (first_status, first_body) = &responses[0];
    assert_eq!(*first_status, StatusCode::UNAUTHORIZED);
    for (status, body) in &responses[1..] {
        assert_eq!(status, first_status);
        assert_eq!(body, first_body, "auth failure responses must be identical");
    }
}

#[tokio::test]
async fn test_protected_routes_all_gated() {
    let ctx = TestContext::without_database();

    let routes = [
        ("/api/courses/create", course_body()),
        ("/api/courses/enroll", json!({ "courseId": Uuid::new_v4() })),
        (
            "/api/courses/track",
            json!({ "courseId": Uuid::new_v4(), "progress": 10 }),
        ),
    ];

    for (uri, body) in routes {
        let (status, _) = ctx.post_json(uri, None, body).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{} is not gated", uri);
    }
}

#[tokio::test]
async fn test_register_presence_checks() {
    let ctx = TestContext::without_database();

    // Validation runs before any database access
    let (status, body) = ctx
        .post_json(
            "/api/auth/register",
            None,
            json!({ "name": "", "email": "a@example.com", "password": "pw" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["details"][0]["field"], "name");
}

#[tokio::test]
async fn test_create_course_presence_checks() {
    let ctx = TestContext::without_database();

    let token = create_token(&Claims::new(Uuid::new_v4()), TEST_JWT_SECRET).unwrap();

    let (status, body) = ctx
        .post_json(
            "/api/courses/create",
            Some(&token),
            json!({ "title": "", "description": "" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn test_health_reports_degraded_without_database() {
    let ctx = TestContext::without_database();

    let (status, body) = ctx.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["database"], "disconnected");
}
