/// Course endpoints
///
/// This module provides the course endpoints. All of them sit behind the
/// bearer-token layer; handlers receive the authenticated user through the
/// `AuthContext` request extension.
///
/// # Endpoints
///
/// - `POST /api/courses/create` - Create a course (administrators only)
/// - `POST /api/courses/enroll` - Enroll the caller in a course
/// - `POST /api/courses/track` - Overwrite the caller's progress in a course

use crate::{
    app::AppState,
    error::{ApiError, ApiResult, ValidationErrorDetail},
};
use axum::{extract::State, http::StatusCode, Extension, Json};
use learnhub_shared::{
    auth::middleware::{AuthContext, AUTH_FAILED_MESSAGE},
    models::{
        course::{Course, CreateCourse},
        enrollment::{CreateEnrollment, Enrollment},
        user::User,
    },
};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Create course request
///
/// Title and description are presence-checked; everything is persisted
/// verbatim, lessons in the order given.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCourseRequest {
    /// Course title
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    /// Course description
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    /// Ordered lesson identifiers
    #[serde(default)]
    pub lessons: Vec<String>,
}

/// Enroll request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollRequest {
    /// Course to enroll in
    pub course_id: Uuid,
}

/// Track progress request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackProgressRequest {
    /// Course whose enrollment to update
    pub course_id: Uuid,

    /// New progress value, stored verbatim (no bounds check)
    pub progress: f64,
}

/// Converts validator errors into the API error shape
fn validation_errors(e: validator::ValidationErrors) -> ApiError {
    let errors: Vec<ValidationErrorDetail> = e
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| ValidationErrorDetail {
                field: field.to_string(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Validation failed".to_string()),
            })
        })
        .collect();
    ApiError::ValidationError(errors)
}

/// Create a new course
///
/// Course creation is restricted to administrators: the caller's role is
/// looked up and checked before anything is persisted.
///
/// # Endpoint
///
/// ```text
/// POST /api/courses/create
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// {
///   "title": "Intro to Rust",
///   "description": "Ownership, borrowing, lifetimes",
///   "lessons": ["lesson-1", "lesson-2"]
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing title or description
/// - `401 Unauthorized`: Missing or invalid token
/// - `403 Forbidden`: Caller is not an administrator
/// - `500 Internal Server Error`: Server error
pub async fn create_course(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateCourseRequest>,
) -> ApiResult<(StatusCode, Json<Course>)> {
    req.validate().map_err(validation_errors)?;

    // The token is self-contained, so the role has to come from the store.
    let user = User::find_by_id(&state.db, auth.user_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized(AUTH_FAILED_MESSAGE.to_string()))?;

    if !user.role.can_create_courses() {
        return Err(ApiError::Forbidden(
            "Only administrators can create courses".to_string(),
        ));
    }

    let course = Course::create(
        &state.db,
        CreateCourse {
            title: req.title,
            description: req.description,
            lessons: req.lessons,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(course)))
}

/// Enroll the authenticated user in a course
///
/// # Endpoint
///
/// ```text
/// POST /api/courses/enroll
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// {
///   "courseId": "uuid"
/// }
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: Course does not exist
/// - `409 Conflict`: Already enrolled in this course
/// - `500 Internal Server Error`: Server error
pub async fn enroll(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<EnrollRequest>,
) -> ApiResult<(StatusCode, Json<Enrollment>)> {
    Course::find_by_id(&state.db, req.course_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Course not found".to_string()))?;

    // The unique (user, course) index is the existence check; a concurrent
    // duplicate enroll loses with a constraint violation mapped to 409.
    let enrollment = Enrollment::create(
        &state.db,
        CreateEnrollment {
            user_id: auth.user_id,
            course_id: req.course_id,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(enrollment)))
}

/// Overwrite the authenticated user's progress in a course
///
/// The progress value is stored verbatim: negative and arbitrarily large
/// values are accepted. Concurrent updates are last-write-wins.
///
/// # Endpoint
///
/// ```text
/// POST /api/courses/track
/// Authorization: Bearer <token>
/// Content-Type: application/json
///
/// {
///   "courseId": "uuid",
///   "progress": 75
/// }
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or invalid token
/// - `404 Not Found`: No enrollment for this user and course
/// - `500 Internal Server Error`: Server error
pub async fn track_progress(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<TrackProgressRequest>,
) -> ApiResult<Json<Enrollment>> {
    let enrollment =
        Enrollment::update_progress(&state.db, auth.user_id, req.course_id, req.progress)
            .await?
            .ok_or_else(|| ApiError::NotFound("Enrollment not found".to_string()))?;

    Ok(Json(enrollment))
}
