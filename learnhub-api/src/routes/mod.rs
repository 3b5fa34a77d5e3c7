/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Authentication endpoints (register, login)
/// - `courses`: Course endpoints (create, enroll, track progress)

pub mod auth;
pub mod courses;
pub mod health;
