/// Course model and database operations
///
/// Courses carry their lesson identifiers inline as an ordered array; lessons
/// are opaque text identifiers with no table of their own. Courses are
/// created by administrators and are never mutated or deleted.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE courses (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     title TEXT NOT NULL,
///     description TEXT NOT NULL,
///     lessons TEXT[] NOT NULL DEFAULT '{}',
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use learnhub_shared::models::course::{Course, CreateCourse};
/// use learnhub_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let course = Course::create(&pool, CreateCourse {
///     title: "Intro to Rust".to_string(),
///     description: "Ownership, borrowing, lifetimes".to_string(),
///     lessons: vec!["lesson-1".to_string(), "lesson-2".to_string()],
/// }).await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Course model with an ordered list of lesson identifiers
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Course {
    /// Unique course ID (UUID v4)
    pub id: Uuid,

    /// Course title
    pub title: String,

    /// Course description
    pub description: String,

    /// Ordered lesson identifiers
    pub lessons: Vec<String>,

    /// When the course was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new course
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCourse {
    /// Course title
    pub title: String,

    /// Course description
    pub description: String,

    /// Ordered lesson identifiers (may be empty)
    #[serde(default)]
    pub lessons: Vec<String>,
}

impl Course {
    /// Creates a new course in the database
    ///
    /// The course is persisted verbatim; lesson order is preserved.
    ///
    /// # Returns
    ///
    /// The newly created course with generated ID and timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn create(pool: &PgPool, data: CreateCourse) -> Result<Self, sqlx::Error> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (title, description, lessons)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, lessons, created_at
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.lessons)
        .fetch_one(pool)
        .await?;

        Ok(course)
    }

    /// Finds a course by ID
    ///
    /// # Returns
    ///
    /// The course if found, None otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, lessons, created_at
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_course_struct() {
        let create = CreateCourse {
            title: "Intro to Rust".to_string(),
            description: "Ownership and borrowing".to_string(),
            lessons: vec!["l1".to_string(), "l2".to_string(), "l3".to_string()],
        };

        assert_eq!(create.title, "Intro to Rust");
        assert_eq!(create.lessons, vec!["l1", "l2", "l3"]);
    }

    #[test]
    fn test_create_course_lessons_default_empty() {
        let create: CreateCourse =
            serde_json::from_str(r#"{"title": "T", "description": "D"}"#).unwrap();

        assert!(create.lessons.is_empty());
    }

    // Integration tests for database operations are in the api crate's
    // tests/ directory.
}
