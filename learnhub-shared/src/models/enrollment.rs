/// Enrollment model and database operations
///
/// An enrollment relates exactly one user to exactly one course plus a
/// progress value. References are by identifier only — no foreign keys, no
/// cascading delete — so deleting a user or course out of band leaves
/// dangling enrollments the system does not detect.
///
/// A unique index on `(user_id, course_id)` makes the insert itself the
/// atomic existence check: concurrent enrollments for the same pair resolve
/// to one winner, the loser gets a constraint violation.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE enrollments (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id UUID NOT NULL,
///     course_id UUID NOT NULL,
///     progress DOUBLE PRECISION NOT NULL DEFAULT 0,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
///
/// CREATE UNIQUE INDEX enrollments_user_course_key ON enrollments (user_id, course_id);
/// ```
///
/// # Example
///
/// ```no_run
/// use learnhub_shared::models::enrollment::{CreateEnrollment, Enrollment};
/// use learnhub_shared::db::pool::{create_pool, DatabaseConfig};
/// use uuid::Uuid;
///
/// # async fn example(user_id: Uuid, course_id: Uuid) -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let enrollment = Enrollment::create(&pool, CreateEnrollment { user_id, course_id }).await?;
/// assert_eq!(enrollment.progress, 0.0);
///
/// let updated = Enrollment::update_progress(&pool, user_id, course_id, 75.0).await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Enrollment model relating a user to a course with progress
///
/// Progress is a caller-supplied number with no unit or bounds defined by the
/// system: negative and arbitrarily large values are stored verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Enrollment {
    /// Unique enrollment ID (UUID v4)
    pub id: Uuid,

    /// Enrolled user ID (weak reference)
    pub user_id: Uuid,

    /// Course ID (weak reference)
    pub course_id: Uuid,

    /// Caller-supplied progress value, 0 on creation
    pub progress: f64,

    /// When the enrollment was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new enrollment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEnrollment {
    /// Enrolled user ID
    pub user_id: Uuid,

    /// Course ID
    pub course_id: Uuid,
}

impl Enrollment {
    /// Creates a new enrollment with progress 0
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The user is already enrolled in the course (unique constraint violation)
    /// - Database connection fails
    pub async fn create(pool: &PgPool, data: CreateEnrollment) -> Result<Self, sqlx::Error> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"
            INSERT INTO enrollments (user_id, course_id)
            VALUES ($1, $2)
            RETURNING id, user_id, course_id, progress, created_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.course_id)
        .fetch_one(pool)
        .await?;

        Ok(enrollment)
    }

    /// Finds the enrollment for a (user, course) pair
    ///
    /// The pair is unique under the current schema; the earliest-created row
    /// is taken deterministically in case the index predates the data.
    ///
    /// # Returns
    ///
    /// The enrollment if found, None otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn find_by_user_and_course(
        pool: &PgPool,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"
            SELECT id, user_id, course_id, progress, created_at
            FROM enrollments
            WHERE user_id = $1 AND course_id = $2
            ORDER BY created_at ASC, id ASC
            LIMIT 1
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .fetch_optional(pool)
        .await?;

        Ok(enrollment)
    }

    /// Overwrites the progress value for a (user, course) pair
    ///
    /// The caller-supplied value is stored verbatim — no clamping, no bounds
    /// check. The update targets the earliest-created row for the pair in a
    /// single statement; concurrent updates are last-write-wins.
    ///
    /// # Returns
    ///
    /// The updated enrollment, or None if no enrollment exists for the pair
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails
    pub async fn update_progress(
        pool: &PgPool,
        user_id: Uuid,
        course_id: Uuid,
        progress: f64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let enrollment = sqlx::query_as::<_, Enrollment>(
            r#"
            UPDATE enrollments
            SET progress = $3
            WHERE id = (
                SELECT id FROM enrollments
                WHERE user_id = $1 AND course_id = $2
                ORDER BY created_at ASC, id ASC
                LIMIT 1
            )
            RETURNING id, user_id, course_id, progress, created_at
            "#,
        )
        .bind(user_id)
        .bind(course_id)
        .bind(progress)
        .fetch_optional(pool)
        .await?;

        Ok(enrollment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_enrollment_struct() {
        let user_id = Uuid::new_v4();
        let course_id = Uuid::new_v4();

        let create = CreateEnrollment { user_id, course_id };

        assert_eq!(create.user_id, user_id);
        assert_eq!(create.course_id, course_id);
    }

    #[test]
    fn test_enrollment_serializes_identifiers() {
        let enrollment = Enrollment {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            course_id: Uuid::new_v4(),
            progress: 42.5,
            created_at: Utc::now(),
        };

        let value = serde_json::to_value(&enrollment).unwrap();
        assert_eq!(value["progress"], 42.5);
        assert_eq!(value["user_id"], enrollment.user_id.to_string());
        assert_eq!(value["course_id"], enrollment.course_id.to_string());
    }

    // Integration tests for database operations are in the api crate's
    // tests/ directory.
}
