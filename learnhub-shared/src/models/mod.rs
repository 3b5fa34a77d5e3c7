/// Database models for LearnHub
///
/// This module contains all database models and their CRUD operations.
/// One table per entity; identifiers are database-generated UUIDs.
/// Enrollments reference users and courses by identifier only — there is no
/// cascading delete, and dangling references are not detected.
///
/// # Models
///
/// - `user`: User accounts, credentials, and roles
/// - `course`: Courses with an ordered list of lessons
/// - `enrollment`: User-course enrollment with progress tracking
///
/// # Example
///
/// ```no_run
/// use learnhub_shared::models::user::{CreateUser, User, UserRole};
/// use learnhub_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let new_user = CreateUser {
///     name: "Alice".to_string(),
///     email: "alice@example.com".to_string(),
///     password_hash: "$argon2id$...".to_string(),
///     role: UserRole::Member,
/// };
///
/// let user = User::create(&pool, new_user).await?;
/// # Ok(())
/// # }
/// ```

pub mod course;
pub mod enrollment;
pub mod user;
