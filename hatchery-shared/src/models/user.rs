/// User model and database operations
///
/// Local user records mirror identities verified by the external auth
/// provider. Credential and session handling stay with the provider; the
/// only link back to it is `external_id`.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE user_type AS ENUM ('admin', 'member');
///
/// CREATE TABLE users (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     external_id VARCHAR(255) NOT NULL UNIQUE,
///     email VARCHAR(320) NOT NULL,
///     username VARCHAR(255) NOT NULL,
///     account_type user_type NOT NULL DEFAULT 'member',
///     is_verified BOOLEAN NOT NULL DEFAULT FALSE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// The unique constraint on `external_id` is what makes duplicate signup
/// triggers safe under concurrency: the second insert fails instead of
/// producing a second user.
///
/// # Example
///
/// ```no_run
/// use hatchery_shared::models::user::{CreateUser, User, UserType};
/// # use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), sqlx::Error> {
/// let user = User::create(
///     &pool,
///     CreateUser {
///         external_id: "ext-123".to_string(),
///         email: "user@example.com".to_string(),
///         username: "user".to_string(),
///         account_type: UserType::Admin,
///         is_verified: true,
///     },
/// )
/// .await?;
///
/// let found = User::find_by_external_id(&pool, "ext-123").await?;
/// assert_eq!(found.map(|u| u.id), Some(user.id));
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use uuid::Uuid;

/// Account type/tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    /// Elevated tier; users created by the signup flow get this
    Admin,

    /// Standard tier
    Member,
}

impl UserType {
    /// Converts the type to its database string form
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Admin => "admin",
            UserType::Member => "member",
        }
    }
}

/// User model representing a local account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID v4)
    pub id: Uuid,

    /// Identity reference at the external auth provider (unique)
    pub external_id: String,

    /// Email address as reported by the provider
    pub email: String,

    /// Username derived from the email local-part
    pub username: String,

    /// Account type/tier
    pub account_type: UserType,

    /// Whether the account is verified
    ///
    /// Signup-provisioned users are verified by construction; trust is
    /// inherited from the external provider.
    pub is_verified: bool,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Identity reference at the external auth provider
    pub external_id: String,

    /// Email address
    pub email: String,

    /// Derived username
    pub username: String,

    /// Account type/tier
    pub account_type: UserType,

    /// Verification flag
    pub is_verified: bool,
}

impl User {
    /// Creates a new user
    ///
    /// # Errors
    ///
    /// Returns an error if the external ID is already taken (unique
    /// constraint violation) or the database call fails.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        data: CreateUser,
    ) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (external_id, email, username, account_type, is_verified)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, external_id, email, username, account_type, is_verified,
                      created_at, updated_at
            "#,
        )
        .bind(data.external_id)
        .bind(data.email)
        .bind(data.username)
        .bind(data.account_type)
        .bind(data.is_verified)
        .fetch_one(executor)
        .await?;

        Ok(user)
    }

    /// Finds a user by their external identity reference
    ///
    /// Returns `None` if no local user mirrors that identity yet.
    pub async fn find_by_external_id(
        executor: impl PgExecutor<'_>,
        external_id: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, external_id, email, username, account_type, is_verified,
                   created_at, updated_at
            FROM users
            WHERE external_id = $1
            "#,
        )
        .bind(external_id)
        .fetch_optional(executor)
        .await?;

        Ok(user)
    }

    /// Finds a user by email address
    pub async fn find_by_email(
        executor: impl PgExecutor<'_>,
        email: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, external_id, email, username, account_type, is_verified,
                   created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(executor)
        .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_type_as_str() {
        assert_eq!(UserType::Admin.as_str(), "admin");
        assert_eq!(UserType::Member.as_str(), "member");
    }

    #[test]
    fn test_user_type_serde_roundtrip() {
        let json = serde_json::to_string(&UserType::Admin).unwrap();
        assert_eq!(json, "\"admin\"");

        let parsed: UserType = serde_json::from_str("\"member\"").unwrap();
        assert_eq!(parsed, UserType::Member);
    }

    // Integration tests for database operations are in
    // hatchery-signup/tests/provisioning_tests.rs
}
