/// Membership model and database operations
///
/// Memberships bind a user to an organization with a role from the role
/// catalog. The signup flow creates exactly one membership per provisioning
/// run: the new user in their default organization with the "admin" role.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE organization_members (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     organization_id UUID NOT NULL REFERENCES organizations(id) ON DELETE CASCADE,
///     role_id UUID NOT NULL REFERENCES roles(id),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     UNIQUE (user_id, organization_id)
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use uuid::Uuid;

/// Membership model representing a user-organization relationship
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Membership {
    /// Unique membership ID (UUID v4)
    pub id: Uuid,

    /// User ID
    pub user_id: Uuid,

    /// Organization ID
    pub organization_id: Uuid,

    /// Role within the organization
    pub role_id: Uuid,

    /// When the membership was created
    pub created_at: DateTime<Utc>,

    /// When the membership was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new membership
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMembership {
    /// User ID
    pub user_id: Uuid,

    /// Organization ID
    pub organization_id: Uuid,

    /// Role ID (resolved by name lookup before creation)
    pub role_id: Uuid,
}

impl Membership {
    /// Creates a new membership (adds a user to an organization)
    ///
    /// # Errors
    ///
    /// Returns an error if the membership already exists (unique constraint
    /// violation), a referenced row doesn't exist (foreign key violation),
    /// or the database call fails.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        data: CreateMembership,
    ) -> Result<Self, sqlx::Error> {
        let membership = sqlx::query_as::<_, Membership>(
            r#"
            INSERT INTO organization_members (user_id, organization_id, role_id)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, organization_id, role_id, created_at, updated_at
            "#,
        )
        .bind(data.user_id)
        .bind(data.organization_id)
        .bind(data.role_id)
        .fetch_one(executor)
        .await?;

        Ok(membership)
    }

    /// Finds the membership linking a user to an organization
    pub async fn find(
        executor: impl PgExecutor<'_>,
        user_id: Uuid,
        organization_id: Uuid,
    ) -> Result<Option<Self>, sqlx::Error> {
        let membership = sqlx::query_as::<_, Membership>(
            r#"
            SELECT id, user_id, organization_id, role_id, created_at, updated_at
            FROM organization_members
            WHERE user_id = $1 AND organization_id = $2
            "#,
        )
        .bind(user_id)
        .bind(organization_id)
        .fetch_optional(executor)
        .await?;

        Ok(membership)
    }

    /// Lists all memberships for a user
    pub async fn list_by_user(
        executor: impl PgExecutor<'_>,
        user_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let memberships = sqlx::query_as::<_, Membership>(
            r#"
            SELECT id, user_id, organization_id, role_id, created_at, updated_at
            FROM organization_members
            WHERE user_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(executor)
        .await?;

        Ok(memberships)
    }
}
