/// Role model and database operations
///
/// Roles are a pre-seeded catalog (see the seed migration); the signup flow
/// only looks them up by name and treats a missing role as a fatal
/// precondition failure. Nothing in this crate creates roles at runtime.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE roles (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     name VARCHAR(100) NOT NULL UNIQUE,
///     description VARCHAR(512) NOT NULL DEFAULT '',
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use uuid::Uuid;

/// Role model representing a named permission bundle
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Role {
    /// Unique role ID (UUID v4)
    pub id: Uuid,

    /// Unique role name (e.g. "admin")
    pub name: String,

    /// Free-form description
    pub description: String,

    /// When the role was created
    pub created_at: DateTime<Utc>,
}

impl Role {
    /// Finds a role by exact name match
    pub async fn find_by_name(
        executor: impl PgExecutor<'_>,
        name: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let role = sqlx::query_as::<_, Role>(
            r#"
            SELECT id, name, description, created_at
            FROM roles
            WHERE name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(executor)
        .await?;

        Ok(role)
    }

    /// Lists all roles in the catalog
    pub async fn list(executor: impl PgExecutor<'_>) -> Result<Vec<Self>, sqlx::Error> {
        let roles = sqlx::query_as::<_, Role>(
            r#"
            SELECT id, name, description, created_at
            FROM roles
            ORDER BY name ASC
            "#,
        )
        .fetch_all(executor)
        .await?;

        Ok(roles)
    }
}
