/// Feature flag model and database operations
///
/// Feature flags are per-organization boolean toggles for named product
/// capabilities. New organizations get one row per entry in
/// [`FeatureName::DEFAULT_CATALOG`], all enabled.
///
/// # Schema
///
/// ```sql
/// CREATE TYPE feature_name AS ENUM (
///     'domain', 'terminal', 'notifications', 'file-manager', 'self-hosted',
///     'audit', 'github-connector', 'monitoring', 'container'
/// );
///
/// CREATE TABLE feature_flags (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     organization_id UUID NOT NULL REFERENCES organizations(id) ON DELETE CASCADE,
///     feature_name feature_name NOT NULL,
///     is_enabled BOOLEAN NOT NULL DEFAULT TRUE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     UNIQUE (organization_id, feature_name)
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgExecutor;
use uuid::Uuid;

/// Named product capabilities that can be toggled per organization
///
/// This enumeration is the versioned feature catalog. Extending the product
/// with a new toggle means adding a variant here (and to the `feature_name`
/// database enum) without touching the provisioning logic, which iterates
/// over [`FeatureName::DEFAULT_CATALOG`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "feature_name", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum FeatureName {
    /// Custom domain management
    Domain,

    /// Web terminal access
    Terminal,

    /// Notification delivery
    Notifications,

    /// File manager
    FileManager,

    /// Self-hosted deployments
    SelfHosted,

    /// Audit logging
    Audit,

    /// GitHub connector
    GithubConnector,

    /// Monitoring dashboards
    Monitoring,

    /// Container management
    Container,
}

impl FeatureName {
    /// Catalog of features seeded for every new organization, in seeding order
    pub const DEFAULT_CATALOG: [FeatureName; 9] = [
        FeatureName::Domain,
        FeatureName::Terminal,
        FeatureName::Notifications,
        FeatureName::FileManager,
        FeatureName::SelfHosted,
        FeatureName::Audit,
        FeatureName::GithubConnector,
        FeatureName::Monitoring,
        FeatureName::Container,
    ];

    /// Converts the feature name to its database string form
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureName::Domain => "domain",
            FeatureName::Terminal => "terminal",
            FeatureName::Notifications => "notifications",
            FeatureName::FileManager => "file-manager",
            FeatureName::SelfHosted => "self-hosted",
            FeatureName::Audit => "audit",
            FeatureName::GithubConnector => "github-connector",
            FeatureName::Monitoring => "monitoring",
            FeatureName::Container => "container",
        }
    }
}

/// Feature flag model representing one toggle for one organization
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FeatureFlag {
    /// Unique flag ID (UUID v4)
    pub id: Uuid,

    /// Organization the flag belongs to
    pub organization_id: Uuid,

    /// Which capability this flag controls
    pub feature_name: FeatureName,

    /// Whether the capability is enabled
    pub is_enabled: bool,

    /// When the flag was created
    pub created_at: DateTime<Utc>,

    /// When the flag was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new feature flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFeatureFlag {
    /// Organization the flag belongs to
    pub organization_id: Uuid,

    /// Which capability this flag controls
    pub feature_name: FeatureName,

    /// Whether the capability starts enabled
    pub is_enabled: bool,
}

impl FeatureFlag {
    /// Creates a new feature flag
    ///
    /// # Errors
    ///
    /// Returns an error if a flag for this (organization, feature) pair
    /// already exists, or the database call fails.
    pub async fn create(
        executor: impl PgExecutor<'_>,
        data: CreateFeatureFlag,
    ) -> Result<Self, sqlx::Error> {
        let flag = sqlx::query_as::<_, FeatureFlag>(
            r#"
            INSERT INTO feature_flags (organization_id, feature_name, is_enabled)
            VALUES ($1, $2, $3)
            RETURNING id, organization_id, feature_name, is_enabled, created_at, updated_at
            "#,
        )
        .bind(data.organization_id)
        .bind(data.feature_name)
        .bind(data.is_enabled)
        .fetch_one(executor)
        .await?;

        Ok(flag)
    }

    /// Lists all feature flags for an organization, in creation order
    pub async fn list_by_organization(
        executor: impl PgExecutor<'_>,
        organization_id: Uuid,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let flags = sqlx::query_as::<_, FeatureFlag>(
            r#"
            SELECT id, organization_id, feature_name, is_enabled, created_at, updated_at
            FROM feature_flags
            WHERE organization_id = $1
            ORDER BY created_at ASC, feature_name ASC
            "#,
        )
        .bind(organization_id)
        .fetch_all(executor)
        .await?;

        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_catalog_has_nine_distinct_entries() {
        assert_eq!(FeatureName::DEFAULT_CATALOG.len(), 9);

        let distinct: HashSet<&str> = FeatureName::DEFAULT_CATALOG
            .iter()
            .map(|f| f.as_str())
            .collect();
        assert_eq!(distinct.len(), 9);
    }

    #[test]
    fn test_feature_name_as_str() {
        assert_eq!(FeatureName::Domain.as_str(), "domain");
        assert_eq!(FeatureName::FileManager.as_str(), "file-manager");
        assert_eq!(FeatureName::SelfHosted.as_str(), "self-hosted");
        assert_eq!(FeatureName::GithubConnector.as_str(), "github-connector");
    }

    #[test]
    fn test_feature_name_serde_matches_database_form() {
        for feature in FeatureName::DEFAULT_CATALOG {
            let json = serde_json::to_string(&feature).unwrap();
            assert_eq!(json, format!("\"{}\"", feature.as_str()));
        }
    }
}
