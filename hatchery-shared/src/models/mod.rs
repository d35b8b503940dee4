/// Database models for Hatchery
///
/// This module contains the models that make up a provisioned account and
/// their database operations. All write operations accept any
/// `sqlx::PgExecutor`, so they run against the pool directly or inside a
/// transaction — the signup flow uses the latter to keep a provisioning run
/// all-or-nothing.
///
/// # Models
///
/// - `user`: Local user accounts mirrored from the external identity provider
/// - `organization`: Workspace/tenant containers
/// - `role`: Named permission bundles (pre-seeded catalog)
/// - `membership`: User↔organization links carrying a role
/// - `feature_flag`: Per-organization feature toggles

pub mod feature_flag;
pub mod membership;
pub mod organization;
pub mod role;
pub mod user;
