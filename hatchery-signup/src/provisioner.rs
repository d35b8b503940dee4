/// The post-signup provisioning pipeline
///
/// One provisioning run creates the full initial account state for a new
/// external signup inside a single database transaction:
///
/// ```text
/// resolve existing user (stop if found)
///   └─> [transaction start]
///         ├─> create user          (unique external_id backstops duplicates)
///         ├─> create organization  ("<username>'s Team")
///         ├─> resolve "admin" role (fatal if the catalog is not seeded)
///         ├─> create membership    (user ↔ organization ↔ admin)
///         └─> seed feature flags   (full default catalog, all enabled)
///       [commit]
/// ```
///
/// Either every row exists after a run, or none do: the transaction guard
/// rolls back on any error path, early return, or unwind. Invoking the
/// pipeline twice for the same external identity is a no-op beyond the
/// existence check.
///
/// # Example
///
/// ```no_run
/// use hatchery_signup::hook::SignupEvent;
/// use hatchery_signup::provisioner::{Outcome, Provisioner};
/// # use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), hatchery_signup::error::ProvisionError> {
/// let provisioner = Provisioner::new(pool);
///
/// let outcome = provisioner
///     .provision(SignupEvent {
///         external_id: "ext-123".to_string(),
///         email: "bob@co.io".to_string(),
///     })
///     .await?;
///
/// if let Outcome::Provisioned { user, organization } = outcome {
///     println!("{} now owns {}", user.username, organization.name);
/// }
/// # Ok(())
/// # }
/// ```

use crate::error::{is_unique_violation, ProvisionError, ProvisionResult};
use crate::hook::SignupEvent;
use hatchery_shared::models::{
    feature_flag::{CreateFeatureFlag, FeatureFlag, FeatureName},
    membership::{CreateMembership, Membership},
    organization::{CreateOrganization, Organization},
    role::Role,
    user::{CreateUser, User, UserType},
};
use sqlx::PgPool;
use tracing::{debug, warn};
use validator::Validate;

/// Role assigned to the signing-up user in their default organization
pub const ADMIN_ROLE: &str = "admin";

/// Description given to every default organization
const DEFAULT_ORGANIZATION_DESCRIPTION: &str = "My Team";

/// Result of a provisioning run
#[derive(Debug)]
pub enum Outcome {
    /// The full account state was created by this run
    Provisioned {
        /// The newly created user
        user: User,

        /// The user's default organization
        organization: Organization,
    },

    /// A user already existed for this external identity; nothing was written
    AlreadyProvisioned {
        /// The pre-existing user
        user: User,
    },
}

/// The provisioning pipeline
///
/// Holds the database handle explicitly; callers construct one per service
/// and share it, there is no process-wide instance.
#[derive(Clone)]
pub struct Provisioner {
    db: PgPool,
}

impl Provisioner {
    /// Creates a new provisioner over the given pool
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Provisions the initial account state for a successful external signup
    ///
    /// Idempotent per external identity: a repeat invocation short-circuits
    /// with [`Outcome::AlreadyProvisioned`], and a concurrent duplicate that
    /// slips past the existence check is caught by the unique constraint on
    /// `users.external_id` and reported the same way.
    ///
    /// # Errors
    ///
    /// - [`ProvisionError::InvalidEvent`] if the event carries an empty
    ///   external identity or a malformed email
    /// - [`ProvisionError::RoleNotFound`] if the role catalog has no
    ///   "admin" role (it is seeded by migration, never by this flow)
    /// - [`ProvisionError::Database`] for any datastore failure
    ///
    /// All errors leave the store untouched; the transaction covering the
    /// whole run is rolled back.
    pub async fn provision(&self, event: SignupEvent) -> ProvisionResult<Outcome> {
        event
            .validate()
            .map_err(|e| ProvisionError::InvalidEvent(e.to_string()))?;

        // Idempotency check. A lookup failure other than "not found" is
        // logged and treated as "not found": the unique constraint on
        // external_id still prevents a second user from being created.
        match User::find_by_external_id(&self.db, &event.external_id).await {
            Ok(Some(user)) => {
                debug!(
                    external_id = %event.external_id,
                    %user.id,
                    "User already exists for external identity, skipping provisioning"
                );
                return Ok(Outcome::AlreadyProvisioned { user });
            }
            Ok(None) => {}
            Err(err) => {
                warn!(
                    external_id = %event.external_id,
                    error = %err,
                    "Existing-user lookup failed, proceeding with provisioning"
                );
            }
        }

        let username = derive_username(&event.email).to_string();

        // Rolls back on drop unless committed.
        let mut tx = self.db.begin().await?;

        let user = match User::create(
            &mut *tx,
            CreateUser {
                external_id: event.external_id.clone(),
                email: event.email.clone(),
                username: username.clone(),
                account_type: UserType::Admin,
                is_verified: true,
            },
        )
        .await
        {
            Ok(user) => user,
            Err(err) if is_unique_violation(&err) => {
                // Lost a duplicate-signup race; the winner's row is the
                // account state.
                tx.rollback().await?;
                return match User::find_by_external_id(&self.db, &event.external_id).await? {
                    Some(user) => Ok(Outcome::AlreadyProvisioned { user }),
                    None => Err(ProvisionError::Database(err)),
                };
            }
            Err(err) => return Err(err.into()),
        };
        debug!(%user.id, username = %user.username, "Created user");

        let organization = Organization::create(
            &mut *tx,
            CreateOrganization {
                name: default_organization_name(&username),
                description: DEFAULT_ORGANIZATION_DESCRIPTION.to_string(),
            },
        )
        .await?;
        debug!(%organization.id, name = %organization.name, "Created default organization");

        let role = Role::find_by_name(&mut *tx, ADMIN_ROLE)
            .await?
            .ok_or_else(|| ProvisionError::RoleNotFound(ADMIN_ROLE.to_string()))?;

        Membership::create(
            &mut *tx,
            CreateMembership {
                user_id: user.id,
                organization_id: organization.id,
                role_id: role.id,
            },
        )
        .await?;
        debug!(%user.id, %organization.id, role = ADMIN_ROLE, "Created membership");

        for feature in FeatureName::DEFAULT_CATALOG {
            FeatureFlag::create(
                &mut *tx,
                CreateFeatureFlag {
                    organization_id: organization.id,
                    feature_name: feature,
                    is_enabled: true,
                },
            )
            .await?;
        }
        debug!(
            %organization.id,
            count = FeatureName::DEFAULT_CATALOG.len(),
            "Seeded default feature flags"
        );

        tx.commit().await?;

        Ok(Outcome::Provisioned { user, organization })
    }
}

/// Derives a username from an email address (the text before "@")
fn derive_username(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

/// Builds the default organization name for a username
fn default_organization_name(username: &str) -> String {
    format!("{}'s Team", username)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_username() {
        assert_eq!(derive_username("alice@example.com"), "alice");
        assert_eq!(derive_username("bob@co.io"), "bob");
        assert_eq!(derive_username("first.last@sub.domain.org"), "first.last");
    }

    #[test]
    fn test_default_organization_name() {
        assert_eq!(default_organization_name("alice"), "alice's Team");
        assert_eq!(default_organization_name("bob"), "bob's Team");
    }

    #[test]
    fn test_admin_role_name() {
        assert_eq!(ADMIN_ROLE, "admin");
    }

    // End-to-end pipeline tests (idempotence, atomicity, role binding) are
    // in tests/provisioning_tests.rs and need a running database.
}
