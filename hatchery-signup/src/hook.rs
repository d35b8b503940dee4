/// Post-signup hook: the seam between the external auth collaborator and
/// the provisioning pipeline
///
/// The auth collaborator owns the signup protocol and its response. After it
/// determines a signup succeeded, it invokes the registered
/// [`SignupObserver`] exactly once with the external identity and verified
/// email. The observer's single responsibility is provisioning; it has no
/// way to alter the signup response, so provisioning failures are logged for
/// operators and swallowed.
///
/// # Example
///
/// ```no_run
/// use hatchery_signup::hook::{ProvisioningHook, SignupEvent, SignupObserver};
/// use hatchery_signup::provisioner::Provisioner;
/// # use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) {
/// let hook = ProvisioningHook::new(Provisioner::new(pool));
///
/// hook.on_signup_completed(SignupEvent {
///     external_id: "ext-123".to_string(),
///     email: "bob@co.io".to_string(),
/// })
/// .await;
/// # }
/// ```

use crate::provisioner::{Outcome, Provisioner};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use validator::Validate;

/// Signup-completed notification from the external auth collaborator
///
/// Delivered after the collaborator's own success determination; the email
/// is already verified on the provider side.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupEvent {
    /// Identity reference at the external auth provider
    #[serde(rename = "external_identity_id")]
    #[validate(length(min = 1, message = "external identity id must not be empty"))]
    pub external_id: String,

    /// Verified email address
    #[validate(email(message = "invalid email format"))]
    pub email: String,
}

/// Observer invoked once per successful external signup
///
/// Implementations must not block or fail the signup response: the auth
/// collaborator has already answered the end user by the time this runs.
#[async_trait]
pub trait SignupObserver: Send + Sync {
    /// Handles a signup-completed notification
    async fn on_signup_completed(&self, event: SignupEvent);
}

/// The provisioning observer registered with the auth collaborator
///
/// Wraps a [`Provisioner`] and reports its result through logs only:
/// success and duplicate short-circuits at info level, failures at error
/// level with enough context (email, external identity) for manual
/// reconciliation.
pub struct ProvisioningHook {
    provisioner: Provisioner,
}

impl ProvisioningHook {
    /// Creates a new provisioning hook
    pub fn new(provisioner: Provisioner) -> Self {
        Self { provisioner }
    }
}

#[async_trait]
impl SignupObserver for ProvisioningHook {
    async fn on_signup_completed(&self, event: SignupEvent) {
        let external_id = event.external_id.clone();
        let email = event.email.clone();

        match self.provisioner.provision(event).await {
            Ok(Outcome::Provisioned { user, organization }) => {
                info!(
                    %user.id,
                    %organization.id,
                    organization_name = %organization.name,
                    email = %email,
                    external_id = %external_id,
                    "Provisioned account state for new signup"
                );
            }
            Ok(Outcome::AlreadyProvisioned { user }) => {
                info!(
                    %user.id,
                    external_id = %external_id,
                    "Signup already provisioned, nothing to do"
                );
            }
            Err(err) => {
                // Operator-visible only; the signup response is unaffected.
                error!(
                    email = %email,
                    external_id = %external_id,
                    error = %err,
                    "Post-signup provisioning failed"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_deserializes_from_collaborator_payload() {
        let event: SignupEvent = serde_json::from_str(
            r#"{ "external_identity_id": "ext-123", "email": "bob@co.io" }"#,
        )
        .unwrap();

        assert_eq!(event.external_id, "ext-123");
        assert_eq!(event.email, "bob@co.io");
    }

    #[test]
    fn test_event_validation_rejects_empty_external_id() {
        let event = SignupEvent {
            external_id: String::new(),
            email: "bob@co.io".to_string(),
        };
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_event_validation_rejects_bad_email() {
        let event = SignupEvent {
            external_id: "ext-123".to_string(),
            email: "not-an-email".to_string(),
        };
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_event_validation_accepts_well_formed_event() {
        let event = SignupEvent {
            external_id: "ext-123".to_string(),
            email: "bob@co.io".to_string(),
        };
        assert!(event.validate().is_ok());
    }
}
