//! # Hatchery Signup Provisioning
//!
//! Provisions a new tenant's initial account state after the external
//! identity provider reports a successful signup: a local user record
//! mirroring the external identity, a default organization, an admin
//! membership, and the default feature flag set, created as one atomic,
//! idempotent provisioning run.
//!
//! The identity provider itself (credential verification, sessions, tokens)
//! and the transport that delivers its signup notifications are external
//! collaborators. This crate consumes a [`hook::SignupEvent`] and a
//! PostgreSQL pool, nothing else.
//!
//! ## Module Organization
//!
//! - `hook`: Signup event type and the post-signup observer seam
//! - `provisioner`: The provisioning pipeline
//! - `error`: Provisioning error taxonomy
//! - `config`: Environment-based configuration
//!
//! ## Example
//!
//! ```no_run
//! use hatchery_signup::hook::{ProvisioningHook, SignupEvent, SignupObserver};
//! use hatchery_signup::provisioner::Provisioner;
//! # use sqlx::PgPool;
//!
//! # async fn example(pool: PgPool) {
//! let hook = ProvisioningHook::new(Provisioner::new(pool));
//!
//! // Registered with the auth collaborator and invoked once per signup:
//! hook.on_signup_completed(SignupEvent {
//!     external_id: "ext-123".to_string(),
//!     email: "bob@co.io".to_string(),
//! })
//! .await;
//! # }
//! ```

pub mod config;
pub mod error;
pub mod hook;
pub mod provisioner;
