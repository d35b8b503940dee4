//! # Hatchery Shared Library
//!
//! Data layer shared across the Hatchery services: database models for the
//! provisioned account state (users, organizations, roles, memberships,
//! feature flags) plus connection pooling and migrations.
//!
//! ## Module Organization
//!
//! - `models`: Database models and their operations
//! - `db`: Connection pool and migration runner

pub mod db;
pub mod models;

/// Current version of the Hatchery shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
