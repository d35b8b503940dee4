/// Error types for signup provisioning
///
/// A duplicate signup is deliberately not represented here: finding (or
/// racing against) an existing user for the same external identity is a
/// normal outcome of the flow, reported via
/// [`crate::provisioner::Outcome::AlreadyProvisioned`].

use thiserror::Error;

/// Provisioning result type alias
pub type ProvisionResult<T> = Result<T, ProvisionError>;

/// Errors that abort a provisioning run
///
/// Every variant rolls back the provisioning transaction; no partial account
/// state survives a failed run.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// The signup event failed validation (empty external identity or a
    /// malformed email)
    #[error("invalid signup event: {0}")]
    InvalidEvent(String),

    /// The named role is missing from the role catalog
    ///
    /// Fatal precondition: the catalog is seeded by migration, independently
    /// of this flow. Provisioning never creates roles implicitly.
    #[error("role \"{0}\" not found; the role catalog must be seeded before signups")]
    RoleNotFound(String),

    /// A datastore operation failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Returns true if the error is a unique constraint violation
///
/// Used to recognize the duplicate-signup race: a second concurrent run for
/// the same external identity loses the `users.external_id` insert and is
/// treated as already provisioned rather than as a failure.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.is_unique_violation(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_not_found_display() {
        let err = ProvisionError::RoleNotFound("admin".to_string());
        assert_eq!(
            err.to_string(),
            "role \"admin\" not found; the role catalog must be seeded before signups"
        );
    }

    #[test]
    fn test_invalid_event_display() {
        let err = ProvisionError::InvalidEvent("email: invalid format".to_string());
        assert!(err.to_string().starts_with("invalid signup event:"));
    }

    #[test]
    fn test_non_database_error_is_not_unique_violation() {
        let err = sqlx::Error::RowNotFound;
        assert!(!is_unique_violation(&err));
    }
}
