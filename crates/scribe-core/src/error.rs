//! Domain-level error types.
//!
//! Callers branch on variants, never on message text.

use thiserror::Error;

/// A single violated field rule.
///
/// Validators stop at the first violation; the `Display` text is safe to
/// show to API clients verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    // Posts
    #[error("title is required")]
    TitleRequired,
    #[error("title must be between 3 and 200 characters")]
    TitleLength,
    #[error("content is required")]
    ContentRequired,
    #[error("content must be at least 10 characters")]
    ContentTooShort,
    #[error("slug is required")]
    SlugRequired,
    #[error("valid author ID is required")]
    AuthorIdRequired,
    #[error("invalid status: {0}")]
    InvalidStatus(String),

    // Authors
    #[error("username is required")]
    UsernameRequired,
    #[error("username must be between 3 and 50 characters")]
    UsernameLength,
    #[error("username can only contain letters, numbers, and underscores")]
    UsernameCharset,
    #[error("email is required")]
    EmailRequired,
    #[error("invalid email format")]
    EmailFormat,
    #[error("password is required")]
    PasswordRequired,
    #[error("password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("first name is required")]
    FirstNameRequired,
    #[error("first name must be between 2 and 50 characters")]
    FirstNameLength,
    #[error("last name is required")]
    LastNameRequired,
    #[error("last name must be between 2 and 50 characters")]
    LastNameLength,
    #[error("bio cannot exceed 500 characters")]
    BioTooLong,
    #[error("invalid avatar URL format")]
    AvatarUrlFormat,
    #[error("username or email is required")]
    LoginIdentifierRequired,
}

/// Outcome of a validator: `Ok(())` or the first violated rule.
pub type ValidationResult = Result<(), ValidationError>;

/// A partial update named no field to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no fields to update")]
pub struct EmptyUpdate;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("no fields to update")]
    NoFieldsToUpdate,

    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: i64 },

    #[error("{0}")]
    Duplicate(String),

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("account is inactive")]
    AccountInactive,

    #[error("Unauthorized access")]
    Unauthorized,

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<EmptyUpdate> for DomainError {
    fn from(_: EmptyUpdate) -> Self {
        DomainError::NoFieldsToUpdate
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    /// A unique constraint rejected the write; carries the offending column.
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl From<RepoError> for DomainError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Constraint(field) => DomainError::Duplicate(format!("{field} already exists")),
            other => DomainError::Internal(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_status_names_the_offending_value() {
        let err = ValidationError::InvalidStatus("deleted".to_string());
        assert_eq!(err.to_string(), "invalid status: deleted");
    }

    #[test]
    fn empty_update_maps_to_its_own_domain_kind() {
        assert!(matches!(
            DomainError::from(EmptyUpdate),
            DomainError::NoFieldsToUpdate
        ));
    }

    #[test]
    fn constraint_violation_becomes_duplicate() {
        let err = DomainError::from(RepoError::Constraint("email".to_string()));
        match err {
            DomainError::Duplicate(msg) => assert_eq!(msg, "email already exists"),
            other => panic!("unexpected {other:?}"),
        }
    }
}
