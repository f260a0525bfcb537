//! Domain-level error types.

use thiserror::Error;

/// Domain errors - rejected input before anything reaches storage.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Required field missing: {0}")]
    MissingField(&'static str),

    #[error("Field {field} exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("{entity_type} with id {id} not found")]
    NotFound { entity_type: &'static str, id: i32 },

    #[error("Constraint violation: {0}")]
    Constraint(String),

    #[error("Referential integrity violation: {0}")]
    ReferentialIntegrity(String),
}
