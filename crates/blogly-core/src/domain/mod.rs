//! Domain records - the core business objects.

mod post;
mod tag;
mod user;

pub use post::{Post, PostDraft};
pub use tag::{Tag, TagDraft};
pub use user::{DEFAULT_IMAGE_URL, MAX_NAME_LEN, User, UserDraft};

use crate::error::DomainError;

/// A row-backed record addressable by an integer identifier.
pub trait Record {
    /// Human-readable kind, used in not-found errors.
    const KIND: &'static str;
}

/// Rejects blank values for required fields.
fn required(field: &'static str, value: String) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(value)
}

fn bounded(field: &'static str, value: String, max: usize) -> Result<String, DomainError> {
    let value = required(field, value)?;
    if value.chars().count() > max {
        return Err(DomainError::TooLong { field, max });
    }
    Ok(value)
}
