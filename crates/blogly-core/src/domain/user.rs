use serde::{Deserialize, Serialize};

use super::{Record, bounded};
use crate::error::DomainError;

/// Profile picture used when none is supplied.
pub const DEFAULT_IMAGE_URL: &str = "https://tinyurl.com/default-pfp";

/// Storage limit for first and last names.
pub const MAX_NAME_LEN: usize = 30;

/// User entity - an author of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl User {
    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl Record for User {
    const KIND: &'static str = "User";
}

/// Validated fields for creating or editing a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl UserDraft {
    /// Build a draft, falling back to [`DEFAULT_IMAGE_URL`] for a missing or blank image.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        image_url: Option<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            first_name: bounded("first_name", first_name.into(), MAX_NAME_LEN)?,
            last_name: bounded("last_name", last_name.into(), MAX_NAME_LEN)?,
            image_url: image_url
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let user = User {
            id: 1,
            first_name: "John".to_string(),
            last_name: "Smith".to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
        };
        assert_eq!(user.full_name(), "John Smith");
    }

    #[test]
    fn test_draft_defaults_image_url() {
        let draft = UserDraft::new("John", "Smith", None).unwrap();
        assert_eq!(draft.image_url, DEFAULT_IMAGE_URL);

        let draft = UserDraft::new("John", "Smith", Some("  ".to_string())).unwrap();
        assert_eq!(draft.image_url, DEFAULT_IMAGE_URL);
    }

    #[test]
    fn test_draft_rejects_blank_and_long_names() {
        assert_eq!(
            UserDraft::new("", "Smith", None),
            Err(DomainError::MissingField("first_name"))
        );
        assert_eq!(
            UserDraft::new("John", "x".repeat(31), None),
            Err(DomainError::TooLong {
                field: "last_name",
                max: MAX_NAME_LEN
            })
        );
        assert!(UserDraft::new("John", "x".repeat(30), None).is_ok());
    }
}
