use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Record, required};
use crate::error::DomainError;

/// Post entity - a blog post written by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Record for Post {
    const KIND: &'static str = "Post";
}

/// Validated fields for creating or editing a post, including the full
/// set of tags it should carry afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub tag_ids: Vec<i32>,
}

impl PostDraft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tag_ids: Vec<i32>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            title: required("title", title.into())?,
            content: required("content", content.into())?,
            tag_ids,
        })
    }
}
