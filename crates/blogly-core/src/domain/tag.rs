use serde::{Deserialize, Serialize};

use super::{Record, required};
use crate::error::DomainError;

/// Tag entity - a unique label attached to any number of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

impl Record for Tag {
    const KIND: &'static str = "Tag";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDraft {
    pub name: String,
}

impl TagDraft {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        Ok(Self {
            name: required("name", name.into())?,
        })
    }
}
