//! # Blogly Core
//!
//! The domain layer of Blogly: users, posts, tags and the repository ports
//! that persist them. This crate has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
