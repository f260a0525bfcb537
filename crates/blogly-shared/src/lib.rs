//! # Blogly Shared
//!
//! Request and response types shared by the HTTP layer: form DTOs and
//! problem details for error pages.

pub mod dto;
pub mod response;

pub use dto::{FormError, FormFields};
pub use response::ErrorResponse;
