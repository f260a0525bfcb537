//! Application state - shared across all handlers.

use std::sync::Arc;

use blogly_core::ports::{PostRepository, TagRepository, UserRepository};
use blogly_infra::{DbConn, SqlPostRepository, SqlTagRepository, SqlUserRepository};
use tera::Tera;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub tags: Arc<dyn TagRepository>,
    pub templates: Arc<Tera>,
}

impl AppState {
    /// Wire the SQL repositories onto one connection pool.
    pub fn new(db: DbConn, templates: Tera) -> Self {
        tracing::info!("Application state initialized");

        Self {
            users: Arc::new(SqlUserRepository::new(db.clone())),
            posts: Arc::new(SqlPostRepository::new(db.clone())),
            tags: Arc::new(SqlTagRepository::new(db)),
            templates: Arc::new(templates),
        }
    }
}
