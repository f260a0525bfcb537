//! # Blogly Infrastructure
//!
//! Concrete implementations of the ports defined in `blogly-core`,
//! backed by SeaORM.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL driver
//! - `sqlite` - SQLite driver, for local runs and tests

pub mod database;

pub use sea_orm::DbConn;

pub use database::{
    DatabaseConfig, SqlPostRepository, SqlRepository, SqlTagRepository, SqlUserRepository,
    connect,
};
