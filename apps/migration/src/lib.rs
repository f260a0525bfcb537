//! Schema for the Blogly tables.
//!
//! The server applies pending migrations at startup; the `migration` binary
//! exposes the same set through the SeaORM migration CLI.

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_table;
mod m20240101_000002_create_tags_table;
mod m20240101_000003_create_posts_table;
mod m20240101_000004_create_posts_tags_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_tags_table::Migration),
            Box::new(m20240101_000003_create_posts_table::Migration),
            Box::new(m20240101_000004_create_posts_tags_table::Migration),
        ]
    }
}
