//! Database connection management and SeaORM-backed repositories.

mod base;
mod connections;
mod errors;
mod links;
mod repo;

pub mod entity;

pub use base::SqlRepository;
pub use connections::{DatabaseConfig, connect};
pub use repo::{SqlPostRepository, SqlTagRepository, SqlUserRepository};

#[cfg(test)]
mod tests;
