//! Taskboard Storage Layer
//!
//! SQLite-backed local store for the client. Holds the small amount of
//! durable state the dashboard keeps between launches (the signed-in
//! credential set). All multi-key writes are transactional.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
