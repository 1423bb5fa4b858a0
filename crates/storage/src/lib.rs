//! Storage layer for contact-list
//!
//! Owns the `contact_list` table. SQLite (rusqlite + r2d2) and PostgreSQL
//! (sqlx) backends implement [`ContactStore`]; [`StorageBackend`] picks one
//! at runtime.

mod backend;
pub mod error;
mod migrations;
mod pattern;
mod pg_migrations;
mod pg_storage;
mod sqlite_async;
mod storage;
#[cfg(test)]
mod tests;
pub mod traits;

pub use backend::{DatabaseTarget, StorageBackend};
pub use error::StorageError;
pub use pg_storage::PgStorage;
pub use storage::SqliteStorage;
pub use traits::ContactStore;
