//! Shared constants for contact-list.
//!
//! Centralizes limits and pool tuning used across crates.

/// Maximum length of a contact name, matching the `VARCHAR(100)` column.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a phone number, matching the `VARCHAR(100)` column.
pub const MAX_NUMBER_LEN: usize = 100;

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// SQLite connection pool size when `CONTACT_LIST_DB_POOL_SIZE` is unset.
pub const DEFAULT_SQLITE_POOL_SIZE: u32 = 8;

/// Environment variable overriding the SQLite pool size.
pub const SQLITE_POOL_SIZE_ENV: &str = "CONTACT_LIST_DB_POOL_SIZE";

/// Placeholder shown by the presentation layer when a search matches nothing.
pub const NO_RESULT: &str = "No Result";

/// Environment variable holding the name shown in the page footer.
pub const DEVELOPER_NAME_ENV: &str = "CONTACT_LIST_DEVELOPER_NAME";

/// Footer name when `CONTACT_LIST_DEVELOPER_NAME` is unset.
pub const DEFAULT_DEVELOPER_NAME: &str = "Contact List";
