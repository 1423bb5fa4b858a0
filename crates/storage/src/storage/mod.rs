//! `SQLite` storage implementation.
//!
//! All methods are synchronous; `sqlite_async` bridges them onto the
//! `ContactStore` trait via `spawn_blocking`.

mod contacts;

use std::path::Path;

use contact_list_core::{
    Contact, ContactName, PhoneNumber, DEFAULT_SQLITE_POOL_SIZE, SQLITE_POOL_SIZE_ENV,
    env_parse_with_default,
};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::error::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// `SQLite`-backed contact store wrapping a connection pool.
#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Map a `id, name, number` row to a [`Contact`].
pub(crate) fn map_contact(row: &rusqlite::Row<'_>) -> rusqlite::Result<Contact> {
    Ok(Contact::new(
        row.get(0)?,
        ContactName::from_stored(row.get(1)?),
        PhoneNumber::from_stored(row.get(2)?),
    ))
}

/// Per-connection concurrency settings
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

impl SqliteStorage {
    /// Open (or create) the database at `db_path` and initialize the schema.
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = env_parse_with_default(SQLITE_POOL_SIZE_ENV, DEFAULT_SQLITE_POOL_SIZE);
        let pool = Pool::builder().max_size(pool_size.max(1)).build(manager)?;

        let conn = pool.get()?;
        migrations::run_migrations(&conn)?;
        drop(conn);

        tracing::info!(
            path = %db_path.display(),
            pool_size = pool_size,
            "SQLite storage initialized with connection pool"
        );

        Ok(Self { pool })
    }
}
