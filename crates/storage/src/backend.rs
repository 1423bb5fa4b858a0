//! Unified storage backend with enum dispatch.

use std::path::Path;

use async_trait::async_trait;
use contact_list_core::{Contact, ContactName, PhoneNumber};

use crate::error::StorageError;
use crate::traits::ContactStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            StorageBackend::Sqlite(s) => {
                <crate::SqliteStorage as ContactStore>::$method(s, $($arg),*).await
            },
            StorageBackend::Postgres(s) => {
                <crate::PgStorage as ContactStore>::$method(s, $($arg),*).await
            },
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    Sqlite(crate::SqliteStorage),
    Postgres(crate::PgStorage),
}

impl StorageBackend {
    pub fn new_sqlite(db_path: &Path) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::SqliteStorage::new(db_path)?))
    }

    pub async fn new_postgres(database_url: &str) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::PgStorage::new(database_url).await?))
    }

    /// Pick a backend from a database URL: `postgres://` / `postgresql://`
    /// selects PostgreSQL, anything else is a SQLite file path (an optional
    /// `sqlite:` / `sqlite://` prefix is stripped).
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        match DatabaseTarget::parse(database_url) {
            DatabaseTarget::Postgres(url) => Self::new_postgres(url).await,
            DatabaseTarget::Sqlite(path) => Self::new_sqlite(Path::new(path)),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Sqlite(_) => "sqlite",
            Self::Postgres(_) => "postgres",
        }
    }
}

/// Where a database URL points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseTarget<'a> {
    Postgres(&'a str),
    Sqlite(&'a str),
}

impl<'a> DatabaseTarget<'a> {
    pub fn parse(database_url: &'a str) -> Self {
        let url = database_url.trim();
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            return Self::Postgres(url);
        }
        let path = url
            .strip_prefix("sqlite://")
            .or_else(|| url.strip_prefix("sqlite:"))
            .unwrap_or(url);
        Self::Sqlite(path)
    }
}

// ── ContactStore ─────────────────────────────────────────────────

#[async_trait]
impl ContactStore for StorageBackend {
    async fn search_contacts(&self, keyword: &str) -> Result<Vec<Contact>, StorageError> {
        dispatch!(self, search_contacts(keyword))
    }

    async fn find_contact(&self, name: &ContactName) -> Result<Option<Contact>, StorageError> {
        dispatch!(self, find_contact(name))
    }

    async fn insert_contact(
        &self,
        name: &ContactName,
        number: &PhoneNumber,
    ) -> Result<Contact, StorageError> {
        dispatch!(self, insert_contact(name, number))
    }

    async fn update_contact(
        &self,
        name: &ContactName,
        number: &PhoneNumber,
    ) -> Result<Contact, StorageError> {
        dispatch!(self, update_contact(name, number))
    }

    async fn delete_contact(&self, name: &ContactName) -> Result<Contact, StorageError> {
        dispatch!(self, delete_contact(name))
    }

    async fn count_contacts(&self) -> Result<u64, StorageError> {
        dispatch!(self, count_contacts())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_database_targets() {
        assert_eq!(
            DatabaseTarget::parse("postgres://u:p@localhost/contacts"),
            DatabaseTarget::Postgres("postgres://u:p@localhost/contacts")
        );
        assert_eq!(
            DatabaseTarget::parse("postgresql://localhost/contacts"),
            DatabaseTarget::Postgres("postgresql://localhost/contacts")
        );
        assert_eq!(
            DatabaseTarget::parse("sqlite:///var/lib/contacts.db"),
            DatabaseTarget::Sqlite("/var/lib/contacts.db")
        );
        assert_eq!(
            DatabaseTarget::parse("sqlite:contacts.db"),
            DatabaseTarget::Sqlite("contacts.db")
        );
        assert_eq!(
            DatabaseTarget::parse(" ./contacts.db "),
            DatabaseTarget::Sqlite("./contacts.db")
        );
    }
}
