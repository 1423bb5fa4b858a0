//! Contact CRUD for `SqliteStorage`.

use contact_list_core::{Contact, ContactName, PhoneNumber};
use rusqlite::{OptionalExtension as _, params};

use super::{SqliteStorage, get_conn, map_contact};
use crate::error::StorageError;
use crate::pattern::contains_pattern;

impl SqliteStorage {
    pub fn search_contacts(&self, keyword: &str) -> Result<Vec<Contact>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let pattern = contains_pattern(keyword);
        let mut stmt = conn.prepare(
            "SELECT id, name, number FROM contact_list
             WHERE name LIKE ?1 ESCAPE '\\'
             ORDER BY id",
        )?;
        let rows = stmt.query_map(params![pattern], map_contact)?;
        let contacts = rows.collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(keyword, matches = contacts.len(), "searched contacts");
        Ok(contacts)
    }

    pub fn find_contact(&self, name: &ContactName) -> Result<Option<Contact>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let contact = conn
            .query_row(
                "SELECT id, name, number FROM contact_list WHERE name = ?1",
                params![name.as_str()],
                map_contact,
            )
            .optional()?;
        Ok(contact)
    }

    pub fn insert_contact(
        &self,
        name: &ContactName,
        number: &PhoneNumber,
    ) -> Result<Contact, StorageError> {
        let conn = get_conn(&self.pool)?;
        let inserted = conn
            .query_row(
                "INSERT INTO contact_list (name, number) VALUES (?1, ?2)
                 ON CONFLICT (name) DO NOTHING
                 RETURNING id, name, number",
                params![name.as_str(), number.as_str()],
                map_contact,
            )
            .optional()?;

        if let Some(contact) = inserted {
            tracing::info!(id = contact.id, name = %name.as_str(), "contact inserted");
            return Ok(contact);
        }

        let existing: Option<String> = conn
            .query_row(
                "SELECT name FROM contact_list WHERE name = ?1",
                params![name.as_str()],
                |row| row.get(0),
            )
            .optional()?;
        Err(StorageError::AlreadyExists {
            name: existing.unwrap_or_else(|| name.as_str().to_owned()),
        })
    }

    pub fn update_contact(
        &self,
        name: &ContactName,
        number: &PhoneNumber,
    ) -> Result<Contact, StorageError> {
        let conn = get_conn(&self.pool)?;
        let updated = conn
            .query_row(
                "UPDATE contact_list SET number = ?1 WHERE name = ?2
                 RETURNING id, name, number",
                params![number.as_str(), name.as_str()],
                map_contact,
            )
            .optional()?;
        match updated {
            Some(contact) => {
                tracing::info!(id = contact.id, name = %name.as_str(), "contact updated");
                Ok(contact)
            },
            None => Err(StorageError::NotFound { name: name.as_str().to_owned() }),
        }
    }

    pub fn delete_contact(&self, name: &ContactName) -> Result<Contact, StorageError> {
        let conn = get_conn(&self.pool)?;
        let deleted = conn
            .query_row(
                "DELETE FROM contact_list WHERE name = ?1 RETURNING id, name, number",
                params![name.as_str()],
                map_contact,
            )
            .optional()?;
        match deleted {
            Some(contact) => {
                tracing::info!(id = contact.id, name = %name.as_str(), "contact deleted");
                Ok(contact)
            },
            None => Err(StorageError::NotFound { name: name.as_str().to_owned() }),
        }
    }

    pub fn count_contacts(&self) -> Result<u64, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count: i64 =
            conn.query_row("SELECT COUNT(*) FROM contact_list", [], |row| row.get(0))?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}
