//! ContactStore implementation for PgStorage.

use async_trait::async_trait;
use contact_list_core::{Contact, ContactName, PhoneNumber};

use super::{CONTACT_COLUMNS, PgStorage, row_to_contact};
use crate::error::StorageError;
use crate::pattern::contains_pattern;
use crate::traits::ContactStore;

#[async_trait]
impl ContactStore for PgStorage {
    async fn search_contacts(&self, keyword: &str) -> Result<Vec<Contact>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT {CONTACT_COLUMNS} FROM contact_list
             WHERE name LIKE $1 ESCAPE '\\'
             ORDER BY id"
        ))
        .bind(contains_pattern(keyword))
        .fetch_all(&self.pool)
        .await?;
        tracing::debug!(keyword, matches = rows.len(), "searched contacts");
        rows.iter().map(row_to_contact).collect()
    }

    async fn find_contact(&self, name: &ContactName) -> Result<Option<Contact>, StorageError> {
        let row =
            sqlx::query(&format!("SELECT {CONTACT_COLUMNS} FROM contact_list WHERE name = $1"))
                .bind(name.as_str())
                .fetch_optional(&self.pool)
                .await?;
        row.map(|r| row_to_contact(&r)).transpose()
    }

    async fn insert_contact(
        &self,
        name: &ContactName,
        number: &PhoneNumber,
    ) -> Result<Contact, StorageError> {
        let inserted = sqlx::query(&format!(
            "INSERT INTO contact_list (name, number) VALUES ($1, $2)
             ON CONFLICT (name) DO NOTHING
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(name.as_str())
        .bind(number.as_str())
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = inserted {
            let contact = row_to_contact(&row)?;
            tracing::info!(id = contact.id, name = %name.as_str(), "contact inserted");
            return Ok(contact);
        }

        let existing: Option<String> =
            sqlx::query_scalar("SELECT name FROM contact_list WHERE name = $1")
                .bind(name.as_str())
                .fetch_optional(&self.pool)
                .await?;
        Err(StorageError::AlreadyExists {
            name: existing.unwrap_or_else(|| name.as_str().to_owned()),
        })
    }

    async fn update_contact(
        &self,
        name: &ContactName,
        number: &PhoneNumber,
    ) -> Result<Contact, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE contact_list SET number = $1 WHERE name = $2
             RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(number.as_str())
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => {
                let contact = row_to_contact(&row)?;
                tracing::info!(id = contact.id, name = %name.as_str(), "contact updated");
                Ok(contact)
            },
            None => Err(StorageError::NotFound { name: name.as_str().to_owned() }),
        }
    }

    async fn delete_contact(&self, name: &ContactName) -> Result<Contact, StorageError> {
        let row = sqlx::query(&format!(
            "DELETE FROM contact_list WHERE name = $1 RETURNING {CONTACT_COLUMNS}"
        ))
        .bind(name.as_str())
        .fetch_optional(&self.pool)
        .await?;
        match row {
            Some(row) => {
                let contact = row_to_contact(&row)?;
                tracing::info!(id = contact.id, name = %name.as_str(), "contact deleted");
                Ok(contact)
            },
            None => Err(StorageError::NotFound { name: name.as_str().to_owned() }),
        }
    }

    async fn count_contacts(&self) -> Result<u64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contact_list")
            .fetch_one(&self.pool)
            .await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}
