//! Storage backend trait abstraction
//!
//! Every write is a single conditional statement; uniqueness of `name` is
//! enforced by a unique index, so there is no check-then-write window.

use async_trait::async_trait;
use contact_list_core::{Contact, ContactName, PhoneNumber};

use crate::error::StorageError;

/// Access to the `contact_list` table.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Contacts whose stored name contains `keyword` (trimmed, lower-cased,
    /// matched literally). An empty keyword matches every contact. Ordered by id.
    async fn search_contacts(&self, keyword: &str) -> Result<Vec<Contact>, StorageError>;

    /// Exact lookup by normalized name.
    async fn find_contact(&self, name: &ContactName) -> Result<Option<Contact>, StorageError>;

    /// Insert a new contact. Fails with `AlreadyExists` if the name is taken.
    async fn insert_contact(
        &self,
        name: &ContactName,
        number: &PhoneNumber,
    ) -> Result<Contact, StorageError>;

    /// Replace the number of an existing contact. Fails with `NotFound`.
    async fn update_contact(
        &self,
        name: &ContactName,
        number: &PhoneNumber,
    ) -> Result<Contact, StorageError>;

    /// Remove a contact, returning the deleted row. Fails with `NotFound`.
    async fn delete_contact(&self, name: &ContactName) -> Result<Contact, StorageError>;

    /// Number of stored contacts.
    async fn count_contacts(&self) -> Result<u64, StorageError>;
}
