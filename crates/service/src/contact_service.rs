use std::sync::Arc;

use contact_list_core::{Contact, ContactName, Outcome, parse_name, parse_new_name, parse_number};
use contact_list_storage::traits::ContactStore;
use contact_list_storage::{StorageBackend, StorageError};

use crate::ServiceError;

/// Validates raw form text, then runs the matching store operation.
///
/// Validation always completes before the store is called. `AlreadyExists`
/// and `NotFound` from the store come back as [`Outcome`] values.
pub struct ContactService {
    storage: Arc<StorageBackend>,
}

impl ContactService {
    #[must_use]
    pub const fn new(storage: Arc<StorageBackend>) -> Self {
        Self { storage }
    }

    pub async fn search(&self, keyword: &str) -> Result<Vec<Contact>, ServiceError> {
        Ok(self.storage.search_contacts(keyword).await?)
    }

    pub async fn add(&self, raw_name: &str, raw_number: &str) -> Result<Outcome, ServiceError> {
        let name = parse_new_name(raw_name)?;
        let number = parse_number(raw_number)?;
        match self.storage.insert_contact(&name, &number).await {
            Ok(contact) => Ok(Outcome::Added(contact.name)),
            Err(StorageError::AlreadyExists { name: existing }) => {
                tracing::info!(name = %existing, "add rejected, contact already exists");
                Ok(Outcome::AlreadyExists(ContactName::from_stored(existing)))
            },
            Err(e) => Err(e.into()),
        }
    }

    pub async fn update(&self, raw_name: &str, raw_number: &str) -> Result<Outcome, ServiceError> {
        let name = parse_name(raw_name)?;
        let number = parse_number(raw_number)?;
        match self.storage.update_contact(&name, &number).await {
            Ok(contact) => Ok(Outcome::Updated(contact.name)),
            Err(StorageError::NotFound { .. }) => {
                tracing::info!(name = %name.as_str(), "update rejected, no such contact");
                Ok(Outcome::UpdateTargetMissing(name))
            },
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete(&self, raw_name: &str) -> Result<Outcome, ServiceError> {
        let name = parse_name(raw_name)?;
        match self.storage.delete_contact(&name).await {
            Ok(contact) => Ok(Outcome::Deleted(contact.name)),
            Err(StorageError::NotFound { .. }) => {
                tracing::info!(name = %name.as_str(), "delete rejected, no such contact");
                Ok(Outcome::DeleteTargetMissing(name))
            },
            Err(e) => Err(e.into()),
        }
    }

    /// Exact lookup by name, normalized the same way as add/update/delete.
    pub async fn find(&self, raw_name: &str) -> Result<Option<Contact>, ServiceError> {
        let name = parse_name(raw_name)?;
        Ok(self.storage.find_contact(&name).await?)
    }

    pub async fn count(&self) -> Result<u64, ServiceError> {
        Ok(self.storage.count_contacts().await?)
    }
}
