//! Async trait implementation for `SqliteStorage` via `spawn_blocking`.

use async_trait::async_trait;
use contact_list_core::{Contact, ContactName, PhoneNumber};

use crate::SqliteStorage;
use crate::error::StorageError;
use crate::traits::ContactStore;

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@ref arg`: `.clone()` a `&T`, pass as `&arg`
/// - `@str arg`: `.to_owned()` a `&str`, pass as `&arg`
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture ref $arg:ident) => { let $arg = $arg.clone(); };
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@pass ref $arg:ident) => { &$arg };
    (@pass str $arg:ident) => { &$arg };
}

#[async_trait]
impl ContactStore for SqliteStorage {
    async fn search_contacts(&self, keyword: &str) -> Result<Vec<Contact>, StorageError> {
        delegate!(self, search_contacts, @str keyword)
    }
    async fn find_contact(&self, name: &ContactName) -> Result<Option<Contact>, StorageError> {
        delegate!(self, find_contact, @ref name)
    }
    async fn insert_contact(
        &self,
        name: &ContactName,
        number: &PhoneNumber,
    ) -> Result<Contact, StorageError> {
        delegate!(self, insert_contact, @ref name, @ref number)
    }
    async fn update_contact(
        &self,
        name: &ContactName,
        number: &PhoneNumber,
    ) -> Result<Contact, StorageError> {
        delegate!(self, update_contact, @ref name, @ref number)
    }
    async fn delete_contact(&self, name: &ContactName) -> Result<Contact, StorageError> {
        delegate!(self, delete_contact, @ref name)
    }
    async fn count_contacts(&self) -> Result<u64, StorageError> {
        delegate!(self, count_contacts)
    }
}
