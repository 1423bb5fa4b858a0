use std::sync::Arc;

use anyhow::{Context, Result};
use contact_list_service::ContactService;
use contact_list_storage::StorageBackend;

pub(crate) mod contacts;
pub(crate) mod serve;

/// Connects to the database and runs migrations.
pub(crate) async fn open_backend(database_url: &str) -> Result<Arc<StorageBackend>> {
    let backend = StorageBackend::connect(database_url)
        .await
        .context("failed to open contact database")?;
    tracing::debug!(backend = backend.kind(), "storage ready");
    Ok(Arc::new(backend))
}

pub(crate) async fn open_service(database_url: &str) -> Result<ContactService> {
    Ok(ContactService::new(open_backend(database_url).await?))
}
