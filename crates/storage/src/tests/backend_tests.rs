use std::sync::Arc;

use super::{name, number};
use crate::{ContactStore, StorageBackend, StorageError};
use tempfile::TempDir;

async fn create_backend() -> (StorageBackend, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let url = format!("sqlite://{}", temp_dir.path().join("backend.db").display());
    let backend = StorageBackend::connect(&url).await.unwrap();
    (backend, temp_dir)
}

#[tokio::test]
async fn test_backend_round_trip() {
    let (backend, _temp_dir) = create_backend().await;
    assert_eq!(backend.kind(), "sqlite");

    backend.insert_contact(&name("John"), &number("5551234")).await.unwrap();
    let found = backend.search_contacts("jo").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].view().name, "John");

    backend.update_contact(&name("john"), &number("42")).await.unwrap();
    let john = backend.find_contact(&name("john")).await.unwrap().unwrap();
    assert_eq!(john.number.as_str(), "42");

    backend.delete_contact(&name("JOHN")).await.unwrap();
    assert!(backend.search_contacts("jo").await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_inserts_keep_one_row() {
    let (backend, _temp_dir) = create_backend().await;
    let backend = Arc::new(backend);

    let mut handles = Vec::new();
    for i in 0..8 {
        let backend = Arc::clone(&backend);
        handles.push(tokio::spawn(async move {
            backend.insert_contact(&name(" Race "), &number(&i.to_string())).await
        }));
    }

    let mut inserted = 0;
    let mut rejected = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => inserted += 1,
            Err(StorageError::AlreadyExists { name }) => {
                assert_eq!(name, "race");
                rejected += 1;
            },
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
    assert_eq!(inserted, 1);
    assert_eq!(rejected, 7);
    assert_eq!(backend.count_contacts().await.unwrap(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_deletes_one_wins() {
    let (backend, _temp_dir) = create_backend().await;
    backend.insert_contact(&name("target"), &number("1")).await.unwrap();
    let backend = Arc::new(backend);

    let a = tokio::spawn({
        let backend = Arc::clone(&backend);
        async move { backend.delete_contact(&name("target")).await }
    });
    let b = tokio::spawn({
        let backend = Arc::clone(&backend);
        async move { backend.delete_contact(&name("target")).await }
    });

    let results = [a.await.unwrap(), b.await.unwrap()];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results.iter().any(|r| matches!(r, Err(StorageError::NotFound { .. }))));
}
