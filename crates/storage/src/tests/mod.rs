//! Test utilities and module declarations for storage tests.

use crate::SqliteStorage;
use contact_list_core::{ContactName, PhoneNumber};
use tempfile::TempDir;

pub fn create_test_storage() -> (SqliteStorage, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("test.db");
    let storage = SqliteStorage::new(&db_path).unwrap();
    (storage, temp_dir)
}

pub fn name(raw: &str) -> ContactName {
    ContactName::normalize(raw)
}

pub fn number(raw: &str) -> PhoneNumber {
    PhoneNumber::from_stored(raw.to_owned())
}

mod backend_tests;
mod search_tests;

#[test]
fn reopening_database_keeps_rows() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("reopen.db");
    {
        let storage = SqliteStorage::new(&db_path).unwrap();
        storage.insert_contact(&name("john"), &number("5551234")).unwrap();
    }
    let storage = SqliteStorage::new(&db_path).unwrap();
    assert_eq!(storage.count_contacts().unwrap(), 1);
}
