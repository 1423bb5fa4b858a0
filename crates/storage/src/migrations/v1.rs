//! Migration v1: contact_list table with a unique name index

pub(super) const SQL: &str = "
CREATE TABLE IF NOT EXISTS contact_list (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    number TEXT NOT NULL
);

CREATE UNIQUE INDEX IF NOT EXISTS idx_contact_list_name ON contact_list(name);
";
