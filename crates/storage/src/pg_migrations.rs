//! PostgreSQL schema migrations for contact-list storage.

use sqlx::PgPool;

/// Create the `contact_list` table and its unique name index if absent.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS contact_list (
            id BIGSERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            number VARCHAR(100) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Enforces the one-row-per-name rule that inserts rely on (ON CONFLICT (name)).
    sqlx::query(
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_contact_list_name ON contact_list (name)",
    )
    .execute(pool)
    .await?;

    tracing::info!("PostgreSQL schema up to date");
    Ok(())
}
