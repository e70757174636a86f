//! Database migrations for list and item tables

use sqlx::SqlitePool;
use tracing::info;

/// Run all migrations. Safe to call on every startup.
pub async fn run(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("running database migrations");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS lists (
            id INTEGER PRIMARY KEY AUTOINCREMENT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            text TEXT NOT NULL,
            list_id INTEGER NOT NULL REFERENCES lists(id) ON DELETE CASCADE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_items_list_id ON items(list_id)")
        .execute(pool)
        .await?;

    info!("database migrations complete");
    Ok(())
}
