use sqlx::{sqlite::{SqlitePoolOptions, SqliteConnectOptions}, Row, SqlitePool};
use std::str::FromStr;

use crate::models::UploadRecord;

pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(connect_opts)
        .await?;

    // Upload metadata; file bytes live on disk under the storage root
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS upload_files (
            id INTEGER PRIMARY KEY,
            original_name TEXT NOT NULL,
            size INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ','now'))
        );
        "#,
    )
    .execute(&pool)
    .await?;

    Ok(pool)
}

pub async fn find_upload(pool: &SqlitePool, id: i64) -> Result<Option<UploadRecord>, sqlx::Error> {
    let row = sqlx::query(
        "SELECT id, original_name, size, created_at FROM upload_files WHERE id = ?"
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    // The upload side may have stored text that is not valid UTF-8
    row.map(|r| -> Result<UploadRecord, sqlx::Error> {
        Ok(UploadRecord {
            id: r.try_get::<i64, _>("id")?,
            original_name: r.try_get::<String, _>("original_name")?,
            size: r.try_get::<i64, _>("size")?,
            created_at: r.try_get::<String, _>("created_at")?,
        })
    })
    .transpose()
}

#[cfg(test)]
pub async fn insert_upload(
    pool: &SqlitePool,
    id: i64,
    original_name: &str,
    size: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO upload_files (id, original_name, size) VALUES (?, ?, ?)")
        .bind(id)
        .bind(original_name)
        .bind(size)
        .execute(pool)
        .await?;
    Ok(())
}
