use sqlx::{Connection, SqliteConnection};

use crate::error::{is_unique_violation, AppError, Result};
use crate::models::{timestamp, Entry};

pub async fn insert(conn: &mut SqliteConnection, entry: &Entry) -> Result<()> {
    sqlx::query("INSERT INTO entries (id, content, created_at, updated_at) VALUES (?, ?, ?, ?)")
        .bind(&entry.id)
        .bind(&entry.content)
        .bind(&entry.created_at)
        .bind(&entry.updated_at)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(format!("entry '{}'", entry.id))
            } else {
                e.into()
            }
        })?;
    Ok(())
}

pub async fn get(conn: &mut SqliteConnection, id: &str) -> Result<Option<Entry>> {
    let entry = sqlx::query_as("SELECT * FROM entries WHERE id = ?")
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(entry)
}

/// Page through entries, oldest `updated_at` first.
pub async fn list(conn: &mut SqliteConnection, offset: i64, limit: i64) -> Result<Vec<Entry>> {
    let entries = sqlx::query_as(
        "SELECT * FROM entries ORDER BY updated_at ASC, id ASC LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(&mut *conn)
    .await?;
    Ok(entries)
}

/// Replace the content and refresh `updated_at`, returning the new row.
pub async fn update(conn: &mut SqliteConnection, id: &str, content: &str) -> Result<Entry> {
    let entry: Option<Entry> = sqlx::query_as(
        r#"
        UPDATE entries SET content = ?, updated_at = ?
        WHERE id = ?
        RETURNING id, content, created_at, updated_at
        "#,
    )
    .bind(content)
    .bind(timestamp())
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    entry.ok_or_else(|| AppError::NotFound(format!("entry '{id}'")))
}

/// Remove the entry together with every link that references it.
///
/// Returns the number of links that were dropped.
pub async fn delete(conn: &mut SqliteConnection, id: &str) -> Result<u64> {
    let mut tx = conn.begin().await?;

    let unlinked = sqlx::query("DELETE FROM entry_to_tags WHERE entry_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let deleted = sqlx::query("DELETE FROM entries WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if deleted == 0 {
        // Dropping `tx` rolls back.
        return Err(AppError::NotFound(format!("entry '{id}'")));
    }

    tx.commit().await?;
    Ok(unlinked)
}

pub async fn exists(conn: &mut SqliteConnection, id: &str) -> Result<bool> {
    let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM entries WHERE id = ?)")
        .bind(id)
        .fetch_one(&mut *conn)
        .await?;
    Ok(found)
}
