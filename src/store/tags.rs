use sqlx::{Connection, SqliteConnection};

use crate::error::{is_unique_violation, AppError, Result};
use crate::models::{timestamp, Tag};

pub async fn insert(conn: &mut SqliteConnection, tag: &Tag) -> Result<()> {
    sqlx::query("INSERT INTO tags (name, created_at, updated_at) VALUES (?, ?, ?)")
        .bind(&tag.name)
        .bind(&tag.created_at)
        .bind(&tag.updated_at)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(format!("tag '{}'", tag.name))
            } else {
                e.into()
            }
        })?;
    Ok(())
}

pub async fn get(conn: &mut SqliteConnection, name: &str) -> Result<Option<Tag>> {
    let tag = sqlx::query_as("SELECT * FROM tags WHERE name = ?")
        .bind(name)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(tag)
}

pub async fn list(conn: &mut SqliteConnection, offset: i64, limit: i64) -> Result<Vec<Tag>> {
    let tags = sqlx::query_as(
        "SELECT * FROM tags ORDER BY updated_at ASC, name ASC LIMIT ? OFFSET ?",
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(&mut *conn)
    .await?;
    Ok(tags)
}

/// Move a tag to a new primary key, carrying its links along.
///
/// The new row is written first so that an existing `new_name` fails the
/// whole rename with `Conflict` before anything else changes.
pub async fn rename(conn: &mut SqliteConnection, name: &str, new_name: &str) -> Result<Tag> {
    let mut tx = conn.begin().await?;

    let copied = sqlx::query(
        r#"
        INSERT INTO tags (name, created_at, updated_at)
        SELECT ?, created_at, ? FROM tags WHERE name = ?
        "#,
    )
    .bind(new_name)
    .bind(timestamp())
    .bind(name)
    .execute(&mut *tx)
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::Conflict(format!("tag '{new_name}'"))
        } else {
            e.into()
        }
    })?
    .rows_affected();

    if copied == 0 {
        return Err(AppError::NotFound(format!("tag '{name}'")));
    }

    sqlx::query("UPDATE entry_to_tags SET tag_name = ? WHERE tag_name = ?")
        .bind(new_name)
        .bind(name)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM tags WHERE name = ?")
        .bind(name)
        .execute(&mut *tx)
        .await?;

    let tag: Tag = sqlx::query_as("SELECT * FROM tags WHERE name = ?")
        .bind(new_name)
        .fetch_one(&mut *tx)
        .await?;

    tx.commit().await?;
    Ok(tag)
}

/// Remove the tag and detach it from every entry. Returns the number of
/// links dropped.
pub async fn delete(conn: &mut SqliteConnection, name: &str) -> Result<u64> {
    let mut tx = conn.begin().await?;

    let unlinked = sqlx::query("DELETE FROM entry_to_tags WHERE tag_name = ?")
        .bind(name)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let deleted = sqlx::query("DELETE FROM tags WHERE name = ?")
        .bind(name)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if deleted == 0 {
        return Err(AppError::NotFound(format!("tag '{name}'")));
    }

    tx.commit().await?;
    Ok(unlinked)
}

pub async fn exists(conn: &mut SqliteConnection, name: &str) -> Result<bool> {
    let found: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM tags WHERE name = ?)")
        .bind(name)
        .fetch_one(&mut *conn)
        .await?;
    Ok(found)
}
