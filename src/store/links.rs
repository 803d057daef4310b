use sqlx::SqliteConnection;

use crate::error::{is_foreign_key_violation, is_unique_violation, AppError, Result};
use crate::models::EntryTag;

fn describe(entry_id: &str, tag_name: &str) -> String {
    format!("link between entry '{entry_id}' and tag '{tag_name}'")
}

pub async fn link(conn: &mut SqliteConnection, entry_id: &str, tag_name: &str) -> Result<EntryTag> {
    let link = EntryTag::new(entry_id.to_string(), tag_name.to_string());

    sqlx::query("INSERT INTO entry_to_tags (entry_id, tag_name, created_at) VALUES (?, ?, ?)")
        .bind(&link.entry_id)
        .bind(&link.tag_name)
        .bind(&link.created_at)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(describe(entry_id, tag_name))
            } else if is_foreign_key_violation(&e) {
                AppError::BadReference(format!("entry '{entry_id}' or tag '{tag_name}'"))
            } else {
                e.into()
            }
        })?;

    Ok(link)
}

pub async fn unlink(conn: &mut SqliteConnection, entry_id: &str, tag_name: &str) -> Result<()> {
    let removed = sqlx::query("DELETE FROM entry_to_tags WHERE entry_id = ? AND tag_name = ?")
        .bind(entry_id)
        .bind(tag_name)
        .execute(&mut *conn)
        .await?
        .rows_affected();

    if removed == 0 {
        return Err(AppError::NotFound(describe(entry_id, tag_name)));
    }
    Ok(())
}

pub async fn tags_for_entry(conn: &mut SqliteConnection, entry_id: &str) -> Result<Vec<String>> {
    let names = sqlx::query_scalar(
        "SELECT tag_name FROM entry_to_tags WHERE entry_id = ? ORDER BY tag_name",
    )
    .bind(entry_id)
    .fetch_all(&mut *conn)
    .await?;
    Ok(names)
}

pub async fn entries_for_tag(conn: &mut SqliteConnection, tag_name: &str) -> Result<Vec<String>> {
    let ids = sqlx::query_scalar(
        "SELECT entry_id FROM entry_to_tags WHERE tag_name = ? ORDER BY created_at, entry_id",
    )
    .bind(tag_name)
    .fetch_all(&mut *conn)
    .await?;
    Ok(ids)
}
