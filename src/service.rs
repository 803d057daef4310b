//! Request-level operations over the store, one function per route.
//!
//! Each call acquires its own connection from the pool it is handed and
//! releases it on return; no state lives here between calls.

use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::models::{Entry, EntryTag, Page, Tag};
use crate::store::{entries, links, tags};

fn validate_tag_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("tag name must not be empty".to_string()));
    }
    Ok(())
}

pub async fn create_entry(db: &SqlitePool, content: String) -> Result<Entry> {
    let entry = Entry::new(content);
    let mut conn = db.acquire().await?;
    entries::insert(&mut conn, &entry).await?;
    tracing::info!(entry_id = %entry.id, "created entry");
    Ok(entry)
}

pub async fn get_entry(db: &SqlitePool, id: &str) -> Result<Entry> {
    let mut conn = db.acquire().await?;
    entries::get(&mut conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("entry '{id}'")))
}

pub async fn list_entries(db: &SqlitePool, page: Page) -> Result<Vec<Entry>> {
    let (offset, limit) = page.bounds();
    let mut conn = db.acquire().await?;
    entries::list(&mut conn, offset, limit).await
}

pub async fn update_entry(db: &SqlitePool, id: &str, content: &str) -> Result<Entry> {
    let mut conn = db.acquire().await?;
    let entry = entries::update(&mut conn, id, content).await?;
    tracing::info!(entry_id = %id, "updated entry");
    Ok(entry)
}

pub async fn delete_entry(db: &SqlitePool, id: &str) -> Result<()> {
    let mut conn = db.acquire().await?;
    let unlinked = entries::delete(&mut conn, id).await?;
    tracing::info!(entry_id = %id, unlinked, "deleted entry");
    Ok(())
}

pub async fn create_tag(db: &SqlitePool, name: String) -> Result<Tag> {
    validate_tag_name(&name)?;
    let tag = Tag::new(name);
    let mut conn = db.acquire().await?;
    tags::insert(&mut conn, &tag).await?;
    tracing::info!(tag = %tag.name, "created tag");
    Ok(tag)
}

pub async fn get_tag(db: &SqlitePool, name: &str) -> Result<Tag> {
    let mut conn = db.acquire().await?;
    tags::get(&mut conn, name)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("tag '{name}'")))
}

pub async fn list_tags(db: &SqlitePool, page: Page) -> Result<Vec<Tag>> {
    let (offset, limit) = page.bounds();
    let mut conn = db.acquire().await?;
    tags::list(&mut conn, offset, limit).await
}

pub async fn rename_tag(db: &SqlitePool, name: &str, new_name: &str) -> Result<Tag> {
    validate_tag_name(new_name)?;
    let mut conn = db.acquire().await?;
    let tag = tags::rename(&mut conn, name, new_name).await?;
    tracing::info!(from = %name, to = %new_name, "renamed tag");
    Ok(tag)
}

pub async fn delete_tag(db: &SqlitePool, name: &str) -> Result<()> {
    let mut conn = db.acquire().await?;
    let unlinked = tags::delete(&mut conn, name).await?;
    tracing::info!(tag = %name, unlinked, "deleted tag");
    Ok(())
}

pub async fn link_tag(db: &SqlitePool, entry_id: &str, tag_name: &str) -> Result<EntryTag> {
    let mut conn = db.acquire().await?;
    if !entries::exists(&mut conn, entry_id).await? {
        return Err(AppError::BadReference(format!("entry '{entry_id}'")));
    }
    if !tags::exists(&mut conn, tag_name).await? {
        return Err(AppError::BadReference(format!("tag '{tag_name}'")));
    }
    // A concurrent delete between the checks and the insert surfaces as a
    // foreign key violation, which the store also reports as BadReference.
    let link = links::link(&mut conn, entry_id, tag_name).await?;
    tracing::info!(entry_id = %entry_id, tag = %tag_name, "linked tag");
    Ok(link)
}

pub async fn unlink_tag(db: &SqlitePool, entry_id: &str, tag_name: &str) -> Result<()> {
    let mut conn = db.acquire().await?;
    if !entries::exists(&mut conn, entry_id).await? {
        return Err(AppError::BadReference(format!("entry '{entry_id}'")));
    }
    if !tags::exists(&mut conn, tag_name).await? {
        return Err(AppError::BadReference(format!("tag '{tag_name}'")));
    }
    links::unlink(&mut conn, entry_id, tag_name).await?;
    tracing::info!(entry_id = %entry_id, tag = %tag_name, "unlinked tag");
    Ok(())
}

pub async fn tags_of_entry(db: &SqlitePool, entry_id: &str) -> Result<Vec<String>> {
    let mut conn = db.acquire().await?;
    if !entries::exists(&mut conn, entry_id).await? {
        return Err(AppError::BadReference(format!("entry '{entry_id}'")));
    }
    links::tags_for_entry(&mut conn, entry_id).await
}

pub async fn entries_of_tag(db: &SqlitePool, tag_name: &str) -> Result<Vec<String>> {
    let mut conn = db.acquire().await?;
    if !tags::exists(&mut conn, tag_name).await? {
        return Err(AppError::BadReference(format!("tag '{tag_name}'")));
    }
    links::entries_for_tag(&mut conn, tag_name).await
}
