//! Row-level persistence for entries, tags and the links between them.
//!
//! Every function borrows a `SqliteConnection`, so callers decide whether it
//! runs on a plain pooled connection or inside an outer transaction. Operations
//! that touch more than one row open their own (nested) transaction.

pub mod entries;
pub mod links;
pub mod tags;

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use sqlx::SqlitePool;
    use std::str::FromStr;

    pub async fn pool() -> SqlitePool {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .unwrap()
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .expect("Failed to create in-memory SQLite pool");

        crate::db::migrate(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }
}
