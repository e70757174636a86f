//! Item repository
//!
//! Items are only ever appended; reads come back in insertion order.

use sqlx::{FromRow, SqlitePool};

use crate::models::ItemText;
use super::DbError;

/// Item record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    pub id: i64,
    pub text: String,
    pub list_id: i64,
}

/// Item repository
pub struct ItemRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ItemRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Append an item to an existing list.
    ///
    /// Returns `NotFound` if the list does not exist. The existence check and
    /// the insert are one statement, so SQLite takes the write lock up front
    /// and concurrent appends queue on the busy timeout instead of failing.
    pub async fn create(&self, list_id: i64, text: ItemText) -> Result<Item, DbError> {
        sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (text, list_id)
            SELECT ?, id FROM lists WHERE id = ?
            RETURNING id, text, list_id
            "#,
        )
        .bind(text.as_str())
        .bind(list_id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "list",
            id: list_id.to_string(),
        })
    }

    /// Items belonging to one list, oldest first.
    pub async fn list_for_list(&self, list_id: i64) -> Result<Vec<Item>, DbError> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, text, list_id
            FROM items
            WHERE list_id = ?
            ORDER BY id
            "#,
        )
        .bind(list_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Every item across all lists, oldest first.
    pub async fn all(&self) -> Result<Vec<Item>, DbError> {
        let items = sqlx::query_as::<_, Item>("SELECT id, text, list_id FROM items ORDER BY id")
            .fetch_all(self.pool)
            .await?;

        Ok(items)
    }

    /// The earliest created item, if any.
    pub async fn first(&self) -> Result<Option<Item>, DbError> {
        let item = sqlx::query_as::<_, Item>("SELECT id, text, list_id FROM items ORDER BY id LIMIT 1")
            .fetch_optional(self.pool)
            .await?;

        Ok(item)
    }

    /// Total number of items.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }

    /// Number of items in one list.
    pub async fn count_for_list(&self, list_id: i64) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM items WHERE list_id = ?")
            .bind(list_id)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
