//! List repository
//!
//! Lists carry no attributes beyond their id. Creating a list together with
//! its first item happens in a single transaction.

use sqlx::{FromRow, SqlitePool};

use crate::models::ItemText;
use super::Item;

/// List record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct List {
    pub id: i64,
}

impl List {
    /// Detail page path for this list.
    pub fn url(&self) -> String {
        format!("/lists/{}/", self.id)
    }

    /// Add-item form target for this list.
    pub fn add_item_url(&self) -> String {
        format!("/lists/{}/add_item", self.id)
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// List repository
pub struct ListRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ListRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Create an empty list.
    pub async fn create(&self) -> Result<List, DbError> {
        let list: List = sqlx::query_as("INSERT INTO lists DEFAULT VALUES RETURNING id")
            .fetch_one(self.pool)
            .await?;

        Ok(list)
    }

    /// Create a list with its first item (atomic).
    ///
    /// Either both rows are written or neither is.
    pub async fn create_with_item(&self, text: ItemText) -> Result<(List, Item), DbError> {
        let mut tx = self.pool.begin().await?;

        let list: List = sqlx::query_as("INSERT INTO lists DEFAULT VALUES RETURNING id")
            .fetch_one(&mut *tx)
            .await?;

        let item: Item = sqlx::query_as(
            r#"
            INSERT INTO items (text, list_id)
            VALUES (?, ?)
            RETURNING id, text, list_id
            "#,
        )
        .bind(text.as_str())
        .bind(list.id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((list, item))
    }

    /// Get a single list by id.
    pub async fn get(&self, id: i64) -> Result<List, DbError> {
        sqlx::query_as::<_, List>("SELECT id FROM lists WHERE id = ?")
            .bind(id)
            .fetch_optional(self.pool)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "list",
                id: id.to_string(),
            })
    }

    /// The earliest created list, if any.
    pub async fn first(&self) -> Result<Option<List>, DbError> {
        let list = sqlx::query_as::<_, List>("SELECT id FROM lists ORDER BY id LIMIT 1")
            .fetch_optional(self.pool)
            .await?;

        Ok(list)
    }

    /// Total number of lists.
    pub async fn count(&self) -> Result<i64, DbError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lists")
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_in_memory_pool, migrations, ItemRepo};

    async fn setup() -> SqlitePool {
        let pool = create_in_memory_pool().await.unwrap();
        migrations::run(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let pool = setup().await;
        let repo = ListRepo::new(&pool);

        let a = repo.create().await.unwrap();
        let b = repo.create().await.unwrap();

        assert!(b.id > a.id);
        assert_eq!(repo.count().await.unwrap(), 2);
        assert_eq!(repo.first().await.unwrap(), Some(a));
    }

    #[tokio::test]
    async fn get_missing_list_is_not_found() {
        let pool = setup().await;

        let err = ListRepo::new(&pool).get(99).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "list", .. }));
    }

    #[tokio::test]
    async fn create_with_item_links_both_rows() {
        let pool = setup().await;
        let text = ItemText::new("A new to do row").unwrap();

        let (list, item) = ListRepo::new(&pool).create_with_item(text).await.unwrap();

        assert_eq!(item.list_id, list.id);
        assert_eq!(item.text, "A new to do row");
        assert_eq!(ItemRepo::new(&pool).count_for_list(list.id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn first_on_empty_store_is_none() {
        let pool = setup().await;
        assert_eq!(ListRepo::new(&pool).first().await.unwrap(), None);
    }

    #[test]
    fn urls() {
        let list = List { id: 7 };
        assert_eq!(list.url(), "/lists/7/");
        assert_eq!(list.add_item_url(), "/lists/7/add_item");
    }
}
