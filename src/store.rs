//! Data access for the `articles` table. All SQL text lives here.

use crate::config::StoreConfig;
use crate::error::AppError;
use crate::model::{Article, ArticleId};
use crate::pagination::PageWindow;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

const ARTICLES_DDL: &str = r#"
    CREATE TABLE IF NOT EXISTS articles (
        id BIGSERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        authors VARCHAR(300) NULL
    )
"#;

/// Open the shared pool. Fails on the first connection error; no retry.
pub async fn connect(config: &StoreConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await
}

/// Create the `articles` table if it does not exist yet.
pub async fn ensure_articles_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(ARTICLES_DDL).execute(pool).await?;
    Ok(())
}

pub struct ArticleStore;

impl ArticleStore {
    /// Fetch one article by primary key. No row is `AppError::NotFound`.
    pub async fn fetch_by_id(pool: &PgPool, id: ArticleId) -> Result<Article, AppError> {
        let sql = "SELECT id, title, COALESCE(authors, '') AS authors FROM articles WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query_as::<_, Article>(sql)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Article not found".into()))
    }

    /// Overwrite title and authors. Succeeds even when no row has this id.
    pub async fn update(pool: &PgPool, article: &Article) -> Result<(), AppError> {
        let sql = "UPDATE articles SET title = $1, authors = $2 WHERE id = $3";
        tracing::debug!(sql = %sql, id = article.id, "query");
        let done = sqlx::query(sql)
            .bind(&article.title)
            .bind(&article.authors)
            .bind(article.id)
            .execute(pool)
            .await?;
        tracing::debug!(rows = done.rows_affected(), "update");
        Ok(())
    }

    /// Hard delete. Succeeds even when no row has this id.
    pub async fn delete(pool: &PgPool, id: ArticleId) -> Result<(), AppError> {
        let sql = "DELETE FROM articles WHERE id = $1";
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(sql).bind(id).execute(pool).await?;
        tracing::debug!(rows = done.rows_affected(), "delete");
        Ok(())
    }

    /// Insert and return the store-assigned id.
    pub async fn create(pool: &PgPool, title: &str, authors: &str) -> Result<ArticleId, AppError> {
        let sql = "INSERT INTO articles (title, authors) VALUES ($1, $2) RETURNING id";
        tracing::debug!(sql = %sql, "query");
        sqlx::query_scalar::<_, ArticleId>(sql)
            .bind(title)
            .bind(authors)
            .fetch_one(pool)
            .await
            .map_err(AppError::Creation)
    }

    /// One page of articles in the store's scan order (no ORDER BY).
    pub async fn list_page(pool: &PgPool, window: PageWindow) -> Result<Vec<Article>, AppError> {
        let sql = "SELECT id, title, COALESCE(authors, '') AS authors FROM articles LIMIT $1 OFFSET $2";
        tracing::debug!(sql = %sql, limit = window.limit, offset = window.offset, "query");
        let rows = sqlx::query_as::<_, Article>(sql)
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }
}
