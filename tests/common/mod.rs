#![allow(dead_code)]

use article_service::{app, AppState};
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tower::ServiceExt;

/// Router over a pool that never connects unless a handler reaches the store.
pub fn offline_app() -> Router {
    let pool = PgPoolOptions::new()
        .acquire_timeout(Duration::from_millis(500))
        .connect_lazy("postgres://postgres@127.0.0.1:1/articles")
        .unwrap();
    app(AppState::new(pool))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, String) {
    let mut req = Request::builder().method(method).uri(uri);
    if body.is_some() {
        req = req.header("content-type", "application/json");
    }
    let req = req
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

pub fn json(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

/// Pool for store-backed tests, or None when DATABASE_URL is not set.
pub async fn test_pool() -> Option<PgPool> {
    let Some(url) = std::env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()) else {
        eprintln!("skipping store-backed test: DATABASE_URL is not set");
        return None;
    };
    let pool = PgPoolOptions::new().max_connections(5).connect(&url).await.unwrap();
    article_service::ensure_articles_table(&pool).await.unwrap();
    Some(pool)
}

pub async fn clear_table(pool: &PgPool) {
    sqlx::query("TRUNCATE articles RESTART IDENTITY").execute(pool).await.unwrap();
}

pub async fn add_articles(pool: &PgPool, count: usize) -> Vec<i64> {
    let mut ids = Vec::with_capacity(count);
    for i in 0..count.max(1) {
        let id: i64 = sqlx::query_scalar("INSERT INTO articles (title, authors) VALUES ($1, $2) RETURNING id")
            .bind(format!("Article {}", i))
            .bind(format!("Authors {}", i))
            .fetch_one(pool)
            .await
            .unwrap();
        ids.push(id);
    }
    ids
}
