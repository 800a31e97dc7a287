//! Article CRUD handlers: list, create, read, update, delete.

use crate::error::AppError;
use crate::model::{Article, ArticleId, ArticlePayload};
use crate::pagination::PageWindow;
use crate::response::{json_created, json_ok, success_result, ErrorBody, ResultBody};
use crate::state::AppState;
use crate::store::ArticleStore;
use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

const INVALID_ID: &str = "Invalid article ID";
const INVALID_PAYLOAD: &str = "Invalid request payload";

fn id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]+$").expect("static pattern"))
}

/// Digits only, and must fit a BIGINT.
pub fn parse_article_id(raw: &str) -> Result<ArticleId, AppError> {
    if !id_pattern().is_match(raw) {
        return Err(AppError::BadRequest(INVALID_ID.into()));
    }
    raw.parse::<ArticleId>()
        .map_err(|_| AppError::BadRequest(INVALID_ID.into()))
}

pub fn decode_payload(body: &[u8]) -> Result<ArticlePayload, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "undecodable article body");
        AppError::BadRequest(INVALID_PAYLOAD.into())
    })
}

#[utoipa::path(
    get,
    path = "/articles",
    params(
        ("count" = Option<i64>, Query, description = "Page size, 1 to 10; anything else means 10"),
        ("start" = Option<i64>, Query, description = "Rows to skip; negative means 0")
    ),
    responses(
        (status = 200, description = "One page of articles", body = Vec<Article>),
        (status = 500, description = "Store error", body = ErrorBody)
    ),
    tag = "articles"
)]
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let window = PageWindow::from_query(&params);
    let rows = ArticleStore::list_page(&state.pool, window).await?;
    Ok(json_ok(rows))
}

#[utoipa::path(
    post,
    path = "/article",
    request_body = ArticlePayload,
    responses(
        (status = 201, description = "Article created", body = Article),
        (status = 400, description = "Invalid request payload", body = ErrorBody),
        (status = 500, description = "Insert failed", body = ErrorBody)
    ),
    tag = "articles"
)]
pub async fn create_article(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload = decode_payload(&body)?;
    let id = ArticleStore::create(&state.pool, &payload.title, &payload.authors).await?;
    tracing::info!(id, "article created");
    Ok(json_created(payload.into_article(id)))
}

#[utoipa::path(
    get,
    path = "/article/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article", body = Article),
        (status = 400, description = "Invalid article ID", body = ErrorBody),
        (status = 404, description = "Article not found", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody)
    ),
    tag = "articles"
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_article_id(&id_str)?;
    let article = ArticleStore::fetch_by_id(&state.pool, id).await?;
    Ok(json_ok(article))
}

/// Overwrites title and authors. The path id wins over any id in the body,
/// and a missing row is not reported.
#[utoipa::path(
    put,
    path = "/article/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = ArticlePayload,
    responses(
        (status = 200, description = "The article as written", body = Article),
        (status = 400, description = "Invalid article ID or payload", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody)
    ),
    tag = "articles"
)]
pub async fn update_article(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_article_id(&id_str)?;
    let article = decode_payload(&body)?.into_article(id);
    ArticleStore::update(&state.pool, &article).await?;
    Ok(json_ok(article))
}

#[utoipa::path(
    delete,
    path = "/article/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Deleted, or nothing to delete", body = ResultBody),
        (status = 400, description = "Invalid article ID", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody)
    ),
    tag = "articles"
)]
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_article_id(&id_str)?;
    ArticleStore::delete(&state.pool, id).await?;
    Ok(json_ok(success_result()))
}
