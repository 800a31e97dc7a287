//! Article CRUD routes.

use crate::error::AppError;
use crate::handlers::article::{create_article, delete_article, get_article, list_articles, update_article};
use crate::state::AppState;
use axum::{
    http::StatusCode,
    middleware::map_response,
    response::{IntoResponse, Response},
    routing::get,
    routing::post,
    Router,
};
use tower_http::limit::RequestBodyLimitLayer;

/// Upper bound on create/update bodies.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// The limit layer and the body extractor both answer 413 in plain text.
async fn json_payload_too_large(response: Response) -> Response {
    if response.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::PayloadTooLarge.into_response();
    }
    response
}

pub fn article_routes(state: AppState) -> Router {
    Router::new()
        .route("/articles", get(list_articles))
        .route("/article", post(create_article))
        .route(
            "/article/:id",
            get(get_article).put(update_article).delete(delete_article),
        )
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(map_response(json_payload_too_large))
        .with_state(state)
}
