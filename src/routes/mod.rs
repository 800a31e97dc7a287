pub mod article;
pub mod docs;

pub use article::article_routes;
pub use docs::docs_routes;

use crate::state::AppState;
use axum::Router;

/// The full service: article API plus its OpenAPI document.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(article_routes(state))
        .merge(docs_routes())
}
