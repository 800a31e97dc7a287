//! OpenAPI description of the article API.

use crate::model::{Article, ArticlePayload};
use crate::response::{ErrorBody, ResultBody};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Article API",
        description = "CRUD over a single articles table."
    ),
    paths(
        crate::handlers::article::list_articles,
        crate::handlers::article::create_article,
        crate::handlers::article::get_article,
        crate::handlers::article::update_article,
        crate::handlers::article::delete_article,
    ),
    components(schemas(Article, ArticlePayload, ErrorBody, ResultBody)),
    tags((name = "articles", description = "Article CRUD"))
)]
pub struct ApiDoc;
