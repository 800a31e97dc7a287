//! Article service: a small REST API over one PostgreSQL table.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod pagination;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{ServiceConfig, StoreConfig};
pub use error::{AppError, ConfigError};
pub use model::{Article, ArticleId, ArticlePayload};
pub use pagination::PageWindow;
pub use routes::{app, article_routes, docs_routes};
pub use state::AppState;
pub use store::{connect, ensure_articles_table, ArticleStore};
