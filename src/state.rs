//! Shared application state, built once at startup and cloned into every handler.

use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    /// The only shared resource; the pool serializes connection use.
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        AppState { pool }
    }
}
