//! Article service binary: opens the pool, optionally creates the table, serves on :8090.

use article_service::{app, connect, ensure_articles_table, AppState, ServiceConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("article_service=info")),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    let pool = connect(&config.store).await?;
    if config.ensure_schema {
        ensure_articles_table(&pool).await?;
    }

    let listener = TcpListener::bind(config.listen_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app(AppState::new(pool))).await?;
    Ok(())
}
