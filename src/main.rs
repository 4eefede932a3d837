use std::sync::Arc;

use anyhow::Context;
use coursebook::logging::init_tracing;
use coursebook::metrics::{init_metrics, metrics_app};
use coursebook::router::init_router;
use coursebook::state::AppState;
use coursebook_config::{CorsConfig, DatabaseConfig, SecurityConfig, ServerConfig};
use coursebook_db::{PgStore, init_db_pool, run_migrations};
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let server = ServerConfig::from_env();
    init_tracing(&server.log_dir).context("Failed to create logs directory")?;

    let pool = init_db_pool(&DatabaseConfig::from_env())
        .await
        .context("Failed to connect to database")?;
    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let state = AppState::new(
        Arc::new(PgStore::new(pool)),
        SecurityConfig::from_env(),
        CorsConfig::from_env(),
    )?;

    let mut app = init_router(state);
    if let Some(handle) = init_metrics().context("Failed to install metrics recorder")? {
        app = app.merge(metrics_app(handle));
    }

    let addr = server.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("Swagger UI available at http://{}/swagger-ui", addr);
    info!("Scalar UI available at http://{}/scalar", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
