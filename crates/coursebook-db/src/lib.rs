//! # Coursebook DB
//!
//! Persistence for the Coursebook API.
//!
//! Handlers and the gate never reach for a global connection. They receive a
//! [`CatalogStore`] trait object at construction time:
//!
//! - [`PgStore`]: PostgreSQL via SQLx, used by the server and CLI
//! - [`MemoryStore`]: in-process store for tests (`test-utils` feature)
//!
//! # Example
//!
//! ```ignore
//! use coursebook_config::DatabaseConfig;
//! use coursebook_db::{PgStore, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! run_migrations(&pool).await?;
//! let store: Arc<dyn CatalogStore> = Arc::new(PgStore::new(pool));
//! ```

pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod memory;
pub mod postgres;
pub mod store;

pub use error::StoreError;
#[cfg(any(test, feature = "test-utils"))]
pub use memory::MemoryStore;
pub use postgres::PgStore;
pub use store::{CatalogStore, CourseStore, UserStore};

use coursebook_config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;

// Re-export PgPool for convenience
pub use sqlx::PgPool;

/// Opens a connection pool sized from `config`.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
}

/// Applies the bundled SQL migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
