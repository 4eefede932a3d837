//! # Coursebook Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`database`]: PostgreSQL connection settings
//! - [`security`]: Credential hashing settings
//! - [`server`]: Listen address and log directory
//!
//! `.env` files are loaded by the binaries with `dotenvy` before any of these
//! constructors run.
//!
//! # Example
//!
//! ```ignore
//! use coursebook_config::{CorsConfig, DatabaseConfig, SecurityConfig, ServerConfig};
//!
//! let database = DatabaseConfig::from_env();
//! let server = ServerConfig::from_env();
//! println!("listening on {}", server.addr());
//! ```

pub mod cors;
pub mod database;
pub mod security;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use security::SecurityConfig;
pub use server::ServerConfig;

/// Parses `raw` or falls back to `default` when absent or malformed.
pub(crate) fn parse_or<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}
