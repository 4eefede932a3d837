use std::sync::Arc;

use coursebook_config::{CorsConfig, SecurityConfig};
use coursebook_db::CatalogStore;
use coursebook_gate::Gate;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    pub gate: Arc<Gate>,
    pub security: SecurityConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// Builds the state around `store`. Fails only if the gate cannot hash
    /// its timing-equalization secret at `security.bcrypt_cost`.
    pub fn new(
        store: Arc<dyn CatalogStore>,
        security: SecurityConfig,
        cors_config: CorsConfig,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            store,
            gate: Arc::new(Gate::new(security.bcrypt_cost)?),
            security,
            cors_config,
        })
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("gate", &self.gate)
            .field("security", &self.security)
            .field("cors_config", &self.cors_config)
            .finish_non_exhaustive()
    }
}
