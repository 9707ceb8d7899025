use std::sync::Arc;
use std::time::Duration;

use crate::auth::token::TokenCodec;
use crate::config::{AppConfig, SystemLabels, TokenConfig};
use crate::users::store::UserStore;

/// Everything the access operations get injected with: the record store, the
/// token codec, and the process configuration. Cloning shares all three.
#[derive(Clone)]
pub struct AppState {
    pub store: UserStore,
    pub codec: TokenCodec,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// State for a running server: env configuration and the seeded store.
    pub fn init() -> Self {
        Self::from_config(Arc::new(AppConfig::from_env()))
    }

    pub fn from_config(config: Arc<AppConfig>) -> Self {
        Self {
            store: UserStore::seeded(),
            codec: TokenCodec::new(&config.token),
            config,
        }
    }

    /// Test state: fixed secret, zero simulated latency.
    pub fn fake() -> Self {
        Self::from_config(Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: 0,
            token: TokenConfig {
                secret: "vulnerable-secret-key".into(),
                ttl_hours: 24,
            },
            system: SystemLabels {
                server: "Ubuntu 20.04".into(),
                database: "in-memory user store".into(),
                last_backup: "2024-01-15".into(),
                admin_users: vec!["admin".into()],
            },
            debug_mode: true,
            latency_ms: 0,
        }))
    }

    /// Mimic remote-call latency so the UI exercises feel like real calls.
    pub async fn simulate_latency(&self) {
        let delay = self.config.latency();
        if delay > Duration::ZERO {
            tokio::time::sleep(delay).await;
        }
    }
}
