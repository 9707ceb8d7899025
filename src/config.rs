use std::time::Duration;

use serde::Deserialize;

/// Session-token settings: the shared signing secret and the fixed validity
/// window. The default secret is deliberately weak and is leaked verbatim by
/// the system-info endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenConfig {
    pub secret: String,
    pub ttl_hours: i64,
}

/// System metadata handed out by the system-info endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemLabels {
    pub server: String,
    pub database: String,
    pub last_backup: String,
    pub admin_users: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub token: TokenConfig,
    pub system: SystemLabels,
    pub debug_mode: bool,
    pub latency_ms: u64,
}

impl AppConfig {
    /// Read configuration from the environment. Every value has a training
    /// default, so the app runs with no setup at all.
    pub fn from_env() -> Self {
        let token = TokenConfig {
            secret: std::env::var("TOKEN_SECRET")
                .unwrap_or_else(|_| "vulnerable-secret-key".into()),
            ttl_hours: std::env::var("TOKEN_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(24),
        };
        let system = SystemLabels {
            server: std::env::var("SERVER_INFO").unwrap_or_else(|_| "Ubuntu 20.04".into()),
            database: std::env::var("DATABASE_INFO")
                .unwrap_or_else(|_| "in-memory user store".into()),
            last_backup: std::env::var("LAST_BACKUP").unwrap_or_else(|_| "2024-01-15".into()),
            admin_users: std::env::var("ADMIN_USERS")
                .unwrap_or_else(|_| "admin".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
        };
        Self {
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            port: std::env::var("APP_PORT")
                .ok()
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(8080),
            token,
            system,
            debug_mode: std::env::var("DEBUG_MODE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(true),
            latency_ms: std::env::var("SIMULATED_LATENCY_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(300),
        }
    }

    /// Simulated remote-call latency applied before every operation.
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
