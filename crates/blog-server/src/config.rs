//! Server configuration

use serde::{Deserialize, Serialize};

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,

    /// Emit logs as JSON lines instead of human-readable text
    pub json_logs: bool,

    /// Start with the two sample posts instead of an empty collection
    pub seed_posts: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5002,
            log_level: "info".to_string(),
            json_logs: false,
            seed_posts: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(config::Environment::with_prefix("BLOG"))
            .build();

        match config_result {
            Ok(cfg) => Self::from_config(cfg),
            Err(e) => {
                tracing::info!("Could not read configuration ({}), using defaults", e);
                Ok(Self::default())
            }
        }
    }

    /// Deserialize from an already-built config, filling gaps with defaults
    pub fn from_config(cfg: config::Config) -> anyhow::Result<Self> {
        cfg.try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))
    }

    /// `host:port` to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default tracing filter directives for this server
    pub fn default_log_filter(&self) -> String {
        format!(
            "blog_server={level},blog_store={level},tower_http=debug",
            level = self.log_level
        )
    }
}
