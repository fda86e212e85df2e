use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::engine::EngineOptions;
use crate::error::Result;

/// Origins the Hive web app is served from
const DEFAULT_ORIGINS: [&str; 2] = ["http://localhost:4000", "http://localhost:3000"];

/// Service configuration.
///
/// Built from defaults, then an optional YAML file, then environment
/// overrides (`HOST`, `PORT`, `HIVE_AI_ALLOWED_ORIGINS`).
///
/// ```
/// use hive_ai_engine::config::ServiceConfig;
///
/// let config = ServiceConfig::from_yaml("port: 9000\nallowed_origins: ['*']").unwrap();
/// assert_eq!(config.port, 9000);
/// assert!(config.allows_any_origin());
/// assert_eq!(config.engine.search.limit, Some(20));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,

    /// CORS origins; `*` allows any origin
    pub allowed_origins: Vec<String>,

    pub engine: EngineOptions,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            allowed_origins: DEFAULT_ORIGINS.iter().map(|o| o.to_string()).collect(),
            engine: EngineOptions::default(),
        }
    }
}

impl ServiceConfig {
    /// Parse a YAML document; missing keys keep their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Read a YAML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Load from `HIVE_AI_CONFIG` (if set) and apply environment overrides
    pub fn from_env() -> Result<Self> {
        let config = match std::env::var("HIVE_AI_CONFIG") {
            Ok(path) => {
                tracing::info!("📄 Loading config from {}", path);
                Self::load(&path)?
            }
            Err(_) => Self::default(),
        };

        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply `HOST`, `PORT` and `HIVE_AI_ALLOWED_ORIGINS` from a lookup function
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(host) = lookup("HOST") {
            self.host = host;
        }

        match lookup("PORT").map(|p| p.parse::<u16>()) {
            Some(Ok(port)) => self.port = port,
            Some(Err(e)) => tracing::warn!("⚠️ Ignoring invalid PORT: {}", e),
            None => {}
        }

        if let Some(origins) = lookup("HIVE_AI_ALLOWED_ORIGINS") {
            self.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect();
        }

        self
    }

    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == "*")
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
