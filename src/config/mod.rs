//! Configuration loading and management
//!
//! Configuration is read from a YAML file. Every section is optional:
//!
//! ```yaml
//! server:
//!   host: 0.0.0.0
//!   port: 8080
//! logging:
//!   filter: grubdash=debug,tower_http=info
//! seed:
//!   dishes:
//!     - { id: "1", name: Taco, description: Crunchy, price: 5, image_url: taco.png }
//!   orders: []
//! ```

use crate::entities::{Dish, Order};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the YAML configuration file
pub const CONFIG_PATH_ENV: &str = "GRUBDASH_CONFIG";

/// Environment variable overriding `server.port`
pub const PORT_ENV: &str = "PORT";

/// Listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `host:port`, suitable for `TcpListener::bind`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
        }
    }
}

/// Log filter used when `RUST_LOG` is not set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Records loaded into the stores at startup
///
/// Seed records are trusted and are not run through the checks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    pub dishes: Vec<Dish>,
    pub orders: Vec<Order>,
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load from `GRUBDASH_CONFIG` (or defaults) and apply the `PORT` override
    pub fn load() -> Result<Self> {
        let config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_yaml_file(path)?,
            None => Self::default(),
        };

        match std::env::var(PORT_ENV) {
            Ok(port) => config.with_port_override(&port),
            Err(_) => Ok(config),
        }
    }

    /// Replace `server.port` with a value taken from the environment
    pub fn with_port_override(mut self, port: &str) -> Result<Self> {
        self.server.port = port
            .trim()
            .parse()
            .with_context(|| format!("invalid {} value: {}", PORT_ENV, port))?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.addr(), "127.0.0.1:5000");
        assert_eq!(config.logging.filter, "info");
        assert!(config.seed.dishes.is_empty());
        assert!(config.seed.orders.is_empty());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = AppConfig::from_yaml_str("server:\n  port: 8080\n").unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_seed_records() {
        let yaml = r#"
seed:
  dishes:
    - id: "1"
      name: Taco
      description: Crunchy
      price: 5
      image_url: taco.png
  orders:
    - id: "10"
      deliverTo: 1 Main St
      mobileNumber: "555-0100"
      status: pending
      dishes:
        - { id: "1", quantity: 2 }
"#;
        let config = AppConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.seed.dishes.len(), 1);
        assert_eq!(config.seed.dishes[0].price.as_u64(), Some(5));
        assert_eq!(config.seed.orders[0].deliver_to, "1 Main St");
        assert!(config.seed.orders[0].is_pending());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = AppConfig::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(AppConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "logging:\n  filter: debug").unwrap();

        let config = AppConfig::from_yaml_file(file.path()).unwrap();
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = AppConfig::from_yaml_file("/nonexistent/grubdash.yaml").unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }

    #[test]
    fn test_port_override() {
        let config = AppConfig::default().with_port_override("9000").unwrap();
        assert_eq!(config.server.port, 9000);
        assert!(AppConfig::default().with_port_override("http").is_err());
    }
}
