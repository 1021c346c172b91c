//! Configuration module for leadrouter
//!
//! Provides layered configuration loading from files, environment variables,
//! and defaults.
//!
//! # Configuration Precedence
//!
//! 1. Environment variables (`LEADROUTER_*`)
//! 2. Configuration file (TOML)
//! 3. Default values
//!
//! The routing method is a single process-wide default: there is no
//! per-jurisdiction override. Callers that want one pass their own
//! [`RoutingConfig`](crate::routing::RoutingConfig) per call instead of
//! using this module.
//!
//! # Example
//!
//! ```rust
//! use leadrouter::config::LeadRouterConfig;
//!
//! let config = LeadRouterConfig::default();
//! assert_eq!(config.app.base_url, "http://localhost:3000");
//!
//! let toml = r#"
//! [routing]
//! method = "weighted"
//! "#;
//! let config: LeadRouterConfig = toml::from_str(toml).unwrap();
//! ```

pub mod error;
pub mod logging;

pub use error::ConfigError;
pub use logging::{LogFormat, LoggingConfig};

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::routing::RoutingConfig;

/// Application-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base URL for agent landing-page redirects
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
        }
    }
}

/// Unified configuration for the lead routing service.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LeadRouterConfig {
    /// Application settings
    pub app: AppConfig,
    /// Lead routing configuration
    pub routing: RoutingConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

impl LeadRouterConfig {
    /// Load configuration from a TOML file.
    ///
    /// If path is None, returns default configuration.
    /// If path doesn't exist, returns NotFound error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Apply environment variable overrides.
    ///
    /// Supports LEADROUTER_* environment variables for common settings.
    /// Invalid values are silently ignored (defaults are kept).
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base_url) = std::env::var("LEADROUTER_BASE_URL") {
            self.app.base_url = base_url;
        }

        if let Ok(method) = std::env::var("LEADROUTER_ROUTING_METHOD") {
            if let Ok(m) = method.parse() {
                self.routing.method = m;
            }
        }

        if let Ok(level) = std::env::var("LEADROUTER_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("LEADROUTER_LOG_FORMAT") {
            if let Ok(f) = format.parse() {
                self.logging.format = f;
            }
        }

        self
    }

    /// Validate configuration.
    ///
    /// Rejects negative or non-finite agent weights. A table whose weights
    /// are all zero passes validation; the engine treats it as uniform at
    /// routing time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app.base_url.is_empty() {
            return Err(ConfigError::Validation {
                field: "app.base_url".to_string(),
                message: "base URL cannot be empty".to_string(),
            });
        }

        for (i, entry) in self.routing.weighted_agents.iter().enumerate() {
            if entry.agent_id.is_empty() {
                return Err(ConfigError::Validation {
                    field: format!("routing.weighted_agents[{}].agent_id", i),
                    message: "agent id cannot be empty".to_string(),
                });
            }
            if !entry.weight.is_finite() || entry.weight < 0.0 {
                return Err(ConfigError::Validation {
                    field: format!("routing.weighted_agents[{}].weight", i),
                    message: format!("weight must be a non-negative number, got {}", entry.weight),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{AgentWeight, RoutingMethod};
    use std::path::Path;

    #[test]
    fn test_config_defaults() {
        let config = LeadRouterConfig::default();
        assert_eq!(config.app.base_url, "http://localhost:3000");
        assert_eq!(config.routing.method, RoutingMethod::RoundRobin);
        assert!(config.routing.weighted_agents.is_empty());
    }

    #[test]
    fn test_config_parse_minimal_toml() {
        let toml = r#"
        [routing]
        method = "priority"
        "#;

        let config: LeadRouterConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.routing.method, RoutingMethod::Priority);
        assert_eq!(config.app.base_url, "http://localhost:3000"); // Default
    }

    #[test]
    fn test_config_parse_weighted_agents() {
        let toml = r#"
        [routing]
        method = "weighted"

        [[routing.weighted_agents]]
        agent_id = "a1"
        weight = 3.0

        [[routing.weighted_agents]]
        agent_id = "a2"
        weight = 1.0
        "#;

        let config: LeadRouterConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.routing.method, RoutingMethod::Weighted);
        assert_eq!(config.routing.weighted_agents.len(), 2);
        assert_eq!(config.routing.weight_for("a1"), 3.0);
    }

    #[test]
    fn test_config_load_from_file() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(temp.path(), "[routing]\nmethod = \"weighted\"").unwrap();

        let config = LeadRouterConfig::load(Some(temp.path())).unwrap();
        assert_eq!(config.routing.method, RoutingMethod::Weighted);
    }

    #[test]
    fn test_config_missing_file_error() {
        let result = LeadRouterConfig::load(Some(Path::new("/nonexistent/config.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_config_load_none_returns_defaults() {
        let config = LeadRouterConfig::load(None).unwrap();
        assert_eq!(config.routing.method, RoutingMethod::RoundRobin);
    }

    #[test]
    fn test_config_env_override_routing_method() {
        // Legacy deployments exported ROUTING_METHOD=ROUND_ROBIN style values
        std::env::set_var("LEADROUTER_ROUTING_METHOD", "WEIGHTED");
        let config = LeadRouterConfig::default().with_env_overrides();
        assert_eq!(config.routing.method, RoutingMethod::Weighted);

        // Invalid values keep the default, not crash
        std::env::set_var("LEADROUTER_ROUTING_METHOD", "not-a-method");
        let config = LeadRouterConfig::default().with_env_overrides();
        std::env::remove_var("LEADROUTER_ROUTING_METHOD");
        assert_eq!(config.routing.method, RoutingMethod::RoundRobin);
    }

    #[test]
    fn test_config_env_override_base_url() {
        std::env::set_var("LEADROUTER_BASE_URL", "https://leads.example.com");
        let config = LeadRouterConfig::default().with_env_overrides();
        std::env::remove_var("LEADROUTER_BASE_URL");

        assert_eq!(config.app.base_url, "https://leads.example.com");
    }

    #[test]
    fn test_config_validation_negative_weight() {
        let mut config = LeadRouterConfig::default();
        config.routing.weighted_agents.push(AgentWeight {
            agent_id: "a1".to_string(),
            weight: -1.0,
        });

        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::Validation { ref field, .. }) if field.contains("weight")
        ));
    }

    #[test]
    fn test_config_validation_zero_weights_allowed() {
        let mut config = LeadRouterConfig::default();
        config.routing.weighted_agents.push(AgentWeight {
            agent_id: "a1".to_string(),
            weight: 0.0,
        });

        // Zero weights are a routing-time concern, not a config error
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_empty_agent_id() {
        let mut config = LeadRouterConfig::default();
        config.routing.weighted_agents.push(AgentWeight {
            agent_id: "".to_string(),
            weight: 1.0,
        });

        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::Validation { ref field, .. }) if field.contains("agent_id")
        ));
    }

    #[test]
    fn test_config_validation_empty_base_url() {
        let mut config = LeadRouterConfig::default();
        config.app.base_url = String::new();

        let result = config.validate();
        assert!(matches!(
            result,
            Err(ConfigError::Validation { ref field, .. }) if field == "app.base_url"
        ));
    }
}
