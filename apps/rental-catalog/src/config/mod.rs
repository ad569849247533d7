//! Configuration module for the rental catalog.
//!
//! Loads a YAML file with environment variable interpolation and validates
//! it before the server starts.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rental_catalog::config::{Config, load_config};
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! println!("HTTP port: {}", config.server.http_port);
//! ```

mod observability;
mod persistence;
mod server;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use observability::{LoggingConfig, ObservabilityConfig};
pub use persistence::PersistenceConfig;
pub use server::ServerConfig;

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "RENTAL_CATALOG_CONFIG";

/// Config file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub persistence: PersistenceConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Resolve configuration for the binary.
///
/// An explicit [`CONFIG_PATH_ENV`] must point at a readable file. Without it,
/// `config.yaml` is used when present and built-in defaults otherwise.
pub fn load_config_from_env() -> Result<Config, ConfigError> {
    match std::env::var(CONFIG_PATH_ENV) {
        Ok(path) if !path.is_empty() => load_config(Some(&path)),
        _ if Path::new(DEFAULT_CONFIG_PATH).exists() => load_config(None),
        _ => {
            let config = Config::default();
            validate_config(&config)?;
            Ok(config)
        }
    }
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |cap: &regex::Captures<'_>| {
        let default_value = cap.get(2).map_or("", |m| m.as_str());
        match std::env::var(&cap[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.http_port == 0 {
        return Err(ConfigError::ValidationError(
            "server.http_port must be non-zero".to_string(),
        ));
    }

    if config.server.socket_addr().is_err() {
        return Err(ConfigError::ValidationError(format!(
            "server.bind_address '{}' is not a valid IP address",
            config.server.bind_address
        )));
    }

    if config.persistence.db_path.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "persistence.db_path must not be empty".to_string(),
        ));
    }

    let logging = &config.observability.logging;
    if !LoggingConfig::FORMATS.contains(&logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {:?}",
            LoggingConfig::FORMATS
        )));
    }

    if !LOG_LEVELS.contains(&logging.level.to_lowercase().as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.level must be one of: {LOG_LEVELS:?}"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.server.bind_address, "0.0.0.0");
        assert_eq!(config.server.http_port, 5000);
        assert_eq!(config.persistence.db_path, "./database/rental.db");
        assert_eq!(config.observability.logging.level, "info");
        assert!(!config.observability.logging.is_json());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_minimal_config() {
        let yaml = r"
server:
  http_port: 8080
";

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load minimal config: {e}"),
        };
        assert_eq!(config.server.http_port, 8080);
        assert_eq!(config.persistence, PersistenceConfig::default());
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
server:
  bind_address: "127.0.0.1"
  http_port: 8081

persistence:
  db_path: "/var/lib/rental/rental.db"

observability:
  logging:
    level: "debug"
    format: "json"
"#;

        let config = match load_config_from_string(yaml) {
            Ok(c) => c,
            Err(e) => panic!("should load full config: {e}"),
        };

        assert_eq!(config.server.bind_address, "127.0.0.1");
        assert_eq!(config.server.http_port, 8081);
        assert_eq!(config.persistence.db_path, "/var/lib/rental/rental.db");
        assert_eq!(config.observability.logging.level, "debug");
        assert!(config.observability.logging.is_json());
    }

    #[test]
    fn test_env_var_with_default_when_missing() {
        let input = "db_path: ${RENTAL_CONFIG_TEST_NONEXISTENT_VAR:-/tmp/rental.db}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "db_path: /tmp/rental.db");
    }

    #[test]
    #[expect(clippy::literal_string_with_formatting_args)] // ${...} is env var syntax, not format args
    fn test_env_var_with_default_uses_existing() {
        // PATH should always exist
        let input = "path: ${PATH:-default}";
        let result = interpolate_env_vars(input);

        assert_ne!(result, "path: default");
        assert!(result.starts_with("path: "));
    }

    #[test]
    fn test_env_var_without_default_becomes_empty() {
        let input = "bind_address: ${RENTAL_CONFIG_TEST_UNLIKELY_TO_EXIST}";
        let result = interpolate_env_vars(input);

        assert_eq!(result, "bind_address: ");
    }

    #[test]
    fn test_validation_zero_port() {
        let yaml = r"
server:
  http_port: 0
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for zero port");
        };
        assert!(err.to_string().contains("http_port"));
    }

    #[test]
    fn test_validation_bad_bind_address() {
        let yaml = r"
server:
  bind_address: not-an-ip
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for bad bind address");
        };
        assert!(err.to_string().contains("bind_address"));
    }

    #[test]
    fn test_validation_empty_db_path() {
        let yaml = r#"
persistence:
  db_path: "  "
"#;

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for empty db_path");
        };
        assert!(err.to_string().contains("db_path"));
    }

    #[test]
    fn test_validation_unknown_log_format() {
        let yaml = r"
observability:
  logging:
    format: xml
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for unknown format");
        };
        assert!(err.to_string().contains("format"));
    }

    #[test]
    fn test_validation_unknown_log_level() {
        let yaml = r"
observability:
  logging:
    level: loud
";

        let Err(err) = load_config_from_string(yaml) else {
            panic!("expected error for unknown level");
        };
        assert!(err.to_string().contains("level"));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "server:\n  http_port: 9090").unwrap();

        let config = load_config(file.path().to_str()).unwrap();
        assert_eq!(config.server.http_port, 9090);
    }

    #[test]
    fn test_load_config_missing_file() {
        let Err(err) = load_config(Some("/nonexistent/rental/config.yaml")) else {
            panic!("expected read error");
        };
        assert!(matches!(err, ConfigError::ReadError { .. }));
    }
}
