//! Application configuration structures
//!
//! This module contains the main configuration structures for the application.

use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use validator::Validate;

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ServerConfig {
    /// Server address to bind to
    pub bind_address: IpAddr,

    /// Server port
    #[validate(range(min = 1, max = 65535))]
    pub port: u16,

    /// Maximum request size in bytes
    #[validate(range(min = 1024, max = 10485760))] // 1KB to 10MB
    pub max_request_size: usize,
}

/// Profile database configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DatabaseConfig {
    /// Enable the redis-backed store; when disabled the store runs in-memory only
    pub enabled: bool,

    /// Redis connection URL
    #[validate(url)]
    pub redis_url: String,
}

/// Razorpay gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RazorpayConfig {
    /// API base URL
    #[validate(url)]
    pub api_url: String,

    /// Key id (basic-auth username)
    #[validate(length(min = 1))]
    pub key_id: String,

    /// Key secret (basic-auth password, also the HMAC key for signature checks)
    pub key_secret: String,

    /// Connection timeout in seconds
    #[validate(range(min = 1, max = 300))]
    pub timeout_seconds: u64,
}

/// Security configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SecurityConfig {
    /// The single allowed CORS origin
    #[validate(length(min = 1))]
    pub cors_allowed_origin: String,

    /// Allowed CORS methods
    pub cors_methods: Vec<String>,

    /// Allowed CORS headers
    pub cors_headers: Vec<String>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoggingConfig {
    /// Log level
    #[validate(length(min = 1))]
    pub level: String,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// Profile database configuration
    pub database: DatabaseConfig,

    /// Razorpay gateway configuration
    pub razorpay: RazorpayConfig,

    /// Security configuration
    pub security: SecurityConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_address: "127.0.0.1".parse().unwrap(),
                port: 8000,
                max_request_size: 1024 * 1024, // 1MB
            },
            database: DatabaseConfig {
                enabled: false,
                redis_url: "redis://127.0.0.1:6379".to_string(),
            },
            razorpay: RazorpayConfig {
                api_url: "https://api.razorpay.com".to_string(),
                // Test-mode placeholders; override via environment for live keys
                key_id: "rzp_test_".to_string(),
                key_secret: String::new(),
                timeout_seconds: 30,
            },
            security: SecurityConfig {
                cors_allowed_origin: "http://localhost:3000".to_string(),
                cors_methods: vec![
                    "GET".to_string(),
                    "POST".to_string(),
                    "PUT".to_string(),
                    "DELETE".to_string(),
                    "OPTIONS".to_string(),
                ],
                cors_headers: vec![
                    "Content-Type".to_string(),
                    "Authorization".to_string(),
                    "Accept".to_string(),
                ],
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> crate::Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default()).map_err(|e| {
                crate::shared::error::AppError::Config(format!("Failed to build configuration defaults: {}", e))
            })?)
            .add_source(config::File::with_name("Conf").required(false))
            .add_source(config::Environment::with_prefix("SHADI_BROKER").separator("__"))
            .build()
            .map_err(|e| crate::shared::error::AppError::Config(format!("Failed to build configuration: {}", e)))?;

        let config: AppConfig = config.try_deserialize()
            .map_err(|e| crate::shared::error::AppError::Config(format!("Failed to deserialize configuration: {}", e)))?;

        config.validate_config()
            .map_err(|e| crate::shared::error::AppError::Validation(format!("Configuration validation failed: {}", e)))?;

        Ok(config)
    }

    /// Validate the entire configuration
    pub fn validate_config(&self) -> Result<(), validator::ValidationErrors> {
        self.server.validate()?;
        self.database.validate()?;
        self.razorpay.validate()?;
        self.security.validate()?;
        self.logging.validate()?;

        Ok(())
    }

    /// Get server address as string
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.bind_address, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = AppConfig::default();
        assert!(config.validate_config().is_ok());
    }

    #[test]
    fn test_server_address_format() {
        let config = AppConfig::default();
        assert_eq!(config.server_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_razorpay_test_mode_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.razorpay.key_id, "rzp_test_");
        assert!(config.razorpay.key_secret.is_empty());
    }

    #[test]
    fn test_cors_restricted_to_single_origin() {
        let config = AppConfig::default();
        assert_eq!(config.security.cors_allowed_origin, "http://localhost:3000");
    }

    #[test]
    fn test_invalid_redis_url_rejected() {
        let mut config = AppConfig::default();
        config.database.redis_url = "not-a-url".to_string();
        assert!(config.validate_config().is_err());
    }
}
