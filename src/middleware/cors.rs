//! CORS middleware
//!
//! Cross-origin access is restricted to the single allowed origin from the
//! security configuration; methods and headers come from the same section.

use crate::config::AppConfig;
use tracing::info;

/// CORS middleware built from the application configuration
pub struct CorsMiddleware {
    config: AppConfig,
}

impl CorsMiddleware {
    /// Create a new CORS middleware
    pub fn new(config: AppConfig) -> Self {
        info!(
            "CORS restricted to origin {}",
            config.security.cors_allowed_origin
        );
        Self { config }
    }

    /// Check whether an origin is the configured one
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.config.security.cors_allowed_origin == origin
    }

    /// Build the warp CORS wrapper
    pub fn into_filter(self) -> warp::filters::cors::Builder {
        warp::cors()
            .allow_origin(self.config.security.cors_allowed_origin.as_str())
            .allow_methods(self.config.security.cors_methods.iter().map(|m| m.as_str()))
            .allow_headers(self.config.security.cors_headers.iter().map(|h| h.as_str()))
            .allow_credentials(true)
    }
}
