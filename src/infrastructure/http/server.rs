//! HTTP server implementation
//!
//! This module owns construction of the long-lived clients (redis connection
//! manager, gateway HTTP client), wires them into the services, and runs the
//! warp server with graceful shutdown.

use crate::{
    application::services::{PaymentsService, ProfileService},
    config::AppConfig,
    infrastructure::adapters::{ProfileStore, RazorpayGateway},
    infrastructure::http::routes::RouteBuilder,
    shared::error::{AppError, AppResult},
};
use redis::aio::ConnectionManager;
use std::sync::Arc;
use tracing::{error, info, instrument};
use warp::{Filter, Reply};

/// HTTP server implementation
pub struct HttpServer {
    config: AppConfig,
    profile_service: Arc<ProfileService>,
    payments_service: Arc<PaymentsService>,
}

impl HttpServer {
    /// Create a new HTTP server instance.
    ///
    /// Connections are established here, once, and injected into the
    /// adapters; nothing downstream opens its own.
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let config_arc = Arc::new(config.clone());

        // Infrastructure layer
        let redis = Self::connect_redis(&config).await?;
        let store = Arc::new(ProfileStore::new(redis));
        let gateway = Arc::new(RazorpayGateway::new(config_arc)?);

        // Application layer
        let profile_service = Arc::new(ProfileService::new(store));
        let payments_service = Arc::new(PaymentsService::new(gateway));

        Ok(Self {
            config,
            profile_service,
            payments_service,
        })
    }

    async fn connect_redis(config: &AppConfig) -> AppResult<Option<Arc<ConnectionManager>>> {
        if !config.database.enabled {
            info!("Profile database disabled; store runs in-memory only");
            return Ok(None);
        }

        let client = redis::Client::open(config.database.redis_url.as_str())
            .map_err(|e| AppError::Config(format!("Invalid redis URL: {}", e)))?;
        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to connect to redis: {}", e)))?;

        info!("Connected to profile database at {}", config.database.redis_url);
        Ok(Some(Arc::new(manager)))
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Run the HTTP server until ctrl-c
    #[instrument(skip(self))]
    pub async fn run(self) -> AppResult<()> {
        let addr = self.config.server_address();
        let addr: std::net::SocketAddr = addr
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid server address: {}", e)))?;

        let routes = self.create_routes();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("failed to bind to address");
        let bound = listener.local_addr().expect("failed to read bound address");

        let server = warp::serve(routes).incoming(listener).graceful(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
        });

        info!("HTTP server listening on {}", bound);
        server.run().await;
        info!("HTTP server stopped; connections released");

        Ok(())
    }

    /// Create the application routes
    fn create_routes(self) -> impl Filter<Extract = impl Reply, Error = warp::Rejection> + Clone {
        RouteBuilder::build_routes(self.config, self.profile_service, self.payments_service)
    }
}
