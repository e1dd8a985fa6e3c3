//! Route builder module
//!
//! This module contains the main route builder that orchestrates the creation
//! of all application routes.

use crate::{
    application::services::{PaymentsService, ProfileService},
    config::AppConfig,
    infrastructure::http::responses::handle_rejection,
    infrastructure::http::routes::{HealthRoutes, PaymentsRoutes, ProfileRoutes},
    middleware::CorsMiddleware,
};
use std::sync::Arc;
use warp::Filter;

/// Route builder that orchestrates the creation of all application routes
pub struct RouteBuilder;

impl RouteBuilder {
    /// Build all application routes
    pub fn build_routes(
        config: AppConfig,
        profile_service: Arc<ProfileService>,
        payments_service: Arc<PaymentsService>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let cors = CorsMiddleware::new(config.clone()).into_filter();

        HealthRoutes::create_routes()
            .or(ProfileRoutes::create_routes(config.clone(), profile_service))
            .or(PaymentsRoutes::create_routes(config, payments_service))
            .recover(handle_rejection)
            .with(cors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::adapters::{ProfileStore, RazorpayGateway};

    fn build_test_routes() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let config = AppConfig::default();
        let profile_service = Arc::new(ProfileService::new(Arc::new(ProfileStore::new(None))));
        let gateway = Arc::new(RazorpayGateway::new(Arc::new(config.clone())).unwrap());
        let payments_service = Arc::new(PaymentsService::new(gateway));
        RouteBuilder::build_routes(config, profile_service, payments_service)
    }

    #[tokio::test]
    async fn test_unknown_path_is_structured_404() {
        let routes = build_test_routes();
        let response = warp::test::request()
            .method("GET")
            .path("/no-such-route")
            .reply(&routes)
            .await;

        assert_eq!(response.status(), 404);
        let body: serde_json::Value = serde_json::from_slice(response.body()).unwrap();
        assert!(body.get("error").is_some());
    }

    #[tokio::test]
    async fn test_malformed_profile_body_is_400() {
        let routes = build_test_routes();
        let response = warp::test::request()
            .method("POST")
            .path("/profiles")
            .json(&serde_json::json!({ "full_name": "only a name" }))
            .reply(&routes)
            .await;

        assert_eq!(response.status(), 400);
    }

    #[tokio::test]
    async fn test_root_and_profiles_reachable_through_builder() {
        let routes = build_test_routes();

        let root = warp::test::request().method("GET").path("/").reply(&routes).await;
        assert_eq!(root.status(), 200);

        let listed = warp::test::request().method("GET").path("/profiles").reply(&routes).await;
        assert_eq!(listed.status(), 200);
    }
}
