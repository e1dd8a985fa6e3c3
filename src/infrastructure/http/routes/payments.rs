//! Payments routes

use std::sync::Arc;
use warp::Filter;

use crate::application::services::PaymentsService;
use crate::config::AppConfig;
use crate::infrastructure::http::handlers::{handle_create_payment, handle_verify_payment};

pub struct PaymentsRoutes;

impl PaymentsRoutes {
    pub fn create_routes(
        config: AppConfig,
        service: Arc<PaymentsService>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let create = warp::path("create-payment")
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::content_length_limit(config.server.max_request_size as u64))
            .and(warp::body::json())
            .and(Self::with_service(service.clone()))
            .and_then(handle_create_payment);

        let verify = warp::path("verify-payment")
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::content_length_limit(config.server.max_request_size as u64))
            .and(warp::body::json())
            .and(Self::with_service(service))
            .and_then(handle_verify_payment);

        create.or(verify)
    }

    fn with_service(
        service: Arc<PaymentsService>,
    ) -> impl Filter<Extract = (Arc<PaymentsService>,), Error = std::convert::Infallible> + Clone {
        warp::any().map(move || service.clone())
    }
}
