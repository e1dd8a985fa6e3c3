//! Profile routes

use std::sync::Arc;
use warp::Filter;

use crate::application::services::ProfileService;
use crate::config::AppConfig;
use crate::infrastructure::http::handlers::{
    handle_create_profile, handle_delete_profile, handle_get_profile, handle_list_profiles,
    handle_update_profile,
};

pub struct ProfileRoutes;

impl ProfileRoutes {
    pub fn create_routes(
        config: AppConfig,
        service: Arc<ProfileService>,
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let create = warp::path("profiles")
            .and(warp::path::end())
            .and(warp::post())
            .and(warp::body::content_length_limit(config.server.max_request_size as u64))
            .and(warp::body::json())
            .and(Self::with_service(service.clone()))
            .and_then(handle_create_profile);

        let list = warp::path("profiles")
            .and(warp::path::end())
            .and(warp::get())
            .and(Self::with_service(service.clone()))
            .and_then(handle_list_profiles);

        let get = warp::path("profiles")
            .and(warp::path::param::<String>())
            .and(warp::path::end())
            .and(warp::get())
            .and(Self::with_service(service.clone()))
            .and_then(handle_get_profile);

        let update = warp::path("profiles")
            .and(warp::path::param::<String>())
            .and(warp::path::end())
            .and(warp::put())
            .and(warp::body::content_length_limit(config.server.max_request_size as u64))
            .and(warp::body::json())
            .and(Self::with_service(service.clone()))
            .and_then(handle_update_profile);

        let delete = warp::path("profiles")
            .and(warp::path::param::<String>())
            .and(warp::path::end())
            .and(warp::delete())
            .and(Self::with_service(service))
            .and_then(handle_delete_profile);

        create.or(list).or(get).or(update).or(delete)
    }

    fn with_service(
        service: Arc<ProfileService>,
    ) -> impl Filter<Extract = (Arc<ProfileService>,), Error = std::convert::Infallible> + Clone {
        warp::any().map(move || service.clone())
    }
}
