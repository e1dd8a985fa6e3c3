//! Root status route

use warp::Filter;

use crate::infrastructure::http::handlers::handle_root;

pub struct HealthRoutes;

impl HealthRoutes {
    pub fn create_routes(
    ) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        warp::path::end().and(warp::get()).and_then(handle_root)
    }
}
