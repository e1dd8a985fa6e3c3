//! Root status handler

use crate::infrastructure::http::responses::ResponseFormatter;
use warp::Reply;

/// Handle the root status request
pub async fn handle_root() -> Result<impl Reply, warp::reject::Rejection> {
    Ok(ResponseFormatter::message("Shadi Broker API is running"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_reports_running() {
        let reply = handle_root().await.unwrap();
        let response = reply.into_response();
        assert_eq!(response.status(), warp::http::StatusCode::OK);
    }
}
