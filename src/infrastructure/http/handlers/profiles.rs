//! Profile HTTP handlers

use std::sync::Arc;

use warp::Reply;

use crate::application::services::ProfileService;
use crate::domain::profile::ProfileFields;
use crate::infrastructure::http::responses::ResponseFormatter;
use tracing::warn;

pub async fn handle_create_profile(
    fields: ProfileFields,
    service: Arc<ProfileService>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let response = match service.create(fields).await {
        Ok(profile) => ResponseFormatter::success(&profile),
        Err(e) => {
            warn!("Profile creation failed: {}", e);
            ResponseFormatter::from_app_error(&e)
        }
    };
    Ok(response)
}

pub async fn handle_list_profiles(
    service: Arc<ProfileService>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let response = match service.list().await {
        Ok(profiles) => ResponseFormatter::success(&profiles),
        Err(e) => {
            warn!("Profile listing failed: {}", e);
            ResponseFormatter::from_app_error(&e)
        }
    };
    Ok(response)
}

pub async fn handle_get_profile(
    profile_id: String,
    service: Arc<ProfileService>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let response = match service.get(&profile_id).await {
        Ok(profile) => ResponseFormatter::success(&profile),
        Err(e) => ResponseFormatter::from_app_error(&e),
    };
    Ok(response)
}

pub async fn handle_update_profile(
    profile_id: String,
    fields: ProfileFields,
    service: Arc<ProfileService>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let response = match service.update(&profile_id, fields).await {
        Ok(profile) => ResponseFormatter::success(&profile),
        Err(e) => ResponseFormatter::from_app_error(&e),
    };
    Ok(response)
}

pub async fn handle_delete_profile(
    profile_id: String,
    service: Arc<ProfileService>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let response = match service.delete(&profile_id).await {
        Ok(()) => ResponseFormatter::message("Profile deleted successfully"),
        Err(e) => ResponseFormatter::from_app_error(&e),
    };
    Ok(response)
}
