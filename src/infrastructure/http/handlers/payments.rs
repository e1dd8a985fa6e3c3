//! Payments HTTP handlers

use std::sync::Arc;

use warp::Reply;

use crate::application::services::payments_service::{
    CreatePaymentRequest, PaymentsService, VerifyPaymentRequest,
};
use crate::infrastructure::http::responses::ResponseFormatter;
use tracing::warn;

pub async fn handle_create_payment(
    request: CreatePaymentRequest,
    service: Arc<PaymentsService>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let response = match service.create_order(request).await {
        Ok(confirmation) => ResponseFormatter::success(&confirmation),
        Err(e) => {
            warn!("Order creation failed: {}", e);
            ResponseFormatter::from_app_error(&e)
        }
    };
    Ok(response)
}

pub async fn handle_verify_payment(
    request: VerifyPaymentRequest,
    service: Arc<PaymentsService>,
) -> Result<impl Reply, warp::reject::Rejection> {
    let response = match service.verify_payment(request) {
        Ok(()) => ResponseFormatter::message("Payment verified successfully"),
        Err(e) => {
            warn!("Payment verification rejected");
            ResponseFormatter::from_app_error(&e)
        }
    };
    Ok(response)
}
