//! Payments service orchestrating order creation and signature verification

use std::sync::Arc;

use crate::domain::payments::{OrderConfirmation, SignatureClaim};
use crate::infrastructure::adapters::RazorpayGateway;
use crate::shared::error::{AppError, AppResult};
use chrono::Utc;
use serde::{Deserialize, Serialize};

fn default_amount() -> u64 {
    19900 // 199 rupees in paise
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_receipt() -> String {
    "shadi_broker_receipt".to_string()
}

/// Payment-initiation request with the platform's standard defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    #[serde(default = "default_amount")]
    pub amount: u64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_receipt")]
    pub receipt: String,
}

/// Payment-verification request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyPaymentRequest {
    pub payment_id: String,
    pub order_id: String,
    pub signature: String,
}

/// Append a per-request suffix so repeated submissions never collide on the
/// gateway's receipt uniqueness constraint.
fn uniquify_receipt(receipt: &str) -> String {
    format!("{}_{}", receipt, Utc::now().timestamp_millis())
}

pub struct PaymentsService {
    gateway: Arc<RazorpayGateway>,
}

impl PaymentsService {
    pub fn new(gateway: Arc<RazorpayGateway>) -> Self {
        Self { gateway }
    }

    /// Create a gateway order for the requested amount.
    ///
    /// Orders are not persisted here; after creation they are owned entirely
    /// by the gateway and this service only relays its response.
    pub async fn create_order(&self, request: CreatePaymentRequest) -> AppResult<OrderConfirmation> {
        if request.amount == 0 {
            return Err(AppError::Validation(
                "amount must be a positive integer in the smallest currency unit".to_string(),
            ));
        }

        let receipt = uniquify_receipt(&request.receipt);
        self.gateway
            .create_order(request.amount, &request.currency, &receipt)
            .await
    }

    /// Check a checkout signature against the gateway's scheme
    pub fn verify_payment(&self, request: VerifyPaymentRequest) -> AppResult<()> {
        let claim = SignatureClaim {
            payment_id: request.payment_id,
            order_id: request.order_id,
            signature: request.signature,
        };
        self.gateway.verify_signature(&claim)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn test_service(secret: &str) -> PaymentsService {
        let mut config = AppConfig::default();
        config.razorpay.key_secret = secret.to_string();
        let gateway = Arc::new(RazorpayGateway::new(Arc::new(config)).unwrap());
        PaymentsService::new(gateway)
    }

    #[test]
    fn test_request_defaults() {
        let request: CreatePaymentRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.amount, 19900);
        assert_eq!(request.currency, "INR");
        assert_eq!(request.receipt, "shadi_broker_receipt");
    }

    #[test]
    fn test_receipt_gets_uniqueness_suffix() {
        let receipt = uniquify_receipt("shadi_broker_receipt");
        assert_ne!(receipt, "shadi_broker_receipt");
        assert!(receipt.starts_with("shadi_broker_receipt_"));
    }

    #[tokio::test]
    async fn test_zero_amount_rejected_before_gateway_call() {
        let service = test_service("secret");
        let request = CreatePaymentRequest {
            amount: 0,
            currency: "INR".to_string(),
            receipt: "r".to_string(),
        };
        assert!(matches!(
            service.create_order(request).await,
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_verify_payment_rejects_bad_signature() {
        let service = test_service("secret");
        let request = VerifyPaymentRequest {
            payment_id: "pay_001".to_string(),
            order_id: "order_001".to_string(),
            signature: "deadbeef".to_string(),
        };
        assert!(matches!(
            service.verify_payment(request),
            Err(AppError::PaymentVerification)
        ));
    }
}
