//! Razorpay gateway adapter
//!
//! This module handles communication with the Razorpay Orders API and local
//! verification of checkout signatures. Verification follows the documented
//! scheme: HMAC-SHA256 over `"{order_id}|{payment_id}"` with the key secret,
//! hex encoded.

use crate::config::AppConfig;
use crate::domain::payments::{OrderConfirmation, SignatureClaim};
use crate::shared::error::{AppError, AppResult};
use hmac::{Hmac, Mac};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

type HmacSha256 = Hmac<Sha256>;

/// Order creation payload for the Orders API
#[derive(Debug, Serialize)]
struct OrderRequest<'a> {
    amount: u64,
    currency: &'a str,
    receipt: &'a str,
}

/// The subset of the gateway's order entity this service relays
#[derive(Debug, Deserialize)]
struct OrderEntity {
    id: String,
    amount: u64,
    currency: String,
}

/// Client for the Razorpay gateway
pub struct RazorpayGateway {
    config: Arc<AppConfig>,
    http_client: Client,
}

impl RazorpayGateway {
    /// Create a new gateway client with a pooled HTTP connection
    pub fn new(config: Arc<AppConfig>) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.razorpay.timeout_seconds))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http_client })
    }

    /// Create an order with the gateway.
    ///
    /// The gateway's confirmed amount and currency are returned, which may be
    /// normalized versions of the request. Every failure, transport or
    /// gateway-side, surfaces as `PaymentCreation` with the underlying
    /// message passed through.
    pub async fn create_order(
        &self,
        amount: u64,
        currency: &str,
        receipt: &str,
    ) -> AppResult<OrderConfirmation> {
        let url = format!("{}/v1/orders", self.config.razorpay.api_url);
        let request = OrderRequest { amount, currency, receipt };

        debug!("Creating gateway order at {}", url);

        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.config.razorpay.key_id, Some(&self.config.razorpay.key_secret))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to reach payment gateway: {}", e);
                AppError::PaymentCreation(format!("gateway request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            error!("Gateway returned error status {}: {}", status, error_text);
            return Err(AppError::PaymentCreation(format!(
                "gateway returned {}: {}",
                status, error_text
            )));
        }

        let order: OrderEntity = response.json().await.map_err(|e| {
            error!("Failed to parse gateway response: {}", e);
            AppError::PaymentCreation(format!("invalid gateway response: {}", e))
        })?;

        debug!("Gateway order created: {}", order.id);

        Ok(OrderConfirmation {
            order_id: order.id,
            amount: order.amount,
            currency: order.currency,
        })
    }

    /// Verify a checkout signature.
    ///
    /// Comparison happens in constant time via the MAC's own verifier. Any
    /// failure, including malformed hex, collapses to the same opaque
    /// `PaymentVerification` error.
    pub fn verify_signature(&self, claim: &SignatureClaim) -> AppResult<()> {
        let mut mac = HmacSha256::new_from_slice(self.config.razorpay.key_secret.as_bytes())
            .map_err(|_| AppError::PaymentVerification)?;
        mac.update(format!("{}|{}", claim.order_id, claim.payment_id).as_bytes());

        let supplied = hex::decode(&claim.signature).map_err(|_| {
            warn!("Rejected signature with invalid encoding for order {}", claim.order_id);
            AppError::PaymentVerification
        })?;

        mac.verify_slice(&supplied).map_err(|_| {
            warn!("Signature mismatch for order {}", claim.order_id);
            AppError::PaymentVerification
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_gateway(secret: &str) -> RazorpayGateway {
        let mut config = AppConfig::default();
        config.razorpay.key_secret = secret.to_string();
        RazorpayGateway::new(Arc::new(config)).unwrap()
    }

    fn sign(secret: &str, order_id: &str, payment_id: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).unwrap();
        mac.update(format!("{}|{}", order_id, payment_id).as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_valid_signature_verifies() {
        let gateway = test_gateway("secret-key");
        let claim = SignatureClaim {
            payment_id: "pay_001".to_string(),
            order_id: "order_001".to_string(),
            signature: sign("secret-key", "order_001", "pay_001"),
        };
        assert!(gateway.verify_signature(&claim).is_ok());
    }

    #[test]
    fn test_tampered_signature_always_fails() {
        let gateway = test_gateway("secret-key");
        let mut signature = sign("secret-key", "order_001", "pay_001");
        // Flip the last nibble
        let last = signature.pop().unwrap();
        signature.push(if last == '0' { '1' } else { '0' });

        let claim = SignatureClaim {
            payment_id: "pay_001".to_string(),
            order_id: "order_001".to_string(),
            signature,
        };
        assert!(matches!(
            gateway.verify_signature(&claim),
            Err(AppError::PaymentVerification)
        ));
    }

    #[test]
    fn test_mismatched_ids_fail() {
        let gateway = test_gateway("secret-key");
        let claim = SignatureClaim {
            payment_id: "pay_002".to_string(),
            order_id: "order_001".to_string(),
            signature: sign("secret-key", "order_001", "pay_001"),
        };
        assert!(gateway.verify_signature(&claim).is_err());
    }

    #[test]
    fn test_malformed_hex_is_same_opaque_error() {
        let gateway = test_gateway("secret-key");
        let claim = SignatureClaim {
            payment_id: "pay_001".to_string(),
            order_id: "order_001".to_string(),
            signature: "not-hex-at-all".to_string(),
        };
        assert!(matches!(
            gateway.verify_signature(&claim),
            Err(AppError::PaymentVerification)
        ));
    }

    #[test]
    fn test_wrong_secret_fails() {
        let gateway = test_gateway("secret-key");
        let claim = SignatureClaim {
            payment_id: "pay_001".to_string(),
            order_id: "order_001".to_string(),
            signature: sign("other-secret", "order_001", "pay_001"),
        };
        assert!(gateway.verify_signature(&claim).is_err());
    }
}
