//! Payments domain models and types
//!
//! Orders are ephemeral: created per request, owned entirely by the gateway
//! afterwards. Nothing here is persisted.

use serde::{Deserialize, Serialize};

/// An order as confirmed by the gateway. Amount and currency are the
/// gateway's authoritative values, which may be normalized versions of the
/// requested ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    pub order_id: String,
    /// Amount in the smallest currency unit (paise for INR)
    pub amount: u64,
    pub currency: String,
}

/// The triple a checkout client reports back after capture, to be checked
/// against the gateway's signature scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureClaim {
    pub payment_id: String,
    pub order_id: String,
    pub signature: String,
}
