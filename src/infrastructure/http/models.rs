//! HTTP models - Infrastructure concerns
//!
//! This module contains the response envelopes specific to the HTTP surface.

use serde::{Deserialize, Serialize};

/// Simple message envelope for status-style responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// Structured error body carried by every failing response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { error: detail.into() }
    }
}
