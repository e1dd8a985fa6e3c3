//! Shadi Broker Server - Backend for the Shadi Broker matrimonial platform
//!
//! This library provides the HTTP API for matrimonial-candidate profile CRUD
//! and a thin Razorpay integration for order creation and payment-signature
//! verification.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod middleware;
pub mod shared;

pub use config::AppConfig;
pub use infrastructure::http::HttpServer;
pub use shared::error::{AppError, AppResult};

/// Application result type
pub type Result<T> = std::result::Result<T, shared::error::AppError>;
