//! Infrastructure layer - External concerns and adapters
//!
//! This module contains infrastructure concerns including external services,
//! adapters, and HTTP handling.

pub mod adapters;
pub mod http;

pub use adapters::{ProfileStore, RazorpayGateway};
