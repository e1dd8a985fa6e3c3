//! HTTP routes module
//!
//! This module contains all HTTP route configurations.

pub mod builder;
pub mod health;
pub mod payments;
pub mod profiles;

// Re-export commonly used types
pub use builder::RouteBuilder;
pub use health::HealthRoutes;
pub use payments::PaymentsRoutes;
pub use profiles::ProfileRoutes;
