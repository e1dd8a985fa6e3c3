//! Infrastructure adapters
//!
//! External-service clients: the redis-backed profile store and the Razorpay
//! gateway client. Both are constructed once at startup and injected into the
//! application services.

pub mod profile_store;
pub mod razorpay;

pub use profile_store::ProfileStore;
pub use razorpay::RazorpayGateway;
