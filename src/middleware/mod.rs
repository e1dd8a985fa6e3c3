//! Middleware layer

pub mod cors;

pub use cors::CorsMiddleware;
