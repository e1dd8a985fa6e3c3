//! HTTP infrastructure module
//!
//! This module contains HTTP-related concerns including models, server
//! implementation, routes, responses, and handlers.

pub mod handlers;
pub mod models;
pub mod responses;
pub mod routes;
pub mod server;

pub use models::{ApiMessage, ErrorBody};
pub use responses::ResponseFormatter;
pub use server::HttpServer;
