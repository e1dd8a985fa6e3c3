//! Application layer - Services orchestrating domain logic

pub mod services;

pub use services::{PaymentsService, ProfileService};
