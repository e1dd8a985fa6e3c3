//! Application services - Orchestration of domain logic

pub mod payments_service;
pub mod profile_service;

pub use payments_service::PaymentsService;
pub use profile_service::ProfileService;
