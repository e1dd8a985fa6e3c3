//! Domain layer - Core domain models
//!
//! This module contains the domain models and business rules that are
//! independent of infrastructure concerns like HTTP or storage.

pub mod payments;
pub mod profile;

pub use payments::{OrderConfirmation, SignatureClaim};
pub use profile::{Profile, ProfileFields};
