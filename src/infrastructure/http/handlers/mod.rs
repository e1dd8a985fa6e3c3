//! HTTP route handlers module
//!
//! Separate route handlers for each endpoint group.

pub mod health;
pub mod payments;
pub mod profiles;

pub use health::handle_root;
pub use payments::{handle_create_payment, handle_verify_payment};
pub use profiles::{
    handle_create_profile, handle_delete_profile, handle_get_profile, handle_list_profiles,
    handle_update_profile,
};
