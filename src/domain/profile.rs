//! Profile domain models
//!
//! A profile is a matrimonial-candidate record with personal, family, and
//! payment-status fields. The server owns the identifier and both timestamps;
//! everything else is caller-supplied free-form text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The caller-supplied portion of a profile.
///
/// All textual fields are required; deserialization fails when one is
/// missing. No format validation is applied beyond presence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileFields {
    pub full_name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub permanent_address: String,
    pub pin_code: String,
    pub taluk: String,
    pub father_name: String,
    pub mother_name: String,
    pub education: String,
    pub occupation: String,
    pub caste: String,
    pub complexion: String,
    pub height: String,
    pub weight: String,
    pub siblings_count: String,
    pub asset_details: String,

    /// Payment reference number supplied after external payment confirmation
    #[serde(default)]
    pub payment_utr: Option<String>,

    #[serde(default)]
    pub payment_status: bool,
}

/// A stored profile record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Server-assigned identifier, immutable after creation
    pub id: String,

    #[serde(flatten)]
    pub fields: ProfileFields,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile with a fresh identifier and both timestamps set
    /// to now. Any id or timestamps the caller sent are ignored.
    pub fn create(fields: ProfileFields) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            fields,
            created_at: now,
            updated_at: now,
        }
    }

    /// Full-replace update: every field except the identifier and
    /// `created_at` is overwritten, and `updated_at` is bumped to now.
    pub fn apply_update(&mut self, fields: ProfileFields) {
        self.fields = fields;
        self.updated_at = Utc::now();
    }
}

/// Representative field set shared by tests across the crate.
#[cfg(test)]
pub fn sample_fields() -> ProfileFields {
    ProfileFields {
        full_name: "Asha Rao".to_string(),
        gender: "female".to_string(),
        date_of_birth: "1994-03-12".to_string(),
        permanent_address: "12 MG Road, Mysuru".to_string(),
        pin_code: "570001".to_string(),
        taluk: "Mysuru".to_string(),
        father_name: "Ramesh Rao".to_string(),
        mother_name: "Lakshmi Rao".to_string(),
        education: "B.E.".to_string(),
        occupation: "Software Engineer".to_string(),
        caste: "Brahmin".to_string(),
        complexion: "Fair".to_string(),
        height: "5'4\"".to_string(),
        weight: "55kg".to_string(),
        siblings_count: "1".to_string(),
        asset_details: "Apartment in Mysuru".to_string(),
        payment_utr: None,
        payment_status: false,
    }
}
