//! Profile service orchestrating the profile lifecycle
//!
//! The service owns the create/update semantics (server-assigned ids and
//! timestamps, full-replace updates, NotFound on misses); the store below it
//! only moves documents.

use std::sync::Arc;

use crate::domain::profile::{Profile, ProfileFields};
use crate::infrastructure::adapters::ProfileStore;
use crate::shared::error::{AppError, AppResult};
use tracing::debug;

pub struct ProfileService {
    store: Arc<ProfileStore>,
}

impl ProfileService {
    pub fn new(store: Arc<ProfileStore>) -> Self {
        Self { store }
    }

    /// Persist a new profile. Identical submissions produce distinct records
    /// with distinct ids; there is no duplicate detection.
    pub async fn create(&self, fields: ProfileFields) -> AppResult<Profile> {
        let profile = Profile::create(fields);
        self.store.put(&profile).await?;
        debug!("Created profile {}", profile.id);
        Ok(profile)
    }

    pub async fn list(&self) -> AppResult<Vec<Profile>> {
        self.store.list().await
    }

    pub async fn get(&self, id: &str) -> AppResult<Profile> {
        self.store.get(id).await?.ok_or(AppError::NotFound)
    }

    /// Full-replace update. Fields the caller omitted are gone; only the
    /// identifier and created-at survive.
    pub async fn update(&self, id: &str, fields: ProfileFields) -> AppResult<Profile> {
        let mut profile = self.store.get(id).await?.ok_or(AppError::NotFound)?;
        profile.apply_update(fields);
        self.store.put(&profile).await?;
        debug!("Updated profile {}", profile.id);
        Ok(profile)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if self.store.remove(id).await? {
            debug!("Deleted profile {}", id);
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }
}
