//! Redis-backed profile store
//!
//! Profiles are stored as JSON documents keyed by their generated id, with a
//! set of ids alongside for listing. An in-process map mirrors every write so
//! the store can also run memory-only when no redis connection is configured
//! (test mode).

use crate::domain::profile::Profile;
use crate::shared::error::{AppError, AppResult};
use redis::{aio::ConnectionManager, AsyncCommands};
use std::sync::Arc;

const INDEX_KEY: &str = "profiles:index";

/// Abstraction for persisting profile documents
#[derive(Clone)]
pub struct ProfileStore {
    redis: Option<Arc<ConnectionManager>>, // optional; memory-only if None
    memory: Arc<tokio::sync::RwLock<std::collections::HashMap<String, Profile>>>,
}

impl ProfileStore {
    pub fn new(redis: Option<Arc<ConnectionManager>>) -> Self {
        Self {
            redis,
            memory: Arc::new(tokio::sync::RwLock::new(std::collections::HashMap::new())),
        }
    }

    fn key(profile_id: &str) -> String {
        format!("profiles:{}", profile_id)
    }

    /// Insert or overwrite a document. Overwrites are how full-replace
    /// updates land; last writer wins.
    pub async fn put(&self, profile: &Profile) -> AppResult<()> {
        let serialized = serde_json::to_vec(profile)
            .map_err(|e| AppError::Internal(format!("serialize profile: {}", e)))?;

        if let Some(redis) = &self.redis {
            let mut conn = (**redis).clone();
            let key = Self::key(&profile.id);
            let _: () = conn
                .set(key, serialized)
                .await
                .map_err(|e| AppError::Storage(format!("redis set: {}", e)))?;
            let _: () = conn
                .sadd(INDEX_KEY, &profile.id)
                .await
                .map_err(|e| AppError::Storage(format!("redis sadd: {}", e)))?;
        }

        // Always mirror to memory
        self.memory.write().await.insert(profile.id.clone(), profile.clone());
        Ok(())
    }

    pub async fn get(&self, profile_id: &str) -> AppResult<Option<Profile>> {
        if let Some(redis) = &self.redis {
            let mut conn = (**redis).clone();
            let key = Self::key(profile_id);
            let data: Option<Vec<u8>> = conn
                .get(key)
                .await
                .map_err(|e| AppError::Storage(format!("redis get: {}", e)))?;
            if let Some(bytes) = data {
                let profile: Profile = serde_json::from_slice(&bytes)
                    .map_err(|e| AppError::Internal(format!("deserialize profile: {}", e)))?;
                // mirror to memory
                self.memory.write().await.insert(profile_id.to_string(), profile.clone());
                return Ok(Some(profile));
            }
            return Ok(None);
        }
        Ok(self.memory.read().await.get(profile_id).cloned())
    }

    /// All stored profiles, in storage-native (unspecified) order
    pub async fn list(&self) -> AppResult<Vec<Profile>> {
        if let Some(redis) = &self.redis {
            let mut conn = (**redis).clone();
            let ids: Vec<String> = conn
                .smembers(INDEX_KEY)
                .await
                .map_err(|e| AppError::Storage(format!("redis smembers: {}", e)))?;

            let mut profiles = Vec::with_capacity(ids.len());
            for id in ids {
                // A document deleted between SMEMBERS and GET is skipped
                if let Some(profile) = self.get(&id).await? {
                    profiles.push(profile);
                }
            }
            return Ok(profiles);
        }
        Ok(self.memory.read().await.values().cloned().collect())
    }

    /// Remove a document. Returns whether a record existed.
    pub async fn remove(&self, profile_id: &str) -> AppResult<bool> {
        let mut existed = self.memory.write().await.remove(profile_id).is_some();

        if let Some(redis) = &self.redis {
            let mut conn = (**redis).clone();
            let key = Self::key(profile_id);
            let deleted: i64 = conn
                .del(key)
                .await
                .map_err(|e| AppError::Storage(format!("redis del: {}", e)))?;
            let _: () = conn
                .srem(INDEX_KEY, profile_id)
                .await
                .map_err(|e| AppError::Storage(format!("redis srem: {}", e)))?;
            existed = deleted > 0;
        }

        Ok(existed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::profile::{sample_fields, Profile};

    fn memory_store() -> ProfileStore {
        ProfileStore::new(None)
    }

    #[tokio::test]
    async fn test_put_then_get_round_trips() {
        let store = memory_store();
        let profile = Profile::create(sample_fields());

        store.put(&profile).await.unwrap();
        let fetched = store.get(&profile.id).await.unwrap().unwrap();
        assert_eq!(fetched, profile);
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let store = memory_store();
        assert!(store.get("no-such-id").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_document() {
        let store = memory_store();
        let mut profile = Profile::create(sample_fields());
        store.put(&profile).await.unwrap();

        let mut fields = sample_fields();
        fields.occupation = "Doctor".to_string();
        profile.apply_update(fields);
        store.put(&profile).await.unwrap();

        let fetched = store.get(&profile.id).await.unwrap().unwrap();
        assert_eq!(fetched.fields.occupation, "Doctor");
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_reports_existence() {
        let store = memory_store();
        let profile = Profile::create(sample_fields());
        store.put(&profile).await.unwrap();

        assert!(store.remove(&profile.id).await.unwrap());
        assert!(store.get(&profile.id).await.unwrap().is_none());
        assert!(!store.remove(&profile.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_list_counts_creates_minus_deletes() {
        let store = memory_store();
        let mut ids = Vec::new();
        for _ in 0..5 {
            let profile = Profile::create(sample_fields());
            store.put(&profile).await.unwrap();
            ids.push(profile.id);
        }
        for id in ids.iter().take(2) {
            assert!(store.remove(id).await.unwrap());
        }

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 3);

        let mut distinct: Vec<&str> = listed.iter().map(|p| p.id.as_str()).collect();
        distinct.sort_unstable();
        distinct.dedup();
        assert_eq!(distinct.len(), 3);
    }
}
