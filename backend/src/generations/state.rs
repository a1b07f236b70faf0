//! Holds the most recently generated websites in memory.
//!
//! The generation pipeline itself persists nothing; this registry exists so
//! that the status, retrieval and file-preview endpoints can serve a site
//! after the generate call returned. It is bounded: once more than
//! `CAPACITY` sites are stored, the oldest (by `created_at`) is evicted, so
//! memory stays flat without any background cleanup task.
//!
//! `GenerationsState` is created in `main.rs` and shared across the Actix
//! application as `web::Data`. Generation runs synchronously inside the
//! request handler, so handlers take the write lock directly; there is no
//! updater task or channel.

use common::model::generated::GeneratedWebsite;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

/// Upper bound on retained generations.
const CAPACITY: usize = 32;

/// A thread-safe, shareable registry of recent generations.
#[derive(Clone, Default)]
pub struct GenerationsState {
    /// Map from `project_id` to the stored website. Protected by an
    /// `Arc<RwLock>` for concurrent reads by the retrieval endpoints and
    /// exclusive writes by the generate handler.
    sites: Arc<RwLock<HashMap<String, GeneratedWebsite>>>,
}

impl GenerationsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a generated website, evicting the oldest entries beyond the
    /// registry capacity.
    pub async fn insert(&self, site: GeneratedWebsite) {
        let mut sites = self.sites.write().await;
        sites.insert(site.project_id.clone(), site);
        while sites.len() > CAPACITY {
            let oldest = sites
                .values()
                .min_by_key(|s| s.created_at)
                .map(|s| s.project_id.clone());
            match oldest {
                Some(id) => {
                    sites.remove(&id);
                }
                None => break,
            }
        }
    }

    /// Returns a clone of the stored website, if it is still retained.
    pub async fn get(&self, project_id: &str) -> Option<GeneratedWebsite> {
        self.sites.read().await.get(project_id).cloned()
    }
}

#[cfg(test)]
impl GenerationsState {
    /// Number of retained sites. Test helper.
    pub async fn stored_count(&self) -> usize {
        self.sites.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(id: &str) -> GeneratedWebsite {
        GeneratedWebsite::new(id.to_string(), "Demo".to_string(), "A demo".to_string())
    }

    #[actix_web::test]
    async fn stored_sites_are_retrievable() {
        let state = GenerationsState::new();
        state.insert(site("site_1")).await;
        assert!(state.get("site_1").await.is_some());
        assert!(state.get("site_2").await.is_none());
    }

    #[actix_web::test]
    async fn oldest_entries_are_evicted_beyond_capacity() {
        let state = GenerationsState::new();
        for i in 0..CAPACITY + 1 {
            let mut entry = site(&format!("site_{}", i));
            // Spread the timestamps so eviction order is deterministic.
            entry.created_at += chrono::Duration::seconds(i as i64);
            state.insert(entry).await;
        }
        assert!(state.get("site_0").await.is_none());
        assert!(state.get(&format!("site_{}", CAPACITY)).await.is_some());
        assert_eq!(state.stored_count().await, CAPACITY);
    }
}
