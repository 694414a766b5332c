use async_trait::async_trait;
use threadgate_shared::{BlacklistEntry, BlacklistKind};
use tokio::sync::RwLock;

use crate::error::Result;

/// Read-only view of the externally maintained blacklist. The gate calls
/// `entries` fresh on every submission; already-approved comments are never
/// re-evaluated when the list changes.
#[async_trait]
pub trait BlacklistProvider: Send + Sync {
    async fn entries(&self) -> Result<Vec<BlacklistEntry>>;
}

/// In-process provider used by tests and embedders without a backing store.
#[derive(Debug, Default)]
pub struct MemoryBlacklist {
    entries: RwLock<Vec<BlacklistEntry>>,
}

impl MemoryBlacklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, keyword: impl Into<String>, kind: BlacklistKind) {
        self.entries.write().await.push(BlacklistEntry {
            keyword: keyword.into(),
            kind,
        });
    }

    pub async fn remove(&self, keyword: &str) {
        self.entries.write().await.retain(|e| e.keyword != keyword);
    }
}

#[async_trait]
impl BlacklistProvider for MemoryBlacklist {
    async fn entries(&self) -> Result<Vec<BlacklistEntry>> {
        Ok(self.entries.read().await.clone())
    }
}
