use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::SessionStore;
use crate::domain::models::TokenKey;
use crate::errors::ClientResult;

/// 프로세스 메모리 토큰 저장소
#[derive(Default)]
pub struct MemorySessionStore {
    values: RwLock<HashMap<TokenKey, String>>,
    epoch: AtomicU64,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, key: TokenKey) -> ClientResult<Option<String>> {
        Ok(self.values.read().await.get(&key).cloned())
    }

    async fn set(&self, key: TokenKey, value: &str) -> ClientResult<()> {
        self.values.write().await.insert(key, value.to_string());
        self.epoch.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove(&self, key: TokenKey) -> ClientResult<()> {
        if self.values.write().await.remove(&key).is_some() {
            self.epoch.fetch_add(1, Ordering::SeqCst);
        }
        Ok(())
    }

    fn epoch(&self) -> u64 {
        self.epoch.load(Ordering::SeqCst)
    }
}
