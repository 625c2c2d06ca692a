//! In-memory store — useful for testing and ephemeral sessions.

use async_trait::async_trait;
use promptdeck_core::error::StoreError;
use promptdeck_core::prompt::StoredPrompt;
use promptdeck_core::store::PromptStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A store that keeps prompts in a Vec. Nothing survives a restart.
pub struct InMemoryStore {
    prompts: Arc<RwLock<Vec<StoredPrompt>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            prompts: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptStore for InMemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn list(&self, user_id: &str) -> Result<Vec<StoredPrompt>, StoreError> {
        let prompts = self.prompts.read().await;
        Ok(crate::list_for_user(&prompts, user_id))
    }

    async fn get(&self, id: &str, user_id: &str) -> Result<Option<StoredPrompt>, StoreError> {
        let prompts = self.prompts.read().await;
        Ok(prompts
            .iter()
            .find(|p| p.id == id && p.user_id == user_id)
            .cloned())
    }

    async fn put(&self, prompt: StoredPrompt) -> Result<(), StoreError> {
        crate::upsert(&mut *self.prompts.write().await, prompt);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut prompts = self.prompts.write().await;
        let len_before = prompts.len();
        prompts.retain(|p| p.id != id);
        Ok(prompts.len() < len_before)
    }
}
