//! Prompt store implementations for PromptDeck.

pub mod file_backend;
pub mod in_memory;

pub use file_backend::FileStore;
pub use in_memory::InMemoryStore;

use promptdeck_config::{ConfigError, StoreBackend, StoreConfig};
use promptdeck_core::prompt::StoredPrompt;
use promptdeck_core::store::PromptStore;
use std::sync::Arc;

/// Build the configured store backend.
pub fn build_from_config(config: &StoreConfig) -> Result<Arc<dyn PromptStore>, ConfigError> {
    let store: Arc<dyn PromptStore> = match config.kind()? {
        StoreBackend::Memory => Arc::new(InMemoryStore::new()),
        StoreBackend::File => Arc::new(FileStore::new(config.resolved_path())),
    };
    tracing::info!(backend = store.name(), "Prompt store ready");
    Ok(store)
}

/// Owned by `user_id`, newest `updated_at` first.
pub(crate) fn list_for_user(prompts: &[StoredPrompt], user_id: &str) -> Vec<StoredPrompt> {
    let mut owned: Vec<StoredPrompt> = prompts
        .iter()
        .filter(|p| p.user_id == user_id)
        .cloned()
        .collect();
    owned.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    owned
}

/// Replace the prompt with the same id in place, or append.
pub(crate) fn upsert(prompts: &mut Vec<StoredPrompt>, prompt: StoredPrompt) {
    match prompts.iter_mut().find(|p| p.id == prompt.id) {
        Some(existing) => *existing = prompt,
        None => prompts.push(prompt),
    }
}
