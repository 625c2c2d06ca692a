//! Prompt store trait — persistence for saved prompts.
//!
//! Implementations live in `promptdeck-store`: in-memory (for tests and
//! ephemeral sessions) and a JSONL file.

use crate::error::{EditorError, Result, StoreError};
use crate::prompt::{PromptDefinition, StoredPrompt};
use async_trait::async_trait;

/// The core PromptStore trait.
///
/// Every lookup is scoped by `user_id`, which is always
/// [`DEFAULT_USER_ID`](crate::prompt::DEFAULT_USER_ID) today.
#[async_trait]
pub trait PromptStore: Send + Sync {
    /// The backend name (e.g., "memory", "file").
    fn name(&self) -> &str;

    /// All prompts owned by `user_id`, most recently updated first.
    async fn list(&self, user_id: &str) -> std::result::Result<Vec<StoredPrompt>, StoreError>;

    /// A prompt by id, if it exists and belongs to `user_id`.
    async fn get(
        &self,
        id: &str,
        user_id: &str,
    ) -> std::result::Result<Option<StoredPrompt>, StoreError>;

    /// Insert a prompt, or replace the one with the same id.
    async fn put(&self, prompt: StoredPrompt) -> std::result::Result<(), StoreError>;

    /// Delete a prompt by id. Returns whether anything was removed.
    async fn delete(&self, id: &str) -> std::result::Result<bool, StoreError>;
}

/// Create and persist a prompt owned by `user_id`. A blank title is
/// rejected before anything is written.
pub async fn save_new(
    store: &dyn PromptStore,
    user_id: &str,
    definition: PromptDefinition,
) -> Result<StoredPrompt> {
    if definition.title.trim().is_empty() {
        return Err(EditorError::TitleRequired.into());
    }
    let prompt = StoredPrompt::create(user_id, definition);
    store.put(prompt.clone()).await?;
    Ok(prompt)
}

/// Persist a copy of prompt `id` under a fresh id. `None` when there is
/// no such prompt.
pub async fn duplicate(
    store: &dyn PromptStore,
    id: &str,
    user_id: &str,
) -> Result<Option<StoredPrompt>> {
    let Some(original) = store.get(id, user_id).await? else {
        return Ok(None);
    };
    save_new(store, user_id, original.duplicate_definition())
        .await
        .map(Some)
}
