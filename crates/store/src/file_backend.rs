//! File-based store — persistent JSON-lines storage.
//!
//! Each line is a JSON-encoded `StoredPrompt`. Storage location defaults to
//! `~/.promptdeck/prompts.jsonl`.
//!
//! Prompts are loaded into memory on creation and the whole file is
//! rewritten on every mutation. Fine for a personal prompt library; no
//! durability guarantees beyond that.

use async_trait::async_trait;
use promptdeck_core::error::StoreError;
use promptdeck_core::prompt::StoredPrompt;
use promptdeck_core::store::PromptStore;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

pub struct FileStore {
    path: PathBuf,
    prompts: Arc<RwLock<Vec<StoredPrompt>>>,
}

impl FileStore {
    /// Open a store at the given path.
    ///
    /// If the file does not exist, starts empty (file created on first write).
    pub fn new(path: PathBuf) -> Self {
        let prompts = Self::load_from_disk(&path);
        debug!(path = %path.display(), count = prompts.len(), "File prompt store loaded");
        Self {
            path,
            prompts: Arc::new(RwLock::new(prompts)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load_from_disk(path: &Path) -> Vec<StoredPrompt> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(_) => return Vec::new(),
        };

        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match serde_json::from_str::<StoredPrompt>(line) {
                Ok(prompt) => Some(prompt),
                Err(e) => {
                    warn!(error = %e, "Skipping corrupted prompt entry");
                    None
                }
            })
            .collect()
    }

    /// Write every prompt back to disk.
    async fn flush(&self) -> Result<(), StoreError> {
        let prompts = self.prompts.read().await;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Storage(format!("Failed to create store directory: {e}"))
            })?;
        }

        let mut content = String::new();
        for prompt in prompts.iter() {
            let line = serde_json::to_string(prompt).map_err(|e| StoreError::Serialization {
                id: prompt.id.clone(),
                reason: e.to_string(),
            })?;
            content.push_str(&line);
            content.push('\n');
        }

        std::fs::write(&self.path, &content)
            .map_err(|e| StoreError::Storage(format!("Failed to write prompt file: {e}")))?;

        Ok(())
    }
}

#[async_trait]
impl PromptStore for FileStore {
    fn name(&self) -> &str {
        "file"
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
        self.flush().await
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut prompts = self.prompts.write().await;
        let len_before = prompts.len();
        prompts.retain(|p| p.id != id);
        let deleted = prompts.len() < len_before;
        drop(prompts);
        if deleted {
            self.flush().await?;
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptdeck_core::prompt::{
        DEFAULT_USER_ID, PromptDefinition, SectionKey, Sections, VariableDefinition,
    };
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn prompt(title: &str) -> StoredPrompt {
        StoredPrompt::create(
            DEFAULT_USER_ID,
            PromptDefinition {
                title: title.into(),
                sections: Sections::default().with(SectionKey::Task, "Summarize {{doc}}"),
                variable_definitions: vec![VariableDefinition::new("doc").with_default("README")],
                ..PromptDefinition::default()
            },
        )
    }

    fn temp_path() -> PathBuf {
        let tmp = NamedTempFile::new().unwrap();
        let path = tmp.path().to_path_buf();
        drop(tmp); // Close and remove so the store starts empty
        path
    }

    #[tokio::test]
    async fn put_persists_across_reload() {
        let path = temp_path();

        let store = FileStore::new(path.clone());
        let p = prompt("Summarizer");
        let id = p.id.clone();
        store.put(p).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("Summarizer"));
        assert!(content.contains("variableDefinitions"));

        let reopened = FileStore::new(path);
        let found = reopened.get(&id, DEFAULT_USER_ID).await.unwrap().unwrap();
        assert_eq!(found.title, "Summarizer");
        assert_eq!(found.sections.task, "Summarize {{doc}}");
        assert_eq!(found.variable_definitions[0].default_value, "README");
    }

    #[tokio::test]
    async fn delete_persists() {
        let path = temp_path();

        let store = FileStore::new(path.clone());
        let p = prompt("Temporary");
        let id = p.id.clone();
        store.put(p).await.unwrap();
        assert!(store.delete(&id).await.unwrap());

        let reopened = FileStore::new(path);
        assert!(reopened.get(&id, DEFAULT_USER_ID).await.unwrap().is_none());
        assert!(reopened.list(DEFAULT_USER_ID).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_file_starts_empty() {
        let store = FileStore::new(temp_path());
        assert!(store.list(DEFAULT_USER_ID).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn skips_corrupted_lines() {
        let good = serde_json::to_string(&prompt("Valid")).unwrap();
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "{good}").unwrap();
        writeln!(tmp, "this is not json").unwrap();
        writeln!(tmp).unwrap();
        let path = tmp.path().to_path_buf();

        let store = FileStore::new(path);
        let all = store.list(DEFAULT_USER_ID).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].title, "Valid");
    }
}
