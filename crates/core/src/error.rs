//! Error types for the PromptDeck domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error variant. The assembler itself
//! has none: it renders whatever it is given.

use thiserror::Error;

/// Error of the prompt operations that span the editor rules and a store.
#[derive(Debug, Error)]
pub enum Error {
    // --- Storage errors ---
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    // --- Editor errors ---
    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Failed to serialize prompt {id}: {reason}")]
    Serialization { id: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    #[error("Please enter a title")]
    TitleRequired,

    #[error("No variable at index {index} (have {len})")]
    VariableIndexOutOfRange { index: usize, len: usize },

    #[error("Variable name already in use: {name}")]
    DuplicateVariableName { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_displays_correctly() {
        let err = Error::Store(StoreError::Serialization {
            id: "abc".into(),
            reason: "bad utf-8".into(),
        });
        assert!(err.to_string().contains("abc"));
        assert!(err.to_string().contains("bad utf-8"));
    }

    #[test]
    fn editor_error_displays_correctly() {
        let err = Error::from(EditorError::DuplicateVariableName {
            name: "topic".into(),
        });
        assert!(err.to_string().contains("topic"));

        let err = EditorError::VariableIndexOutOfRange { index: 3, len: 1 };
        assert_eq!(err.to_string(), "No variable at index 3 (have 1)");
    }
}
