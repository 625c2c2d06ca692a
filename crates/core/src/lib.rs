//! # PromptDeck Core
//!
//! Domain types, traits, and error definitions for PromptDeck.
//! This crate has **zero framework dependencies**: it defines the prompt
//! model that the assembler, store, gateway and CLI crates build on.
//!
//! - [`prompt`]: sections, variables, prompt definitions and stored prompts
//! - [`template`]: read-only starting points for new prompts
//! - [`store`]: the `PromptStore` persistence trait

pub mod error;
pub mod prompt;
pub mod store;
pub mod template;

// Re-export key types at crate root for ergonomics
pub use error::{EditorError, Error, Result, StoreError};
pub use prompt::{
    DEFAULT_USER_ID, PromptDefinition, PromptFilter, PromptUpdate, SectionKey, Sections, StoredPrompt,
    VariableDefinition,
};
pub use store::PromptStore;
pub use template::Template;
