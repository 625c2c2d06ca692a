//! The prompt assembler — the heart of PromptDeck.
//!
//! Turns a structured prompt (five fixed sections plus `{{name}}`
//! variables) into three things the editor renders on every keystroke:
//!
//! 1. **Assembled text**: `[LABEL]\n<text>` blocks joined by blank lines,
//!    with variables substituted literally
//! 2. **Estimate**: character count and a ~4 chars/token heuristic
//! 3. **Hints**: warnings about missing sections and undefined variables,
//!    or a single confirmation when there are none
//!
//! All three are pure functions over immutable borrows. Mutable editing
//! state lives in [`PromptEditorState`], owned by the caller.

pub mod assemble;
pub mod editor;
pub mod fill;
pub mod hints;
pub mod token;

pub use assemble::{assemble, placeholder, variable_token};
pub use editor::{FillField, Preview, PromptEditorState, VariableField};
pub use fill::FillValues;
pub use hints::{Hint, HintKind, compute_hints};
pub use token::{Estimate, estimate};
