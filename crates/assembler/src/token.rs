//! Size estimation for assembled prompts.
//!
//! Uses a character-based heuristic: 1 token ≈ 4 characters, rounded up.
//! Not a tokenizer; the divisor and rounding are fixed so counters agree
//! across the editor, the API and the CLI.

use serde::{Deserialize, Serialize};

/// Characters per estimated token.
pub const CHARS_PER_TOKEN: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    /// Length in UTF-16 code units (what a browser text field reports).
    pub char_count: usize,
    pub estimated_tokens: usize,
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "~{} chars · ~{} tokens",
            self.char_count, self.estimated_tokens
        )
    }
}

/// Estimate the size of a piece of text.
pub fn estimate(text: &str) -> Estimate {
    let char_count = text.encode_utf16().count();
    Estimate {
        char_count,
        estimated_tokens: char_count.div_ceil(CHARS_PER_TOKEN),
    }
}
