//! Quality hints for a prompt definition.
//!
//! Each rule is checked on every call, independently of the others, and
//! contributes at most one warning. Warnings come out in rule order; the
//! single `ok` hint appears only when no rule fired.
//!
//! Variable usage is detected with the pattern `\{\{(\w+)\}\}` (ASCII word
//! characters only). A declared variable named e.g. `my-var` is substituted
//! by [`assemble`](crate::assemble) but never seen as used here.

use promptdeck_core::prompt::{Sections, VariableDefinition};
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static VARIABLE_USE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").expect("variable pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HintKind {
    Warn,
    Ok,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    #[serde(rename = "type")]
    pub kind: HintKind,
    pub text: String,
}

impl Hint {
    fn warn(text: impl Into<String>) -> Self {
        Self {
            kind: HintKind::Warn,
            text: text.into(),
        }
    }

    fn ok(text: impl Into<String>) -> Self {
        Self {
            kind: HintKind::Ok,
            text: text.into(),
        }
    }

    pub fn is_warning(&self) -> bool {
        self.kind == HintKind::Warn
    }
}

impl std::fmt::Display for Hint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            HintKind::Warn => write!(f, "⚠ {}", self.text),
            HintKind::Ok => write!(f, "✓ {}", self.text),
        }
    }
}

/// Compute hints from the section texts and declared variables.
///
/// Fill values play no part: a variable counts as defined as soon as it is
/// declared with a non-empty name.
///
/// The undefined-variable hint lists each name once, and its "Variable" or
/// "Variables" wording follows that deduplicated count, not the number of
/// occurrences: `{{x}}` used three times reads "Variable used but not
/// defined: {{x}}".
pub fn compute_hints(sections: &Sections, variables: &[VariableDefinition]) -> Vec<Hint> {
    let mut hints = Vec::new();

    if sections.role.is_empty() {
        hints.push(Hint::warn("Add a Role to define who or what this agent is."));
    }
    if sections.task.is_empty() {
        hints.push(Hint::warn(
            "Add a Task section — this is the most important part.",
        ));
    }
    if sections.context.is_empty() && sections.constraints.is_empty() {
        hints.push(Hint::warn(
            "Consider adding Context or Constraints for better results.",
        ));
    }
    if sections.output_format.is_empty() {
        hints.push(Hint::warn(
            "Add an Output Format to improve response consistency.",
        ));
    }

    let undefined = undefined_variables(sections, variables);
    if !undefined.is_empty() {
        let plural = if undefined.len() > 1 { "s" } else { "" };
        let listed = undefined
            .iter()
            .map(|name| crate::assemble::variable_token(name))
            .collect::<Vec<_>>()
            .join(", ");
        hints.push(Hint::warn(format!(
            "Variable{plural} used but not defined: {listed}"
        )));
    }

    if hints.is_empty() {
        hints.push(Hint::ok("Prompt looks good! All key sections are filled."));
    }

    hints
}

/// Names referenced as `{{name}}` in any section but not declared,
/// deduplicated, in order of first use.
pub fn undefined_variables(sections: &Sections, variables: &[VariableDefinition]) -> Vec<String> {
    let all_text = sections
        .iter()
        .map(|(_, text)| text)
        .collect::<Vec<_>>()
        .join(" ");

    let mut undefined: Vec<String> = Vec::new();
    for caps in VARIABLE_USE.captures_iter(&all_text) {
        let name = &caps[1];
        let declared = variables.iter().any(|v| !v.name.is_empty() && v.name == name);
        if !declared && !undefined.iter().any(|u| u == name) {
            undefined.push(name.to_string());
        }
    }
    undefined
}
