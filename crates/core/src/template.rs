//! Templates — read-only prompt definitions used as starting points.

use crate::prompt::{PromptDefinition, Sections, VariableDefinition};
use serde::{Deserialize, Serialize};

/// Suffix appended to a template's title when it is copied into the editor.
pub const COPY_SUFFIX: &str = " (copy)";

/// A predefined prompt. Never mutated; the editor works on a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    pub sections: Sections,
    pub variable_definitions: Vec<VariableDefinition>,
}

impl Template {
    /// The definition a new prompt starts from, titled `"<title> (copy)"`.
    pub fn to_definition(&self) -> PromptDefinition {
        PromptDefinition {
            title: format!("{}{COPY_SUFFIX}", self.title),
            category: self.category.clone(),
            tags: String::new(),
            sections: self.sections.clone(),
            variable_definitions: self.variable_definitions.clone(),
        }
    }
}
