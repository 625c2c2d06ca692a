//! Prompt domain types.
//!
//! A structured prompt is five fixed sections plus a list of `{{name}}`
//! variables. The wire shape (camelCase, `outputFormat`, `variableDefinitions`)
//! is the one the editor saves and the HTTP API serves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::template::COPY_SUFFIX;

/// Owner of every stored prompt. There is a single implicit user.
pub const DEFAULT_USER_ID: &str = "default";

/// One of the five fixed prompt sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SectionKey {
    Role,
    Context,
    Task,
    Constraints,
    OutputFormat,
}

impl SectionKey {
    /// All keys, in assembly order.
    pub const ALL: [SectionKey; 5] = [
        SectionKey::Role,
        SectionKey::Context,
        SectionKey::Task,
        SectionKey::Constraints,
        SectionKey::OutputFormat,
    ];

    /// The bracketed header used in assembled text, e.g. `OUTPUT FORMAT`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Role => "ROLE",
            Self::Context => "CONTEXT",
            Self::Task => "TASK",
            Self::Constraints => "CONSTRAINTS",
            Self::OutputFormat => "OUTPUT FORMAT",
        }
    }

    /// The wire name of the key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Role => "role",
            Self::Context => "context",
            Self::Task => "task",
            Self::Constraints => "constraints",
            Self::OutputFormat => "outputFormat",
        }
    }
}

impl std::fmt::Display for SectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SectionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "role" => Ok(Self::Role),
            "context" => Ok(Self::Context),
            "task" => Ok(Self::Task),
            "constraints" => Ok(Self::Constraints),
            "outputFormat" | "output_format" | "output" => Ok(Self::OutputFormat),
            other => Err(format!("unknown section: {other}")),
        }
    }
}

/// Section texts keyed by [`SectionKey`]. A missing or `null` section is
/// the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sections {
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub context: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub task: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub constraints: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub output_format: String,
}

impl Sections {
    pub fn get(&self, key: SectionKey) -> &str {
        match key {
            SectionKey::Role => &self.role,
            SectionKey::Context => &self.context,
            SectionKey::Task => &self.task,
            SectionKey::Constraints => &self.constraints,
            SectionKey::OutputFormat => &self.output_format,
        }
    }

    pub fn get_mut(&mut self, key: SectionKey) -> &mut String {
        match key {
            SectionKey::Role => &mut self.role,
            SectionKey::Context => &mut self.context,
            SectionKey::Task => &mut self.task,
            SectionKey::Constraints => &mut self.constraints,
            SectionKey::OutputFormat => &mut self.output_format,
        }
    }

    pub fn set(&mut self, key: SectionKey, text: impl Into<String>) {
        *self.get_mut(key) = text.into();
    }

    /// Builder-style setter.
    pub fn with(mut self, key: SectionKey, text: impl Into<String>) -> Self {
        self.set(key, text);
        self
    }

    /// Iterate `(key, text)` pairs in assembly order, empty ones included.
    pub fn iter(&self) -> impl Iterator<Item = (SectionKey, &str)> {
        SectionKey::ALL.into_iter().map(move |k| (k, self.get(k)))
    }

    /// A copy with every section trimmed of surrounding whitespace.
    pub fn trimmed(&self) -> Self {
        let mut out = Self::default();
        for (key, text) in self.iter() {
            out.set(key, text.trim());
        }
        out
    }

    /// True when no section has any text.
    pub fn is_empty(&self) -> bool {
        self.iter().all(|(_, text)| text.is_empty())
    }
}

/// Explicit `null` reads the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A declared `{{name}}` variable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDefinition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub default_value: String,
}

impl VariableDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }
}

/// An editable prompt: what the editor saves and what prompt files contain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptDefinition {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sections: Sections,
    #[serde(default, deserialize_with = "null_as_default")]
    pub variable_definitions: Vec<VariableDefinition>,
}

/// Partial update of a stored prompt. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Sections>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_definitions: Option<Vec<VariableDefinition>>,
}

/// A persisted prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPrompt {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub sections: Sections,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub variable_definitions: Vec<VariableDefinition>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StoredPrompt {
    /// Create a new stored prompt with a fresh id. The title is trimmed;
    /// callers reject blank titles before getting here.
    pub fn create(user_id: impl Into<String>, definition: PromptDefinition) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            title: definition.title.trim().to_string(),
            category: definition.category,
            sections: definition.sections,
            tags: definition.tags,
            variable_definitions: definition.variable_definitions,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update and refresh `updated_at`.
    pub fn apply(&mut self, update: PromptUpdate) {
        if let Some(title) = update.title {
            self.title = title.trim().to_string();
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(sections) = update.sections {
            self.sections = sections;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(vars) = update.variable_definitions {
            self.variable_definitions = vars;
        }
        self.updated_at = Utc::now();
    }

    /// The editable part of this prompt.
    pub fn definition(&self) -> PromptDefinition {
        PromptDefinition {
            title: self.title.clone(),
            category: self.category.clone(),
            tags: self.tags.clone(),
            sections: self.sections.clone(),
            variable_definitions: self.variable_definitions.clone(),
        }
    }

    /// The definition of a copy of this prompt, titled with [`COPY_SUFFIX`].
    pub fn duplicate_definition(&self) -> PromptDefinition {
        PromptDefinition {
            title: format!("{}{COPY_SUFFIX}", self.title),
            ..self.definition()
        }
    }
}

/// Narrows a prompt list by free text and category.
///
/// `q` is matched case-insensitively as a substring of the title, tags or
/// category; `category` must match exactly. Blank values match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PromptFilter {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl PromptFilter {
    pub fn matches(&self, prompt: &StoredPrompt) -> bool {
        match self.category.as_deref() {
            Some(category) if !category.is_empty() && prompt.category != category => {
                return false;
            }
            _ => {}
        }

        let needle = match self.q.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => q.to_lowercase(),
            _ => return true,
        };
        [&prompt.title, &prompt.tags, &prompt.category]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Keep the prompts that match, preserving order.
    pub fn apply(&self, prompts: Vec<StoredPrompt>) -> Vec<StoredPrompt> {
        prompts.into_iter().filter(|p| self.matches(p)).collect()
    }
}
