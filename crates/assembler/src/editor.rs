//! Editor state — the mutable side of prompt editing.
//!
//! `PromptEditorState` holds what the user is working on: title, category,
//! tags, section texts, the variable list and the current fill values. The
//! caller owns it and mutates it directly; [`preview`](PromptEditorState::preview)
//! runs the pure assembler functions over a snapshot.
//!
//! Variable names must be unique among non-empty names. Renaming a variable
//! onto a name another variable already has is rejected and leaves the state
//! untouched. Empty names are exempt, since a freshly added row starts empty.

use crate::assemble::assemble;
use crate::fill::FillValues;
use crate::hints::{Hint, compute_hints};
use crate::token::{Estimate, estimate};
use promptdeck_core::error::EditorError;
use promptdeck_core::prompt::{
    PromptDefinition, SectionKey, Sections, StoredPrompt, VariableDefinition,
};
use promptdeck_core::template::Template;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which field of a variable an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VariableField {
    Name,
    Description,
    DefaultValue,
}

/// A fill-value input for one declared variable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FillField {
    pub name: String,
    pub description: String,
    pub value: String,
}

impl FillField {
    /// Placeholder text for the input: the description, or the name.
    pub fn placeholder(&self) -> &str {
        if self.description.is_empty() {
            &self.name
        } else {
            &self.description
        }
    }
}

/// Everything the editor renders after an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preview {
    pub text: String,
    #[serde(flatten)]
    pub estimate: Estimate,
    pub hints: Vec<Hint>,
    pub variables: Vec<FillField>,
}

impl Preview {
    /// True when there is nothing worth showing or copying.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptEditorState {
    pub title: String,
    pub category: String,
    pub tags: String,
    pub sections: Sections,
    variables: Vec<VariableDefinition>,
    fill_values: FillValues,
}

impl PromptEditorState {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a definition. Fill values are seeded from each variable's default.
    pub fn from_definition(definition: PromptDefinition) -> Self {
        let fill_values = FillValues::from_definitions(&definition.variable_definitions);
        Self {
            title: definition.title,
            category: definition.category,
            tags: definition.tags,
            sections: definition.sections,
            variables: definition.variable_definitions,
            fill_values,
        }
    }

    /// Edit an existing stored prompt.
    pub fn from_prompt(prompt: &StoredPrompt) -> Self {
        Self::from_definition(prompt.definition())
    }

    /// Start a new prompt from a template; the title gets a " (copy)" suffix.
    pub fn from_template(template: &Template) -> Self {
        Self::from_definition(template.to_definition())
    }

    pub fn variables(&self) -> &[VariableDefinition] {
        &self.variables
    }

    pub fn fill_values(&self) -> &FillValues {
        &self.fill_values
    }

    /// Replace all fill values at once.
    pub fn set_fill_values(&mut self, values: FillValues) {
        self.fill_values = values;
    }

    pub fn set_section(&mut self, key: SectionKey, text: impl Into<String>) {
        self.sections.set(key, text);
    }

    /// Set the current value for a variable.
    pub fn fill(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fill_values.set(name, value);
    }

    /// Append an empty variable row.
    pub fn add_variable(&mut self) {
        self.variables.push(VariableDefinition::default());
    }

    /// Edit one field of the variable at `index`.
    ///
    /// Renaming moves the fill value from the old name to the new one. A
    /// name that equals another variable's once both are trimmed is taken.
    pub fn update_variable(
        &mut self,
        index: usize,
        field: VariableField,
        value: impl Into<String>,
    ) -> Result<(), EditorError> {
        let value = value.into();
        let len = self.variables.len();
        if index >= len {
            return Err(EditorError::VariableIndexOutOfRange { index, len });
        }

        match field {
            VariableField::Name => {
                let wanted = value.trim();
                let taken = !wanted.is_empty()
                    && self
                        .variables
                        .iter()
                        .enumerate()
                        .any(|(i, v)| i != index && v.name.trim() == wanted);
                if taken {
                    return Err(EditorError::DuplicateVariableName { name: value });
                }
                let old = std::mem::replace(&mut self.variables[index].name, value.clone());
                debug!(index, old = %old, new = %value, "Variable renamed");
                self.fill_values.rename(&old, value);
            }
            VariableField::Description => self.variables[index].description = value,
            VariableField::DefaultValue => self.variables[index].default_value = value,
        }
        Ok(())
    }

    /// Remove the variable at `index` together with its fill value.
    pub fn remove_variable(&mut self, index: usize) -> Result<VariableDefinition, EditorError> {
        let len = self.variables.len();
        if index >= len {
            return Err(EditorError::VariableIndexOutOfRange { index, len });
        }
        let removed = self.variables.remove(index);
        if !removed.name.is_empty() {
            self.fill_values.remove(&removed.name);
        }
        debug!(index, name = %removed.name, "Variable removed");
        Ok(removed)
    }

    /// The sections as the form reports them: each trimmed.
    pub fn sections_snapshot(&self) -> Sections {
        self.sections.trimmed()
    }

    /// Assemble the current prompt text.
    pub fn assembled(&self) -> String {
        assemble(&self.sections_snapshot(), &self.fill_values)
    }

    /// Recompute text, size estimate, hints and fill inputs from scratch.
    pub fn preview(&self) -> Preview {
        let sections = self.sections_snapshot();
        let text = assemble(&sections, &self.fill_values);
        let estimate = estimate(&text);
        let hints = compute_hints(&sections, &self.variables);
        let variables = self
            .variables
            .iter()
            .filter(|v| !v.name.trim().is_empty())
            .map(|v| FillField {
                name: v.name.clone(),
                description: v.description.clone(),
                value: self.fill_values.get(&v.name).unwrap_or_default().to_string(),
            })
            .collect();

        Preview {
            text,
            estimate,
            hints,
            variables,
        }
    }

    /// The text to hand to the clipboard, or `None` when there is nothing yet.
    pub fn copy_text(&self) -> Option<String> {
        let text = self.assembled();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    /// Build the save payload.
    ///
    /// Current fill values become the saved defaults. Variables with blank
    /// names are dropped and the rest have their names trimmed.
    pub fn save_payload(&self) -> Result<PromptDefinition, EditorError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(EditorError::TitleRequired);
        }

        let variable_definitions = self
            .variables
            .iter()
            .filter(|v| !v.name.trim().is_empty())
            .map(|v| VariableDefinition {
                name: v.name.trim().to_string(),
                description: v.description.clone(),
                default_value: self.fill_values.get(&v.name).unwrap_or_default().to_string(),
            })
            .collect();

        Ok(PromptDefinition {
            title: title.to_string(),
            category: self.category.clone(),
            tags: self.tags.trim().to_string(),
            sections: self.sections_snapshot(),
            variable_definitions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::HintKind;

    fn greeting() -> PromptEditorState {
        PromptEditorState::from_definition(PromptDefinition {
            title: "Greeter".into(),
            sections: Sections::default().with(SectionKey::Task, "Hello {{name}}"),
            variable_definitions: vec![VariableDefinition::new("name").with_default("World")],
            ..PromptDefinition::default()
        })
    }

    #[test]
    fn empty_form_previews_blank() {
        let preview = PromptEditorState::new().preview();
        assert_eq!(preview.text, "");
        assert_eq!(preview.estimate.char_count, 0);
        assert!(preview.is_blank());
        assert_eq!(preview.hints.len(), 4);
        assert!(PromptEditorState::new().copy_text().is_none());
    }

    #[test]
    fn load_seeds_fill_values_from_defaults() {
        let state = greeting();
        assert_eq!(state.fill_values().get("name"), Some("World"));
        assert_eq!(state.assembled(), "[TASK]\nHello World");
    }

    #[test]
    fn fill_overrides_default() {
        let mut state = greeting();
        state.fill("name", "Ferris");
        assert_eq!(state.assembled(), "[TASK]\nHello Ferris");
        state.fill("name", "");
        assert_eq!(state.assembled(), "[TASK]\nHello [FILL: name]");
    }

    #[test]
    fn rename_moves_fill_value_and_substitution() {
        let mut state = greeting();
        state.set_section(SectionKey::Task, "Hello {{who}}");
        state
            .update_variable(0, VariableField::Name, "who")
            .unwrap();
        assert_eq!(state.variables()[0].name, "who");
        assert_eq!(state.fill_values().get("who"), Some("World"));
        assert!(!state.fill_values().contains("name"));
        assert_eq!(state.assembled(), "[TASK]\nHello World");
    }

    #[test]
    fn rename_to_taken_name_is_rejected() {
        let mut state = greeting();
        state.add_variable();
        state.update_variable(1, VariableField::Name, "other").unwrap();
        let before = state.clone();

        let err = state
            .update_variable(1, VariableField::Name, "name")
            .unwrap_err();
        assert_eq!(
            err,
            EditorError::DuplicateVariableName {
                name: "name".into()
            }
        );
        assert_eq!(state, before);
    }

    #[test]
    fn rename_to_taken_name_ignores_surrounding_whitespace() {
        let mut state = greeting();
        state.add_variable();

        let err = state
            .update_variable(1, VariableField::Name, " name ")
            .unwrap_err();
        assert_eq!(
            err,
            EditorError::DuplicateVariableName {
                name: " name ".into()
            }
        );

        state.update_variable(1, VariableField::Name, "other").unwrap();
        assert!(
            state
                .update_variable(0, VariableField::Name, "other  ")
                .is_err()
        );

        let names: Vec<_> = state
            .save_payload()
            .unwrap()
            .variable_definitions
            .into_iter()
            .map(|v| v.name)
            .collect();
        assert_eq!(names, vec!["name", "other"]);
    }

    #[test]
    fn empty_names_may_repeat() {
        let mut state = PromptEditorState::new();
        state.add_variable();
        state.add_variable();
        assert!(state.update_variable(1, VariableField::Name, "").is_ok());
        assert_eq!(state.variables().len(), 2);
    }

    #[test]
    fn typing_a_name_keeps_partial_fill_value() {
        let mut state = PromptEditorState::new();
        state.set_section(SectionKey::Task, "Write about {{topic}}");
        state.add_variable();
        state.update_variable(0, VariableField::Name, "t").unwrap();
        state.fill("t", "Rust");
        state.update_variable(0, VariableField::Name, "to").unwrap();
        state.update_variable(0, VariableField::Name, "topic").unwrap();
        assert_eq!(state.assembled(), "[TASK]\nWrite about Rust");
    }

    #[test]
    fn update_out_of_range_is_an_error() {
        let mut state = PromptEditorState::new();
        assert_eq!(
            state.update_variable(0, VariableField::Description, "x"),
            Err(EditorError::VariableIndexOutOfRange { index: 0, len: 0 })
        );
        assert!(state.remove_variable(2).is_err());
    }

    #[test]
    fn remove_drops_fill_value() {
        let mut state = greeting();
        let removed = state.remove_variable(0).unwrap();
        assert_eq!(removed.name, "name");
        assert!(state.fill_values().is_empty());
        assert_eq!(state.assembled(), "[TASK]\nHello {{name}}");
        let hints = state.preview().hints;
        assert!(hints.iter().any(|h| h.text.contains("{{name}}")));
    }

    #[test]
    fn description_edit_leaves_fill_values_alone() {
        let mut state = greeting();
        state
            .update_variable(0, VariableField::Description, "Who to greet")
            .unwrap();
        assert_eq!(state.variables()[0].description, "Who to greet");
        assert_eq!(state.fill_values().get("name"), Some("World"));
    }

    #[test]
    fn preview_trims_sections_and_lists_fill_inputs() {
        let mut state = greeting();
        state.set_section(SectionKey::Role, "  Friendly bot \n");
        state.add_variable();
        let preview = state.preview();
        assert_eq!(preview.text, "[ROLE]\nFriendly bot\n\n[TASK]\nHello World");
        assert_eq!(preview.variables.len(), 1);
        assert_eq!(preview.variables[0].value, "World");
        assert_eq!(preview.variables[0].placeholder(), "name");
        assert_eq!(preview.estimate, estimate(&preview.text));
    }

    #[test]
    fn whitespace_only_sections_are_skipped() {
        let mut state = PromptEditorState::new();
        state.set_section(SectionKey::Context, "   ");
        assert!(state.preview().is_blank());
        assert!(state.copy_text().is_none());
    }

    #[test]
    fn complete_prompt_previews_ok() {
        let mut state = greeting();
        state.set_section(SectionKey::Role, "R");
        state.set_section(SectionKey::Constraints, "C");
        state.set_section(SectionKey::OutputFormat, "O");
        let hints = state.preview().hints;
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].kind, HintKind::Ok);
    }

    #[test]
    fn save_requires_title() {
        let mut state = greeting();
        state.title = "   ".into();
        assert_eq!(state.save_payload(), Err(EditorError::TitleRequired));
    }

    #[test]
    fn save_bakes_fill_values_into_defaults() {
        let mut state = greeting();
        state.title = "  Greeter v2 ".into();
        state.tags = " demo ".into();
        state.fill("name", "Ferris");
        state.add_variable();
        state.add_variable();
        state.update_variable(2, VariableField::Name, " padded ").unwrap();
        state.fill(" padded ", "kept");

        let payload = state.save_payload().unwrap();
        assert_eq!(payload.title, "Greeter v2");
        assert_eq!(payload.tags, "demo");
        assert_eq!(payload.variable_definitions.len(), 2);
        assert_eq!(payload.variable_definitions[0].default_value, "Ferris");
        assert_eq!(payload.variable_definitions[1].name, "padded");
        assert_eq!(payload.variable_definitions[1].default_value, "kept");
    }

    #[test]
    fn template_copy_round_trips_through_editor() {
        let template = Template {
            id: "tpl-t".into(),
            title: "Support".into(),
            category: "Agent".into(),
            description: "d".into(),
            sections: Sections::default().with(SectionKey::Role, "Agent for {{company}}"),
            variable_definitions: vec![VariableDefinition::new("company").with_default("Acme")],
        };
        let state = PromptEditorState::from_template(&template);
        assert_eq!(state.title, "Support (copy)");
        assert_eq!(state.assembled(), "[ROLE]\nAgent for Acme");
        // The template itself is untouched.
        assert_eq!(template.title, "Support");
    }
}
