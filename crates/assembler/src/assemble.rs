//! Prompt assembly and variable substitution.
//!
//! Substitution is plain literal string replacement of `{{name}}`. There is
//! no template grammar: no escaping, no nesting, no whitespace inside the
//! braces. Tokens with no fill value are left untouched.

use crate::fill::FillValues;
use promptdeck_core::prompt::Sections;

/// The literal token substituted for a variable: `{{name}}`.
pub fn variable_token(name: &str) -> String {
    format!("{{{{{name}}}}}")
}

/// The text left in place of a variable whose fill value is empty.
pub fn placeholder(name: &str) -> String {
    format!("[FILL: {name}]")
}

/// Assemble the prompt text.
///
/// Non-empty sections are emitted in fixed order as `[LABEL]\n<text>` and
/// joined with a blank line. Each fill value (in insertion order) then
/// replaces every `{{name}}`, or `[FILL: name]` when the value is empty.
/// Entries with an empty name are ignored.
///
/// Returns the empty string when no section has text. Never fails.
pub fn assemble(sections: &Sections, fill_values: &FillValues) -> String {
    let mut assembled = sections
        .iter()
        .filter(|(_, text)| !text.is_empty())
        .map(|(key, text)| format!("[{}]\n{}", key.label(), text))
        .collect::<Vec<_>>()
        .join("\n\n");

    for (name, value) in fill_values.iter() {
        if name.is_empty() {
            continue;
        }
        let token = variable_token(name);
        if !assembled.contains(&token) {
            continue;
        }
        assembled = if value.is_empty() {
            assembled.replace(&token, &placeholder(name))
        } else {
            assembled.replace(&token, value)
        };
    }

    assembled
}

#[cfg(test)]
mod tests {
    use super::*;
    use promptdeck_core::prompt::SectionKey;

    fn fills(pairs: &[(&str, &str)]) -> FillValues {
        pairs.iter().copied().collect()
    }

    #[test]
    fn empty_sections_assemble_to_empty_string() {
        assert_eq!(assemble(&Sections::default(), &FillValues::new()), "");
    }

    #[test]
    fn role_and_task_only() {
        let sections = Sections::default()
            .with(SectionKey::Role, "R")
            .with(SectionKey::Task, "T");
        assert_eq!(
            assemble(&sections, &FillValues::new()),
            "[ROLE]\nR\n\n[TASK]\nT"
        );
    }

    #[test]
    fn all_sections_in_fixed_order() {
        // Set in reverse to show insertion order doesn't matter.
        let sections = Sections::default()
            .with(SectionKey::OutputFormat, "O")
            .with(SectionKey::Constraints, "C2")
            .with(SectionKey::Task, "T")
            .with(SectionKey::Context, "C1")
            .with(SectionKey::Role, "R");
        assert_eq!(
            assemble(&sections, &FillValues::new()),
            "[ROLE]\nR\n\n[CONTEXT]\nC1\n\n[TASK]\nT\n\n[CONSTRAINTS]\nC2\n\n[OUTPUT FORMAT]\nO"
        );
    }

    #[test]
    fn substitutes_fill_value() {
        let sections = Sections::default().with(SectionKey::Task, "Hello {{name}}");
        assert_eq!(
            assemble(&sections, &fills(&[("name", "World")])),
            "[TASK]\nHello World"
        );
    }

    #[test]
    fn empty_or_missing_value_leaves_placeholder_or_token() {
        let sections = Sections::default().with(SectionKey::Task, "Hello {{name}}");
        assert_eq!(
            assemble(&sections, &fills(&[("name", "")])),
            "[TASK]\nHello [FILL: name]"
        );
        // No entry at all: token is left as literal text.
        assert_eq!(
            assemble(&sections, &FillValues::new()),
            "[TASK]\nHello {{name}}"
        );
    }

    #[test]
    fn replaces_every_occurrence_across_sections() {
        let sections = Sections::default()
            .with(SectionKey::Role, "Agent for {{co}}")
            .with(SectionKey::Context, "{{co}} sells {{co}} widgets");
        assert_eq!(
            assemble(&sections, &fills(&[("co", "Acme")])),
            "[ROLE]\nAgent for Acme\n\n[CONTEXT]\nAcme sells Acme widgets"
        );
    }

    #[test]
    fn names_with_regex_metacharacters_match_literally() {
        let sections = Sections::default().with(SectionKey::Task, "Use {{a.b*}} and {{a-b}}");
        assert_eq!(
            assemble(&sections, &fills(&[("a.b*", "X"), ("a-b", "Y")])),
            "[TASK]\nUse X and Y"
        );
    }

    #[test]
    fn empty_names_are_ignored() {
        let sections = Sections::default().with(SectionKey::Task, "keep {{}}");
        assert_eq!(assemble(&sections, &fills(&[("", "x")])), "[TASK]\nkeep {{}}");
    }

    #[test]
    fn earlier_value_can_introduce_later_token() {
        let sections = Sections::default().with(SectionKey::Task, "{{a}}");
        assert_eq!(
            assemble(&sections, &fills(&[("a", "{{b}}"), ("b", "done")])),
            "[TASK]\ndone"
        );
        assert_eq!(
            assemble(&sections, &fills(&[("b", "done"), ("a", "{{b}}")])),
            "[TASK]\n{{b}}"
        );
    }

    #[test]
    fn assembly_is_idempotent() {
        let sections = Sections::default()
            .with(SectionKey::Role, "R {{x}}")
            .with(SectionKey::Task, "T");
        let values = fills(&[("x", "1")]);
        assert_eq!(assemble(&sections, &values), assemble(&sections, &values));
    }

    #[test]
    fn token_and_placeholder_shapes() {
        assert_eq!(variable_token("topic"), "{{topic}}");
        assert_eq!(placeholder("topic"), "[FILL: topic]");
    }
}
