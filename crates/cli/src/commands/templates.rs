//! `promptdeck templates` — Browse the built-in templates.

use promptdeck_assembler::PromptEditorState;
use promptdeck_core::prompt::SectionKey;

pub async fn list(category: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    println!("📚 Built-in Templates");
    println!("=====================");
    print!("{}", listing(category));
    Ok(())
}

fn listing(category: Option<&str>) -> String {
    let templates = promptdeck_templates::by_category(category);
    if templates.is_empty() {
        return format!("  No templates in category {:?}\n", category.unwrap_or_default());
    }

    let mut out = String::new();
    for tpl in templates {
        out.push_str(&format!(
            "  {:<6} [{:<8}] {}\n",
            tpl.id, tpl.category, tpl.title
        ));
        out.push_str(&format!("         {}\n", tpl.description));
    }
    out
}

pub async fn show(id: &str, render: bool) -> Result<(), Box<dyn std::error::Error>> {
    let tpl = promptdeck_templates::find(id).ok_or_else(|| format!("Template not found: {id}"))?;

    if render {
        let state = PromptEditorState::from_template(tpl);
        println!("{}", state.assembled());
        return Ok(());
    }

    println!("📝 {} ({})", tpl.title, tpl.category);
    println!("   {}", tpl.description);
    for key in SectionKey::ALL {
        println!();
        println!("  [{}]", key.label());
        for line in tpl.sections.get(key).lines() {
            println!("    {line}");
        }
    }

    if !tpl.variable_definitions.is_empty() {
        println!();
        println!("  Variables:");
        for var in &tpl.variable_definitions {
            let default = if var.default_value.is_empty() {
                "(empty)"
            } else {
                var.default_value.as_str()
            };
            println!("    {{{{{}}}}} = {default}  — {}", var.name, var.description);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_filters_by_category() {
        let all = listing(None);
        assert_eq!(all.lines().count(), 16);

        let agents = listing(Some("Agent"));
        assert!(agents.contains("tpl-1"));
        assert!(agents.contains("tpl-2"));
        assert!(!agents.contains("tpl-3"));
        assert_eq!(agents.lines().count(), 4);
    }

    #[test]
    fn listing_unknown_category_says_so() {
        assert_eq!(
            listing(Some("Poetry")),
            "  No templates in category \"Poetry\"\n"
        );
    }
}
