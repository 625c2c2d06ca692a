//! `promptdeck render` — Assemble a prompt file.

use promptdeck_assembler::{Preview, PromptEditorState};
use std::path::Path;

pub async fn run(
    file: &Path,
    vars: Vec<(String, String)>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let definition = super::load_definition(file)?;
    let preview = render(PromptEditorState::from_definition(definition), vars);

    if json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    if preview.is_blank() {
        eprintln!("⚠️  Nothing to render — every section is empty");
        return Ok(());
    }

    println!("{}", preview.text);
    eprintln!("{}", preview.estimate);
    Ok(())
}

/// Apply overrides on top of the seeded defaults and preview.
fn render(mut state: PromptEditorState, vars: Vec<(String, String)>) -> Preview {
    for (name, value) in vars {
        state.fill(name, value);
    }
    state.preview()
}
