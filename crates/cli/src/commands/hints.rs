//! `promptdeck hints` — Check a prompt file.

use promptdeck_assembler::compute_hints;
use std::path::Path;

pub async fn run(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let definition = super::load_definition(file)?;
    let hints = compute_hints(&definition.sections.trimmed(), &definition.variable_definitions);

    for hint in &hints {
        println!("{hint}");
    }

    let warnings = hints.iter().filter(|h| h.is_warning()).count();
    if warnings > 0 {
        return Err(format!("{warnings} warning(s) in {}", file.display()).into());
    }

    Ok(())
}
