pub mod config_cmd;
pub mod hints;
pub mod render;
pub mod serve;
pub mod templates;

use promptdeck_core::prompt::PromptDefinition;
use std::path::Path;

/// Parse a `--var name=value` argument. The value may itself contain `=`.
pub fn parse_var(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("variable name is empty in '{s}'"));
    }
    Ok((name.to_string(), value.to_string()))
}

/// Load a prompt definition from a `.toml` or `.json` file.
pub fn load_definition(path: &Path) -> Result<PromptDefinition, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;

    let definition = match path.extension().and_then(|e| e.to_str()) {
        Some("json") => serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?,
        Some("toml") => toml::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {e}", path.display()))?,
        _ => {
            return Err(format!(
                "Unsupported prompt file '{}' (expected .toml or .json)",
                path.display()
            )
            .into());
        }
    };

    tracing::debug!(path = %path.display(), "Prompt definition loaded");
    Ok(definition)
}
