//! `promptdeck config` — Configuration management commands.

use promptdeck_config::{AppConfig, StoreBackend};

pub async fn validate() -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Validating configuration...");

    match AppConfig::load() {
        Ok(config) => {
            println!("   ✅ Config parsed successfully");

            let mut warnings = Vec::new();

            if config.gateway.host == "0.0.0.0" {
                warnings.push("Gateway bound to 0.0.0.0 — reachable from other machines");
            }

            if config.store.kind()? == StoreBackend::Memory {
                warnings.push("Memory store selected — saved prompts are lost on restart");
            }

            if warnings.is_empty() {
                println!("   ✅ All checks passed");
            } else {
                println!();
                for w in &warnings {
                    println!("   ⚠️  {w}");
                }
            }

            println!();
            println!("   Gateway:   {}", config.gateway.bind_addr());
            println!("   Body max:  {} bytes", config.gateway.max_body_bytes);
            println!("   Store:     {}", config.store.backend);
            if config.store.kind()? == StoreBackend::File {
                println!("   File:      {}", config.store.resolved_path().display());
            }
        }
        Err(e) => {
            println!("   ❌ Config error: {e}");
            return Err(e.into());
        }
    }

    Ok(())
}

pub async fn show() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

pub async fn path() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", AppConfig::config_path().display());
    Ok(())
}
