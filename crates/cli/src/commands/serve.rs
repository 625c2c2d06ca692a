//! `promptdeck serve` — Start the HTTP API server.

use promptdeck_config::AppConfig;

pub async fn run(port_override: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    if let Some(port) = port_override {
        config.gateway.port = port;
    }
    config.validate()?;

    println!("🗂️  PromptDeck Gateway");
    println!("   Listening: http://{}", config.gateway.bind_addr());
    println!("   Store:     {}", config.store.backend);

    promptdeck_gateway::start(config).await?;

    Ok(())
}
