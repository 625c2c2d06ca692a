//! PromptDeck CLI — the main entry point.
//!
//! Commands:
//! - `render`     — Assemble a prompt file, with optional variable overrides
//! - `hints`      — Check a prompt file for missing sections and variables
//! - `templates`  — Browse the built-in templates
//! - `serve`      — Start the HTTP gateway
//! - `config`     — Inspect and validate configuration

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(
    name = "promptdeck",
    about = "PromptDeck — structured prompt assembly",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a prompt file (.toml or .json) and print the text
    Render {
        /// Prompt definition file
        file: PathBuf,

        /// Fill a variable, overriding its default (repeatable)
        #[arg(long = "var", value_name = "NAME=VALUE", value_parser = commands::parse_var)]
        vars: Vec<(String, String)>,

        /// Print the full preview as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print quality hints; exits non-zero when any warning is raised
    Hints {
        /// Prompt definition file
        file: PathBuf,
    },

    /// Browse the built-in templates
    Templates {
        #[command(subcommand)]
        action: TemplateAction,
    },

    /// Start the HTTP gateway server
    Serve {
        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum TemplateAction {
    /// List templates, optionally only one category
    List {
        /// Exact category name, e.g. "Agent"
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show one template's sections and variables
    Show {
        id: String,
        /// Print the assembled text with default fill values
        #[arg(long)]
        render: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Load and validate the config file
    Validate,
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render { file, vars, json } => commands::render::run(&file, vars, json).await?,
        Commands::Hints { file } => commands::hints::run(&file).await?,
        Commands::Templates { action } => match action {
            TemplateAction::List { category } => {
                commands::templates::list(category.as_deref()).await?
            }
            TemplateAction::Show { id, render } => commands::templates::show(&id, render).await?,
        },
        Commands::Serve { port } => commands::serve::run(port).await?,
        Commands::Config { action } => match action {
            ConfigAction::Validate => commands::config_cmd::validate().await?,
            ConfigAction::Show => commands::config_cmd::show().await?,
            ConfigAction::Path => commands::config_cmd::path().await?,
        },
    }

    Ok(())
}
