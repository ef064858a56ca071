//! Config command handlers

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::cli::ConfigCommands;
use crate::config::{CONFIG_TEMPLATE, Config};

pub fn handle_config(command: ConfigCommands, config_path: Option<&Path>) -> Result<()> {
    match command {
        ConfigCommands::Init { force } => init(config_path, force),
        ConfigCommands::Show => show(config_path),
        ConfigCommands::Path => {
            println!("{}", Config::resolve_path(config_path)?.display());
            Ok(())
        }
    }
}

fn init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = Config::resolve_path(config_path)?;
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }
    fs::write(&path, CONFIG_TEMPLATE)
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    println!("Wrote starter config to: {}", path.display());
    println!("Fill in base_url, the sheet id and your [clients.*] entries.");
    Ok(())
}

fn show(config_path: Option<&Path>) -> Result<()> {
    let config = Config::load(config_path)?;
    let rendered = toml::to_string_pretty(&config.redacted())
        .context("Failed to render the configuration")?;
    print!("{}", rendered);
    Ok(())
}
