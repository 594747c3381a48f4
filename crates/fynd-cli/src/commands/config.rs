use anyhow::{Context, Result};
use fynd_core::config::FyndConfig;
use fynd_infrastructure::ConfigService;
use std::path::Path;

pub fn load(path: Option<&Path>) -> FyndConfig {
    match path {
        Some(path) => ConfigService::with_path(path).get_config(),
        None => ConfigService::new().get_config(),
    }
}

pub fn show(path: Option<&Path>) -> Result<()> {
    let config = load(path);
    let rendered = toml::to_string_pretty(&config).context("Failed to render config")?;
    println!("{}", rendered);
    Ok(())
}
