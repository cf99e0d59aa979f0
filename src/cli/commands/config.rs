//! `config` command

use anyhow::{Context, Result};

use crate::domain::models::Config;

/// Render the effective configuration as YAML or JSON
pub fn render(config: &Config, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(config).context("Failed to render configuration as JSON")
    } else {
        serde_yaml::to_string(config).context("Failed to render configuration as YAML")
    }
}

pub fn execute(config: &Config, json: bool) -> Result<()> {
    println!("{}", render(config, json)?);
    Ok(())
}
