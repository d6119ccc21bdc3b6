//! `settings` command: print the effective tool settings.

use anyhow::{Context, Result};

use crate::domain::models::Settings;

/// Print `settings` as YAML, or JSON when `json_mode` is set.
pub fn execute(settings: &Settings, json_mode: bool) -> Result<()> {
    let rendered = if json_mode {
        serde_json::to_string_pretty(settings).context("Failed to render settings as JSON")?
    } else {
        serde_yaml::to_string(settings).context("Failed to render settings as YAML")?
    };
    println!("{}", rendered.trim_end());
    Ok(())
}
