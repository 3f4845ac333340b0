use std::path::Path;

use anyhow::{Context, Result};
use depbump_core::Config;

/// Load a traversal layout from a JSON file
///
/// # Errors
/// Returns error if the file cannot be read or is not a valid config.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid config file {}", path.display()))
}
