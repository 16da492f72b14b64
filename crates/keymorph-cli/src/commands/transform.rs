//! Transform a document with configured options

use anyhow::{Context, Result};
use keymorph_core::TransformConfig;

use crate::document;

/// Run the transform command
pub fn run(
    input: Option<&str>,
    config_path: Option<&str>,
    options: &[String],
    pretty: bool,
) -> Result<()> {
    let config = resolve_config(config_path, options)?;
    tracing::debug!(?config, "Resolved configuration");

    let node = document::read(input)?;
    let output = keymorph_core::transform(node, &config).context("Transform failed")?;
    document::write(&output, pretty)
}

/// Options from the config file first, `--set` pairs on top
fn resolve_config(config_path: Option<&str>, options: &[String]) -> Result<TransformConfig> {
    let mut config = match config_path {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read configuration {}", path))?;
            TransformConfig::from_yaml_str(&contents)
                .with_context(|| format!("Invalid configuration in {}", path))?
        }
        None => TransformConfig::default(),
    };

    let pairs = options
        .iter()
        .map(|option| {
            option
                .split_once('=')
                .map(|(name, value)| (name.trim(), value.trim()))
                .ok_or_else(|| anyhow::anyhow!("option '{}' must be in NAME=VALUE form", option))
        })
        .collect::<Result<Vec<_>>>()?;
    config.merge_pairs(pairs).context("Invalid --set option")?;

    Ok(config)
}
