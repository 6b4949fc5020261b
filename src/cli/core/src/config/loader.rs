/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use super::types::EdgeConfig;

pub const CONFIG_FILE: &str = "edgeroute.toml";

/// Walk upward from `start` to find `edgeroute.toml`, like Cargo.toml discovery
pub fn find_edge_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_edge_config(path: &Path) -> Result<EdgeConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  parse_edge_config(&content).with_context(|| format!("invalid config {}", path.display()))
}

pub fn parse_edge_config(content: &str) -> Result<EdgeConfig> {
  let config: EdgeConfig = toml::from_str(content).context("failed to parse config")?;
  config.validate()?;
  Ok(config)
}
