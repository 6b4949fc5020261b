/* src/cli/core/src/build/output.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use edgeroute_compiler::RoutingArtifact;

use crate::ui::{self, DIM, RESET};

pub const PROXY_CONFIG_FILE: &str = "proxy-config.json";
pub const BUILD_INFO_FILE: &str = "build-info.json";

fn write_json(path: &Path, content: &str, base: &Path) -> Result<()> {
  std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))?;
  let rel = path.strip_prefix(base).unwrap_or(path);
  ui::detail_ok(&format!(
    "{}  {DIM}({}){RESET}",
    rel.display(),
    ui::format_size(content.len() as u64)
  ));
  Ok(())
}

/// Empty `out_dir` so buckets of earlier builds do not survive.
fn reset_out_dir(out_dir: &Path) -> Result<()> {
  if out_dir.exists() {
    std::fs::remove_dir_all(out_dir)
      .with_context(|| format!("failed to clear {}", out_dir.display()))?;
  }
  std::fs::create_dir_all(out_dir).with_context(|| format!("failed to create {}", out_dir.display()))
}

/// Replace the contents of `out_dir` with `proxy-config.json` and
/// `<bucket>/build-info.json`; returns the written paths.
pub fn write_artifacts(artifact: &RoutingArtifact, out_dir: &Path) -> Result<Vec<PathBuf>> {
  reset_out_dir(out_dir)?;

  let mut written = Vec::with_capacity(artifact.buckets.len() + 1);
  let proxy_config = out_dir.join(PROXY_CONFIG_FILE);
  let json = artifact.to_json_pretty().context("failed to serialize routing table")?;
  write_json(&proxy_config, &json, out_dir)?;
  written.push(proxy_config);

  for bucket in &artifact.buckets {
    let dir = out_dir.join(&bucket.name);
    std::fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(BUILD_INFO_FILE);
    let json = serde_json::to_string_pretty(&bucket.build_info)
      .with_context(|| format!("failed to serialize build info for {}", bucket.name))?;
    write_json(&path, &json, out_dir)?;
    written.push(path);
  }
  Ok(written)
}
