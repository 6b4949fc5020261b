/* src/cli/core/src/build/manifests.rs */

use std::path::Path;

use anyhow::{Context, Result};
use edgeroute_compiler::ManifestSet;

pub const API_MANIFEST: &str = "api-lambda/manifest.json";
pub const PAGE_MANIFEST: &str = "default-lambda/manifest.json";
pub const PRERENDER_MANIFEST: &str = "default-lambda/prerender-manifest.json";
pub const ROUTES_MANIFEST: &str = "default-lambda/routes-manifest.json";

fn read(path: &Path) -> Result<String> {
  std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Read the four manifests below `input_dir`. A missing API manifest means no API routes.
pub fn read_manifests(input_dir: &Path) -> Result<ManifestSet> {
  let api_path = input_dir.join(API_MANIFEST);
  let api = if api_path.is_file() {
    Some(read(&api_path)?)
  } else {
    tracing::debug!(path = %api_path.display(), "no API manifest, assuming no API routes");
    None
  };
  let pages = read(&input_dir.join(PAGE_MANIFEST))?;
  let prerender = read(&input_dir.join(PRERENDER_MANIFEST))?;
  let routes = read(&input_dir.join(ROUTES_MANIFEST))?;

  ManifestSet::from_json(api.as_deref(), &pages, &prerender, &routes)
    .with_context(|| format!("failed to decode manifests in {}", input_dir.display()))
}
