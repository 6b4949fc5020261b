/* src/server/core/rust/src/build_info/loader.rs */

use std::path::{Path, PathBuf};

use super::types::BuildInfo;

#[derive(Debug, thiserror::Error)]
pub enum BuildInfoError {
  #[error("failed to read {}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
  #[error("invalid build info: {0}")]
  Parse(#[from] serde_json::Error),
  #[error("invalid route pattern {src:?}: {source}")]
  Pattern {
    src: String,
    #[source]
    source: regex::Error,
  },
}

pub fn parse_build_info(json: &str) -> Result<BuildInfo, BuildInfoError> {
  Ok(serde_json::from_str(json)?)
}

/// Load a bucket's build-info.json from disk.
pub fn load_build_info(path: &Path) -> Result<BuildInfo, BuildInfoError> {
  let content = std::fs::read_to_string(path)
    .map_err(|source| BuildInfoError::Io { path: path.to_path_buf(), source })?;
  parse_build_info(&content)
}
