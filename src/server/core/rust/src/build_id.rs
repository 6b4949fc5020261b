/* src/server/core/rust/src/build_id.rs */

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid build id {raw:?}: expected one or more ASCII letters or digits")]
pub struct InvalidBuildId {
  raw: String,
}

/// Identifier of one framework build. Always non-empty `[0-9A-Za-z]+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BuildId(String);

impl BuildId {
  pub fn parse(raw: &str) -> Result<Self, InvalidBuildId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_alphanumeric()) {
      return Err(InvalidBuildId { raw: raw.to_string() });
    }
    Ok(Self(raw.to_string()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }

  /// Regex literal matching exactly this id, for `/_next/data/<id>/` unwrapping.
  pub fn escaped(&self) -> String {
    escape_build_id(&self.0)
  }
}

/// Escape a raw build id for embedding in a regex.
/// Works on unvalidated input too: bucket artifacts from older builds may carry `-`.
pub fn escape_build_id(raw: &str) -> String {
  regex::escape(raw)
}

impl TryFrom<String> for BuildId {
  type Error = InvalidBuildId;

  fn try_from(raw: String) -> Result<Self, Self::Error> {
    Self::parse(&raw)
  }
}

impl From<BuildId> for String {
  fn from(id: BuildId) -> Self {
    id.0
  }
}

impl fmt::Display for BuildId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
