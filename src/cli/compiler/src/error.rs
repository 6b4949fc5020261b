/* src/cli/compiler/src/error.rs */

use std::fmt;

use edgeroute_server::InvalidBuildId;

/// Which input document an error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
  Api,
  Pages,
  Prerender,
  Routes,
}

impl fmt::Display for ManifestKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Api => write!(f, "API manifest"),
      Self::Pages => write!(f, "page manifest"),
      Self::Prerender => write!(f, "prerender manifest"),
      Self::Routes => write!(f, "routes manifest"),
    }
  }
}

/// Configuration errors. Any of these aborts the build before an artifact exists.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
  #[error(transparent)]
  BuildId(#[from] InvalidBuildId),
  #[error("invalid {kind}: {source}")]
  Manifest {
    kind: ManifestKind,
    #[source]
    source: serde_json::Error,
  },
  #[error("invalid {context} pattern {src:?}: {source}")]
  Pattern {
    context: &'static str,
    src: String,
    #[source]
    source: regex::Error,
  },
  #[error("invalid project name {0:?}: must be non-empty without '/' or whitespace")]
  ProjectName(String),
}
