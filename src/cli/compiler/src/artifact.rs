/* src/cli/compiler/src/artifact.rs */

use edgeroute_server::{BuildId, BuildInfo};
use indexmap::IndexMap;
use serde::Serialize;

use crate::lambda::LambdaKind;
use crate::route::RouteEntry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrerenderTarget {
  pub lambda: String,
}

/// One deployable lambda bucket and the table it is built with.
#[derive(Debug, Clone)]
pub struct LambdaBucket {
  pub name: String,
  pub kind: LambdaKind,
  pub build_info: BuildInfo,
}

/// Compiler output. Serializes to `proxy-config.json`; buckets are written separately.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutingArtifact {
  pub build_id: BuildId,
  /// `/<bucket name>` for every emitted bucket.
  pub lambda_routes: Vec<String>,
  pub prerenders: IndexMap<String, PrerenderTarget>,
  pub routes: Vec<RouteEntry>,
  #[serde(rename = "staticRoutes")]
  pub static_paths: Vec<String>,
  #[serde(skip)]
  pub buckets: Vec<LambdaBucket>,
}

impl RoutingArtifact {
  pub fn bucket(&self, kind: LambdaKind) -> Option<&LambdaBucket> {
    self.buckets.iter().find(|b| b.kind == kind)
  }

  pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(self)
  }
}
