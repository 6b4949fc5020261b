/* src/server/core/rust/src/build_info/types.rs */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::build_id::BuildId;
use crate::dynamic::DynamicRouteDef;
use crate::registry::PageRegistry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
  pub build_id: BuildId,
  /// Kept alongside the raw id so the runtime never re-derives it.
  pub escaped_build_id: String,
  /// Page key -> bundle-relative module path.
  pub pages: BTreeMap<String, String>,
  #[serde(default)]
  pub dynamic_routes: Vec<DynamicRouteDef>,
}

impl BuildInfo {
  pub fn new(
    build_id: &BuildId,
    pages: BTreeMap<String, String>,
    dynamic_routes: Vec<DynamicRouteDef>,
  ) -> Self {
    Self { build_id: build_id.clone(), escaped_build_id: build_id.escaped(), pages, dynamic_routes }
  }

  pub fn registry(&self) -> PageRegistry {
    self.pages.iter().map(|(key, loader)| (key.as_str(), loader.as_str())).collect()
  }
}
