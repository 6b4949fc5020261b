/* src/cli/compiler/src/manifest.rs */

// Input documents produced by the page framework's build.
// Every listed key is required; unknown keys are ignored.
// Object maps keep document order, which fixes route and query order downstream.

use indexmap::IndexMap;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{CompileError, ManifestKind};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiManifest {
  pub apis: ApiRoutes,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiRoutes {
  pub dynamic: IndexMap<String, Value>,
  /// API path -> bundle file.
  pub non_dynamic: IndexMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageManifest {
  pub build_id: String,
  pub pages: PageSets,
  pub public_files: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageSets {
  pub html: HtmlPages,
  pub ssr: SsrPages,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HtmlPages {
  /// Page path -> `pages/<name>.html`.
  pub non_dynamic: IndexMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsrPages {
  pub dynamic: IndexMap<String, Value>,
  pub non_dynamic: IndexMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PrerenderManifest {
  pub routes: IndexMap<String, PrerenderRoute>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrerenderRoute {
  pub data_route: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutesManifest {
  pub dynamic_routes: Vec<ManifestDynamicRoute>,
  pub data_routes: Vec<ManifestDataRoute>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDynamicRoute {
  pub page: String,
  pub named_regex: String,
  /// Query key -> named capture group.
  pub route_keys: IndexMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestDataRoute {
  pub page: String,
  pub data_route_regex: String,
}

/// The four manifests one build is compiled from.
#[derive(Debug, Clone)]
pub struct ManifestSet {
  pub api: ApiManifest,
  pub pages: PageManifest,
  pub prerender: PrerenderManifest,
  pub routes: RoutesManifest,
}

impl ManifestSet {
  /// Decode all four documents. `api` is `None` when the project has no API routes.
  pub fn from_json(
    api: Option<&str>,
    pages: &str,
    prerender: &str,
    routes: &str,
  ) -> Result<Self, CompileError> {
    let api = match api {
      Some(raw) => parse_manifest(ManifestKind::Api, raw)?,
      None => ApiManifest::default(),
    };
    Ok(Self {
      api,
      pages: parse_manifest(ManifestKind::Pages, pages)?,
      prerender: parse_manifest(ManifestKind::Prerender, prerender)?,
      routes: parse_manifest(ManifestKind::Routes, routes)?,
    })
  }
}

pub fn parse_manifest<T: DeserializeOwned>(kind: ManifestKind, raw: &str) -> Result<T, CompileError> {
  serde_json::from_str(raw).map_err(|source| CompileError::Manifest { kind, source })
}
