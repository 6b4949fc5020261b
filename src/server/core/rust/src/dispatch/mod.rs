/* src/server/core/rust/src/dispatch/mod.rs */

// Resolve an inbound request to a page of this bucket.
// Order: page hint -> request path -> /_next/data unwrap -> dynamic routes.


use std::collections::BTreeMap;

use http::Uri;
use regex::Regex;

use crate::build_info::{BuildInfo, BuildInfoError};
use crate::dynamic::DynamicRoute;
use crate::errors::DispatchError;
use crate::registry::{PageRef, PageRegistry};

/// Header an upstream edge layer sets to the canonical page key.
pub const PAGE_HINT_HEADER: &str = "x-nextjs-page";

const DATA_ROUTE_MARKER: &str = "/_next/data";
const INDEX_PAGE: &str = "/index";

/// Value of the page hint header as received.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageHint<'a> {
  Absent,
  Single(&'a str),
  /// The header arrived more than once; never resolvable.
  Multiple,
}

impl<'a> PageHint<'a> {
  pub fn from_values<I>(values: I) -> Self
  where
    I: IntoIterator<Item = &'a str>,
  {
    let mut values = values.into_iter();
    match (values.next(), values.next()) {
      (None, _) => Self::Absent,
      (Some(v), None) => Self::Single(v),
      (Some(_), Some(_)) => Self::Multiple,
    }
  }
}

/// Which step produced the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
  Hint,
  Path,
  DataRoute,
  DynamicRoute,
}

impl Resolution {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Hint => "hint",
      Self::Path => "path",
      Self::DataRoute => "data_route",
      Self::DynamicRoute => "dynamic_route",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<'a> {
  pub page: &'a PageRef,
  pub resolution: Resolution,
  /// Named segments captured by a dynamic route; empty otherwise.
  pub params: BTreeMap<String, String>,
}

/// Immutable per-bucket dispatcher. Safe to share across concurrent requests.
#[derive(Debug)]
pub struct Dispatcher {
  registry: PageRegistry,
  dynamic_routes: Vec<DynamicRoute>,
  data_prefix: Regex,
}

impl Dispatcher {
  pub fn new(
    registry: PageRegistry,
    dynamic_routes: Vec<DynamicRoute>,
    escaped_build_id: &str,
  ) -> Result<Self, BuildInfoError> {
    let src = format!("{DATA_ROUTE_MARKER}/{escaped_build_id}/");
    let data_prefix =
      Regex::new(&src).map_err(|source| BuildInfoError::Pattern { src: src.clone(), source })?;
    Ok(Self { registry, dynamic_routes, data_prefix })
  }

  pub fn from_build_info(info: &BuildInfo) -> Result<Self, BuildInfoError> {
    let dynamic_routes = info
      .dynamic_routes
      .iter()
      .map(|def| {
        DynamicRoute::compile(def)
          .map_err(|source| BuildInfoError::Pattern { src: def.src.clone(), source })
      })
      .collect::<Result<Vec<_>, _>>()?;
    Self::new(info.registry(), dynamic_routes, &info.escaped_build_id)
  }

  pub fn registry(&self) -> &PageRegistry {
    &self.registry
  }

  pub fn dynamic_routes(&self) -> &[DynamicRoute] {
    &self.dynamic_routes
  }

  pub fn resolve(&self, hint: PageHint<'_>, url: &str) -> Result<Resolved<'_>, DispatchError> {
    let (mut key, direct) = match hint {
      PageHint::Multiple => {
        tracing::warn!(url, "rejecting request with multiple {PAGE_HINT_HEADER} headers");
        return Err(DispatchError::bad_request(format!(
          "{PAGE_HINT_HEADER} must be a single value"
        )));
      }
      PageHint::Single(value) if !value.is_empty() => (value.to_string(), Resolution::Hint),
      _ => (page_key_from_url(url)?, Resolution::Path),
    };

    if let Some(page) = self.registry.get(&key) {
      return Ok(resolved(page, direct, BTreeMap::new()));
    }

    if key.contains(DATA_ROUTE_MARKER) {
      key = self.unwrap_data_route(&key);
      if let Some(page) = self.registry.get(&key) {
        return Ok(resolved(page, Resolution::DataRoute, BTreeMap::new()));
      }
    }

    for route in &self.dynamic_routes {
      if !route.is_match(&key) {
        continue;
      }
      if let Some(page) = self.registry.get(route.dest_page()) {
        let params = route.params(&key).unwrap_or_default();
        return Ok(resolved(page, Resolution::DynamicRoute, params));
      }
    }

    tracing::error!(
      key = %key,
      header = ?hint,
      url,
      pages = ?self.registry.keys(),
      "failed to find matching page"
    );
    Err(DispatchError::no_matching_page(format!("no page matches {key:?}")))
  }

  /// `/_next/data/<id>/blog/post.json` -> `/blog/post`.
  fn unwrap_data_route(&self, key: &str) -> String {
    let replaced = self.data_prefix.replace(key, "/");
    let rewritten = replaced.strip_suffix(".json").unwrap_or(replaced.as_ref());
    if rewritten.is_empty() { INDEX_PAGE.to_string() } else { rewritten.to_string() }
  }
}

fn resolved(
  page: &PageRef,
  resolution: Resolution,
  params: BTreeMap<String, String>,
) -> Resolved<'_> {
  tracing::debug!(key = %page.key, resolution = resolution.as_str(), "resolved page");
  Resolved { page, resolution, params }
}

/// Path component of the request URL as sent, minus one trailing slash; `/` becomes `/index`.
/// Dot segments and percent-escapes are left alone.
fn page_key_from_url(raw: &str) -> Result<String, DispatchError> {
  let uri = match raw.parse::<Uri>() {
    Ok(uri) if uri.scheme().is_some() || raw.starts_with('/') => uri,
    Ok(_) => return Err(malformed_url(raw, "expected a path or an absolute URL")),
    Err(e) => return Err(malformed_url(raw, &e.to_string())),
  };
  let path = uri.path();
  let path = path.strip_suffix('/').unwrap_or(path);
  Ok(if path.is_empty() { INDEX_PAGE.to_string() } else { path.to_string() })
}

fn malformed_url(raw: &str, reason: &str) -> DispatchError {
  tracing::warn!(url = raw, reason, "rejecting malformed request URL");
  DispatchError::bad_request(format!("malformed request URL {raw:?}: {reason}"))
}
