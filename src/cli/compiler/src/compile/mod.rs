/* src/cli/compiler/src/compile/mod.rs */

// Manifests -> ordered routing table, derived sets and per-bucket build info.


use std::collections::BTreeMap;

use edgeroute_server::{BuildId, BuildInfo, DynamicRouteDef};
use indexmap::IndexMap;
use regex::Regex;

use crate::artifact::{LambdaBucket, PrerenderTarget, RoutingArtifact};
use crate::error::CompileError;
use crate::escape::{literal_pattern, normalize_hyphen_escapes};
use crate::lambda::{LambdaKind, lambda_name, validate_project_name};
use crate::manifest::{ManifestDynamicRoute, ManifestSet};
use crate::route::RouteEntry;

/// Strips one trailing slash from any non-root path.
pub const TRAILING_SLASH_PATTERN: &str = r"^(?:\/((?:[^\/]+?)(?:\/(?:[^\/]+?))*))\/$";
pub const ERROR_PAGE: &str = "/_error";
const CATCH_ALL: &str = "/.*";

#[derive(Debug, Clone, Default)]
pub struct CompileOptions {
  pub project: String,
  /// Inserted verbatim after prerendered routes; patterns must already be escaped.
  pub extra_routes: Vec<DynamicRouteDef>,
}

impl CompileOptions {
  pub fn new(project: impl Into<String>) -> Self {
    Self { project: project.into(), extra_routes: Vec::new() }
  }

  pub fn extra_route(mut self, src: impl Into<String>, dest: impl Into<String>) -> Self {
    self.extra_routes.push(DynamicRouteDef { src: src.into(), dest: dest.into() });
    self
  }
}

pub fn compile(
  manifests: &ManifestSet,
  options: &CompileOptions,
) -> Result<RoutingArtifact, CompileError> {
  validate_project_name(&options.project)?;
  let build_id = BuildId::parse(&manifests.pages.build_id)?;
  let api_lambda = lambda_name(&options.project, LambdaKind::Api, &build_id);
  let page_lambda = lambda_name(&options.project, LambdaKind::Page, &build_id);
  let api_dest = format!("/{api_lambda}");
  let page_dest = format!("/{page_lambda}");

  let api = &manifests.api.apis;
  let ssr = &manifests.pages.pages.ssr;
  let prerendered = &manifests.prerender.routes;

  for extra in &options.extra_routes {
    check_pattern("extra route", &extra.src)?;
  }
  let dynamic_routes = manifests
    .routes
    .dynamic_routes
    .iter()
    .map(dynamic_route_def)
    .collect::<Result<Vec<_>, _>>()?;

  let mut routes = vec![
    RouteEntry::Redirect {
      src: TRAILING_SLASH_PATTERN.to_string(),
      location: "/$1".to_string(),
      status: 308,
      continue_matching: true,
    },
    RouteEntry::Filesystem,
  ];

  routes.extend(api.non_dynamic.keys().map(|path| RouteEntry::Api {
    src: literal_pattern(path),
    lambda: api_dest.clone(),
    page: path.clone(),
  }));

  for data in &manifests.routes.data_routes {
    if prerendered.contains_key(&data.page) {
      continue;
    }
    let src = normalize_hyphen_escapes(&data.data_route_regex);
    check_pattern("data route", &src)?;
    routes.push(RouteEntry::Data { src, page: data.page.clone() });
  }

  routes.extend(
    ssr
      .non_dynamic
      .keys()
      .filter(|path| path.as_str() != ERROR_PAGE && !prerendered.contains_key(*path))
      .map(|path| RouteEntry::SsrPage {
        src: literal_pattern(path),
        lambda: page_dest.clone(),
        page: path.clone(),
      }),
  );

  routes.extend(prerendered.keys().map(|path| RouteEntry::Prerendered {
    src: literal_pattern(path),
    lambda: page_dest.clone(),
    page: path.clone(),
  }));

  routes.extend(
    options
      .extra_routes
      .iter()
      .map(|def| RouteEntry::Dynamic { src: def.src.clone(), dest: def.dest.clone() }),
  );

  routes.extend(
    dynamic_routes
      .iter()
      .map(|def| RouteEntry::Dynamic { src: def.src.clone(), dest: def.dest.clone() }),
  );

  routes.extend(manifests.routes.dynamic_routes.iter().map(|route| RouteEntry::DynamicPage {
    src: literal_pattern(&route.page),
    lambda: page_dest.clone(),
    page: route.page.clone(),
  }));

  routes.push(RouteEntry::Hit);
  routes.push(RouteEntry::Error);
  routes.push(RouteEntry::Fallback { src: CATCH_ALL.to_string(), status: 404 });

  let static_paths = manifests
    .pages
    .pages
    .html
    .non_dynamic
    .values()
    .map(String::as_str)
    .map(static_path)
    .chain(manifests.pages.public_files.keys().cloned())
    .collect();

  let mut prerenders = IndexMap::new();
  for (path, route) in prerendered {
    let target = PrerenderTarget { lambda: page_lambda.clone() };
    prerenders.insert(route.data_route.clone(), target.clone());
    prerenders.insert(path.clone(), target);
  }

  let mut buckets = Vec::new();
  if !api.dynamic.is_empty() || !api.non_dynamic.is_empty() {
    buckets.push(LambdaBucket {
      name: api_lambda,
      kind: LambdaKind::Api,
      build_info: BuildInfo::new(&build_id, to_table(&api.non_dynamic), dynamic_routes.clone()),
    });
  }
  if !ssr.dynamic.is_empty() || !ssr.non_dynamic.is_empty() {
    let mut pages = to_table(&ssr.non_dynamic);
    pages.remove(ERROR_PAGE);
    for route in &manifests.routes.dynamic_routes {
      pages.insert(route.page.clone(), format!("pages{}.js", route.page));
    }
    buckets.push(LambdaBucket {
      name: page_lambda,
      kind: LambdaKind::Page,
      build_info: BuildInfo::new(&build_id, pages, dynamic_routes),
    });
  }
  let lambda_routes = buckets.iter().map(|b| format!("/{}", b.name)).collect();

  Ok(RoutingArtifact { build_id, lambda_routes, prerenders, routes, static_paths, buckets })
}

/// `<page>?<key>=$<group>&...`; the page alone when there are no route keys.
pub fn dynamic_destination(page: &str, route_keys: &IndexMap<String, String>) -> String {
  if route_keys.is_empty() {
    return page.to_string();
  }
  let query: Vec<String> =
    route_keys.iter().map(|(key, group)| format!("{key}=${group}")).collect();
  format!("{page}?{}", query.join("&"))
}

fn dynamic_route_def(route: &ManifestDynamicRoute) -> Result<DynamicRouteDef, CompileError> {
  check_pattern("dynamic route", &route.named_regex)?;
  Ok(DynamicRouteDef {
    src: route.named_regex.clone(),
    dest: dynamic_destination(&route.page, &route.route_keys),
  })
}

fn to_table(pages: &IndexMap<String, String>) -> BTreeMap<String, String> {
  pages.iter().map(|(path, file)| (path.clone(), file.clone())).collect()
}

/// `pages/about.html` -> `/about`
fn static_path(file: &str) -> String {
  let path = file.strip_prefix("pages").unwrap_or(file);
  path.strip_suffix(".html").unwrap_or(path).to_string()
}

fn check_pattern(context: &'static str, src: &str) -> Result<(), CompileError> {
  Regex::new(src)
    .map(|_| ())
    .map_err(|source| CompileError::Pattern { context, src: src.to_string(), source })
}
