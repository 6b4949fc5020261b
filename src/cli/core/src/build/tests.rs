/* src/cli/core/src/build/tests.rs */

use std::path::Path;

use edgeroute_server::{Dispatcher, PageHint, load_build_info};
use serde_json::{Value, json};

use super::manifests::{API_MANIFEST, PAGE_MANIFEST, PRERENDER_MANIFEST, ROUTES_MANIFEST};
use super::*;
use crate::config::parse_edge_config;
use crate::resolve::find_page_build_info;

fn write(root: &Path, rel: &str, value: &Value) {
  let path = root.join(rel);
  std::fs::create_dir_all(path.parent().unwrap()).unwrap();
  std::fs::write(path, serde_json::to_string(value).unwrap()).unwrap();
}

fn write_fixture(input: &Path, build_id: &str, with_api: bool) {
  if with_api {
    write(
      input,
      API_MANIFEST,
      &json!({ "apis": { "dynamic": {}, "nonDynamic": { "/api/hello": "pages/api/hello.js" } } }),
    );
  }
  write(
    input,
    PAGE_MANIFEST,
    &json!({
      "buildId": build_id,
      "pages": {
        "html": { "dynamic": {}, "nonDynamic": { "/about": "pages/about.html" } },
        "ssr": {
          "dynamic": { "/posts/[postId]": { "file": "pages/posts/[postId].js" } },
          "nonDynamic": { "/_error": "pages/_error.js", "/index": "pages/index.js" }
        }
      },
      "publicFiles": { "/robots.txt": "robots.txt" }
    }),
  );
  write(input, PRERENDER_MANIFEST, &json!({ "version": 2, "routes": {} }));
  write(
    input,
    ROUTES_MANIFEST,
    &json!({
      "dynamicRoutes": [{
        "page": "/posts/[postId]",
        "namedRegex": "^/posts/(?<postId>[^/]+?)(?:/)?$",
        "routeKeys": { "postId": "postId" }
      }],
      "dataRoutes": []
    }),
  );
}

fn config() -> EdgeConfig {
  parse_edge_config("[project]\nname = \"site\"\n").unwrap()
}

#[test]
fn build_writes_proxy_config_and_buckets() {
  let tmp = tempfile::tempdir().unwrap();
  write_fixture(&tmp.path().join(".serverless_nextjs"), "aabbcc", true);

  run_build(&config(), tmp.path()).unwrap();

  let out = tmp.path().join("build");
  let proxy: Value =
    serde_json::from_str(&std::fs::read_to_string(out.join(PROXY_CONFIG_FILE)).unwrap()).unwrap();
  assert_eq!(proxy["buildId"], "aabbcc");
  assert_eq!(proxy["lambdaRoutes"], json!(["/site-next-api-aabbcc", "/site-next-page-aabbcc"]));
  assert_eq!(proxy["staticRoutes"], json!(["/about", "/robots.txt"]));
  assert_eq!(proxy["routes"].as_array().unwrap().last().unwrap()["dest"], "/404");

  assert!(out.join("site-next-api-aabbcc").join(BUILD_INFO_FILE).is_file());
  let page_info = load_build_info(&out.join("site-next-page-aabbcc").join(BUILD_INFO_FILE)).unwrap();
  let dispatcher = Dispatcher::from_build_info(&page_info).unwrap();
  let resolved = dispatcher.resolve(PageHint::Absent, "/posts/first").unwrap();
  assert_eq!(resolved.page.loader, "pages/posts/[postId].js");
}

#[test]
fn rebuild_replaces_buckets_of_previous_build() {
  let tmp = tempfile::tempdir().unwrap();
  let input = tmp.path().join(".serverless_nextjs");
  write_fixture(&input, "aabbcc", true);
  run_build(&config(), tmp.path()).unwrap();

  write_fixture(&input, "ddeeff", true);
  run_build(&config(), tmp.path()).unwrap();

  let out = tmp.path().join("build");
  let mut entries: Vec<String> = std::fs::read_dir(&out)
    .unwrap()
    .map(|e| e.unwrap().file_name().into_string().unwrap())
    .collect();
  entries.sort();
  assert_eq!(entries, ["proxy-config.json", "site-next-api-ddeeff", "site-next-page-ddeeff"]);

  let page_info = find_page_build_info(&out).unwrap();
  assert_eq!(page_info, out.join("site-next-page-ddeeff").join(BUILD_INFO_FILE));
  assert_eq!(load_build_info(&page_info).unwrap().build_id.as_str(), "ddeeff");
}

#[test]
fn missing_api_manifest_means_no_api_bucket() {
  let tmp = tempfile::tempdir().unwrap();
  let input = tmp.path().join("input");
  write_fixture(&input, "aabbcc", false);

  let manifests = read_manifests(&input).unwrap();
  assert!(manifests.api.apis.non_dynamic.is_empty());

  let artifact = compile(&manifests, &config().compile_options()).unwrap();
  let written = write_artifacts(&artifact, &tmp.path().join("out")).unwrap();
  assert_eq!(written.len(), 2);
  assert_eq!(artifact.lambda_routes, vec!["/site-next-page-aabbcc"]);
}

#[test]
fn missing_page_manifest_is_reported() {
  let tmp = tempfile::tempdir().unwrap();
  let err = read_manifests(tmp.path()).unwrap_err();
  assert!(err.to_string().contains("manifest.json"), "{err}");
}

#[test]
fn malformed_manifest_aborts_without_output() {
  let tmp = tempfile::tempdir().unwrap();
  let input = tmp.path().join(".serverless_nextjs");
  write_fixture(&input, "aabbcc", true);
  write(&input, ROUTES_MANIFEST, &json!({ "dynamicRoutes": [] }));

  let err = run_build(&config(), tmp.path()).unwrap_err();
  assert!(format!("{err:#}").contains("routes manifest"), "{err:#}");
  assert!(!tmp.path().join("build").exists());
}
