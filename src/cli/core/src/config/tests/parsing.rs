/* src/cli/core/src/config/tests/parsing.rs */

use super::*;

#[test]
fn parse_minimal_config() {
  let toml_str = r#"
[project]
name = "my-site"
"#;
  let config = parse_edge_config(toml_str).unwrap();
  assert_eq!(config.project.name, "my-site");
  assert_eq!(config.build.input_dir, ".serverless_nextjs");
  assert_eq!(config.build.out_dir, "build");
  assert!(config.routes.is_empty());
}

#[test]
fn parse_full_config() {
  let toml_str = r#"
[project]
name = "blog"

[build]
input_dir = "out/.serverless_nextjs"
out_dir = "dist/edge"

[[routes]]
src = "^/legacy/(?<slug>[^/]+)/?$"
dest = "/posts/[postId]?postId=$slug"

[[routes]]
src = "^/old-home/?$"
dest = "/index"
"#;
  let config = parse_edge_config(toml_str).unwrap();
  assert_eq!(config.build.input_dir, "out/.serverless_nextjs");
  assert_eq!(config.build.out_dir, "dist/edge");
  assert_eq!(config.routes.len(), 2);
  assert_eq!(config.routes[1].dest, "/index");

  let options = config.compile_options();
  assert_eq!(options.project, "blog");
  assert_eq!(options.extra_routes, config.routes);
}

#[test]
fn partial_build_section_keeps_defaults() {
  let toml_str = r#"
[project]
name = "blog"

[build]
out_dir = "edge"
"#;
  let config = parse_edge_config(toml_str).unwrap();
  assert_eq!(config.build.input_dir, ".serverless_nextjs");
  assert_eq!(config.build.out_dir, "edge");
}
