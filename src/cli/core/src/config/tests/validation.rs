/* src/cli/core/src/config/tests/validation.rs */

use super::*;

#[test]
fn missing_project_is_rejected() {
  assert!(parse_edge_config("[build]\nout_dir = \"x\"\n").is_err());
}

#[test]
fn empty_project_name_is_rejected() {
  let err = parse_edge_config("[project]\nname = \"\"\n").unwrap_err();
  assert!(format!("{err:#}").contains("invalid project name"), "{err:#}");
}

#[test]
fn project_name_with_slash_is_rejected() {
  assert!(parse_edge_config("[project]\nname = \"a/b\"\n").is_err());
}

#[test]
fn invalid_extra_route_is_rejected() {
  let toml_str = r#"
[project]
name = "blog"

[[routes]]
src = "^/legacy/(?<slug>[^/]+"
dest = "/index"
"#;
  let err = parse_edge_config(toml_str).unwrap_err();
  assert!(format!("{err:#}").contains("routes[0].src"), "{err:#}");
}

#[test]
fn out_dir_must_be_plain_relative_path() {
  for out_dir in ["", ".", "..", "../dist", "build/../..", "/tmp/edge"] {
    let toml_str = format!("[project]\nname = \"blog\"\n\n[build]\nout_dir = {out_dir:?}\n");
    let err = parse_edge_config(&toml_str).unwrap_err();
    assert!(format!("{err:#}").contains("build.out_dir"), "{out_dir:?}: {err:#}");
  }
}

#[test]
fn out_dir_holding_the_input_is_rejected() {
  let toml_str = r#"
[project]
name = "blog"

[build]
input_dir = "dist/.serverless_nextjs"
out_dir = "dist"
"#;
  let err = parse_edge_config(toml_str).unwrap_err();
  assert!(format!("{err:#}").contains("must not contain"), "{err:#}");
}
