/* src/cli/core/src/config/tests/loading.rs */

use super::*;

#[test]
fn finds_config_in_parent_directory() {
  let tmp = tempfile::tempdir().unwrap();
  std::fs::write(tmp.path().join(CONFIG_FILE), "[project]\nname = \"site\"\n").unwrap();
  let nested = tmp.path().join("app/pages");
  std::fs::create_dir_all(&nested).unwrap();

  let found = find_edge_config(&nested).unwrap();
  assert_eq!(found, tmp.path().canonicalize().unwrap().join(CONFIG_FILE));
  assert_eq!(load_edge_config(&found).unwrap().project.name, "site");
}

#[test]
fn load_reports_path_on_parse_error() {
  let tmp = tempfile::tempdir().unwrap();
  let path = tmp.path().join(CONFIG_FILE);
  std::fs::write(&path, "[project\n").unwrap();
  let err = load_edge_config(&path).unwrap_err();
  assert!(err.to_string().contains(CONFIG_FILE), "{err}");
}
