/* src/cli/core/src/resolve.rs */

// `edgeroute resolve`: run the request dispatcher against a bucket's
// build-info.json and report which page a URL lands on.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use edgeroute_server::{Dispatcher, PageHint, load_build_info};

use crate::build::BUILD_INFO_FILE;
use crate::ui::{self, DIM, RESET};

const PAGE_BUCKET_MARKER: &str = "-next-page-";

pub fn run_resolve(url: &str, hints: &[String], build_info: &Path) -> Result<()> {
  let info = load_build_info(build_info)
    .with_context(|| format!("failed to load {}", build_info.display()))?;
  let dispatcher = Dispatcher::from_build_info(&info)
    .with_context(|| format!("failed to compile routes from {}", build_info.display()))?;

  ui::arrow(&format!("resolving {url}  {DIM}(build {}){RESET}", info.build_id));
  let hint = PageHint::from_values(hints.iter().map(String::as_str));
  match dispatcher.resolve(hint, url) {
    Ok(resolved) => {
      ui::ok(&format!("{url} -> {}", resolved.page.key));
      ui::detail(&format!("loader  {}", resolved.page.loader));
      ui::detail(&format!("via     {}", resolved.resolution.as_str()));
      for (name, value) in &resolved.params {
        ui::detail(&format!("param   {name}={value}"));
      }
      Ok(())
    }
    Err(e) => {
      ui::fail(&format!("{} {}", e.status(), e.code()));
      bail!("{}", e.message())
    }
  }
}

/// The single page bucket's build-info.json below `out_dir`.
pub fn find_page_build_info(out_dir: &Path) -> Result<PathBuf> {
  let entries =
    std::fs::read_dir(out_dir).with_context(|| format!("failed to read {}", out_dir.display()))?;
  let mut found = Vec::new();
  for entry in entries {
    let entry = entry.with_context(|| format!("failed to read {}", out_dir.display()))?;
    let is_page_bucket =
      entry.file_name().to_str().is_some_and(|name| name.contains(PAGE_BUCKET_MARKER));
    let candidate = entry.path().join(BUILD_INFO_FILE);
    if is_page_bucket && candidate.is_file() {
      found.push(candidate);
    }
  }
  match found.len() {
    0 => bail!("no page bucket found in {} (pass --build-info)", out_dir.display()),
    1 => Ok(found.remove(0)),
    _ => {
      found.sort();
      let names: Vec<String> = found.iter().map(|p| p.display().to_string()).collect();
      bail!("several page buckets in {}, pass --build-info:\n  {}", out_dir.display(), names.join("\n  "))
    }
  }
}
