/* src/cli/core/src/build/mod.rs */

// `edgeroute build`: read the framework manifests, compile the routing
// table and write proxy-config.json plus one build-info.json per bucket.

mod manifests;
mod output;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use edgeroute_compiler::{RouteKind, RoutingArtifact, compile};

use crate::config::EdgeConfig;
use crate::ui::{self, DIM, RESET};

pub use manifests::read_manifests;
pub use output::{BUILD_INFO_FILE, PROXY_CONFIG_FILE, write_artifacts};

pub fn run_build(config: &EdgeConfig, base_dir: &Path) -> Result<()> {
  let started = Instant::now();
  let input_dir = base_dir.join(&config.build.input_dir);
  let out_dir = base_dir.join(&config.build.out_dir);

  ui::banner("build");

  ui::step(1, 3, "reading manifests");
  let manifests = read_manifests(&input_dir)?;
  ui::detail_ok(&format!("{}  {DIM}(build {}){RESET}", input_dir.display(), manifests.pages.build_id));

  ui::step(2, 3, "compiling routing table");
  let artifact = compile(&manifests, &config.compile_options())
    .with_context(|| format!("failed to compile routes for {}", config.project.name))?;
  print_summary(&artifact);

  ui::step(3, 3, "writing artifacts");
  write_artifacts(&artifact, &out_dir)?;

  tracing::info!(
    build_id = %artifact.build_id,
    routes = artifact.routes.len(),
    buckets = artifact.buckets.len(),
    "build finished"
  );
  ui::ok(&format!("build complete in {:.2}s", started.elapsed().as_secs_f64()));
  Ok(())
}

fn print_summary(artifact: &RoutingArtifact) {
  let count = |kind: RouteKind| artifact.routes.iter().filter(|r| r.kind() == kind).count();
  ui::detail_ok(&format!(
    "{} routes  {DIM}({} api, {} data, {} ssr, {} prerendered, {} dynamic){RESET}",
    artifact.routes.len(),
    count(RouteKind::Api),
    count(RouteKind::Data),
    count(RouteKind::SsrPage),
    count(RouteKind::Prerendered),
    count(RouteKind::Dynamic),
  ));
  ui::detail_ok(&format!(
    "{} static paths, {} prerender entries",
    artifact.static_paths.len(),
    artifact.prerenders.len()
  ));
  if artifact.buckets.is_empty() {
    ui::warn("no lambda buckets emitted; every route is static");
  }
  for bucket in &artifact.buckets {
    ui::detail(&format!("{} {DIM}({} pages){RESET}", bucket.name, bucket.build_info.pages.len()));
  }
}
