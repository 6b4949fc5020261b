/* src/cli/core/src/config/types.rs */

use std::path::{Component, Path};

use anyhow::{Result, bail};
use edgeroute_compiler::CompileOptions;
use edgeroute_compiler::lambda::validate_project_name;
use edgeroute_server::{DynamicRoute, DynamicRouteDef};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct EdgeConfig {
  pub project: ProjectConfig,
  #[serde(default)]
  pub build: BuildSection,
  /// Pass-through dynamic routes placed right after prerendered pages.
  #[serde(default)]
  pub routes: Vec<DynamicRouteDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildSection {
  #[serde(default = "default_input_dir")]
  pub input_dir: String,
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
}

impl BuildSection {
  /// `out_dir` is wiped on every build: a plain relative directory outside `input_dir`.
  fn validate(&self) -> Result<()> {
    let out_dir = Path::new(&self.out_dir);
    let plain = out_dir.components().all(|c| matches!(c, Component::Normal(_)));
    if self.out_dir.is_empty() || !plain {
      bail!("build.out_dir {:?} must be a relative path without `.` or `..`", self.out_dir);
    }
    if Path::new(&self.input_dir).starts_with(out_dir) {
      bail!(
        "build.out_dir {:?} must not contain build.input_dir {:?}",
        self.out_dir,
        self.input_dir
      );
    }
    Ok(())
  }
}

impl Default for BuildSection {
  fn default() -> Self {
    Self { input_dir: default_input_dir(), out_dir: default_out_dir() }
  }
}

fn default_input_dir() -> String {
  ".serverless_nextjs".to_string()
}

fn default_out_dir() -> String {
  "build".to_string()
}

impl EdgeConfig {
  pub fn validate(&self) -> Result<()> {
    validate_project_name(&self.project.name)?;
    self.build.validate()?;
    for (i, route) in self.routes.iter().enumerate() {
      if let Err(e) = DynamicRoute::compile(route) {
        bail!("routes[{i}].src {:?} is not a valid pattern: {e}", route.src);
      }
    }
    Ok(())
  }

  pub fn compile_options(&self) -> CompileOptions {
    CompileOptions { project: self.project.name.clone(), extra_routes: self.routes.clone() }
  }
}
