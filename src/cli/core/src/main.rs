/* src/cli/core/src/main.rs */

mod build;
mod config;
mod resolve;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::{EdgeConfig, find_edge_config, load_edge_config};

#[derive(Parser)]
#[command(name = "edgeroute", about = "Edge routing table compiler", version)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Compile framework manifests into proxy-config.json and bucket build info
  Build {
    /// Path to edgeroute.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Show which page a request URL resolves to in a bucket
  Resolve {
    /// Request URL or path (e.g. /posts/hello?ref=feed)
    url: String,
    /// Page hint header value; repeat to simulate a duplicated header
    #[arg(short, long = "page")]
    page: Vec<String>,
    /// Path to a bucket's build-info.json (defaults to the page bucket in out_dir)
    #[arg(short, long)]
    build_info: Option<PathBuf>,
    /// Path to edgeroute.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, EdgeConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_edge_config(&cwd)?
    }
  };
  let config = load_edge_config(&path)?;
  Ok((path, config))
}

fn init_tracing() {
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "edgeroute=info".into()))
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();
}

fn main() -> Result<()> {
  init_tracing();
  let cli = Cli::parse();

  match cli.command {
    Command::Build { config } => {
      let (config_path, edge_config) = resolve_config(config)?;
      let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
      build::run_build(&edge_config, base_dir)?;
    }
    Command::Resolve { url, page, build_info, config } => {
      let build_info = match build_info {
        Some(p) => p,
        None => {
          let (config_path, edge_config) = resolve_config(config)?;
          let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));
          resolve::find_page_build_info(&base_dir.join(&edge_config.build.out_dir))?
        }
      };
      resolve::run_resolve(&url, &page, &build_info)?;
    }
  }

  Ok(())
}
