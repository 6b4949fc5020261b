/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{CONFIG_FILE, find_edge_config, load_edge_config, parse_edge_config};
pub use types::{BuildSection, EdgeConfig, ProjectConfig};
