/* src/server/core/rust/src/build_info/mod.rs */

// Per-bucket build output: the page table and dynamic routes a lambda bucket serves.
// Written by the compiler as build-info.json, loaded once at startup.

mod loader;
mod types;


pub use loader::{BuildInfoError, load_build_info, parse_build_info};
pub use types::BuildInfo;
