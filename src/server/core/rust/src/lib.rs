/* src/server/core/rust/src/lib.rs */

pub mod build_id;
pub mod build_info;
pub mod dispatch;
pub mod dynamic;
pub mod errors;
pub mod registry;
pub mod server;

// Re-exports for ergonomic use
pub use http::HeaderName;
pub use build_id::{BuildId, InvalidBuildId, escape_build_id};
pub use build_info::{BuildInfo, BuildInfoError, load_build_info, parse_build_info};
pub use dispatch::{Dispatcher, PAGE_HINT_HEADER, PageHint, Resolution, Resolved};
pub use dynamic::{DynamicRoute, DynamicRouteDef};
pub use errors::DispatchError;
pub use registry::{PageRef, PageRegistry};
pub use server::{EdgeParts, EdgeServer};
