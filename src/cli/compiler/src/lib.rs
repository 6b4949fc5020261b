/* src/cli/compiler/src/lib.rs */

pub mod artifact;
pub mod compile;
pub mod error;
pub mod escape;
pub mod lambda;
pub mod manifest;
pub mod route;

pub use artifact::{LambdaBucket, PrerenderTarget, RoutingArtifact};
pub use compile::{CompileOptions, compile};
pub use error::{CompileError, ManifestKind};
pub use escape::{escape_path, normalize_hyphen_escapes};
pub use lambda::{LambdaKind, lambda_name};
pub use manifest::ManifestSet;
pub use route::{RouteEntry, RouteKind};
