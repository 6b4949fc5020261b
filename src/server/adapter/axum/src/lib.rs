/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;
mod renderer;

use std::sync::Arc;

use edgeroute_server::EdgeServer;

/// Re-export edgeroute-server core for convenience
pub use edgeroute_server;
pub use error::AxumError;
pub use renderer::{BoxFuture, PageRenderer, RenderRequest};

/// Extension trait that converts an `EdgeServer` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self, renderer: Arc<dyn PageRenderer>) -> axum::Router;
  fn serve(
    self,
    addr: &str,
    renderer: Arc<dyn PageRenderer>,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for EdgeServer {
  fn into_axum_router(self, renderer: Arc<dyn PageRenderer>) -> axum::Router {
    handler::build_router(self.into_parts(), renderer)
  }

  async fn serve(
    self,
    addr: &str,
    renderer: Arc<dyn PageRenderer>,
  ) -> Result<(), Box<dyn std::error::Error>> {
    let pages = self.dispatcher().registry().len();
    let router = self.into_axum_router(renderer);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(port = local_addr.port(), pages, "edgeroute bucket listening");
    axum::serve(listener, router).await?;
    Ok(())
  }
}
