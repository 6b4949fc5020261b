/* src/server/adapter/axum/src/renderer.rs */

use std::collections::BTreeMap;
use std::future::Future;
use std::pin::Pin;

use axum::http::{HeaderMap, Uri};
use axum::response::Response;
use edgeroute_server::{DispatchError, PageRef, Resolution};

pub type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

/// Everything a renderer needs once the page is known.
#[derive(Debug, Clone)]
pub struct RenderRequest {
  pub page: PageRef,
  pub resolution: Resolution,
  pub params: BTreeMap<String, String>,
  pub uri: Uri,
  pub headers: HeaderMap,
}

/// Invokes the handler behind a resolved page. Supplied by the application.
pub trait PageRenderer: Send + Sync + 'static {
  fn render(&self, request: RenderRequest) -> BoxFuture<Result<Response, DispatchError>>;
}

impl<F> PageRenderer for F
where
  F: Fn(RenderRequest) -> BoxFuture<Result<Response, DispatchError>> + Send + Sync + 'static,
{
  fn render(&self, request: RenderRequest) -> BoxFuture<Result<Response, DispatchError>> {
    self(request)
  }
}
