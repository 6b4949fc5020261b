/* src/server/adapter/axum/src/handler/mod.rs */

mod page;

use std::sync::Arc;

use axum::Router;
use axum::http::HeaderName;
use edgeroute_server::{Dispatcher, EdgeParts};

use crate::renderer::PageRenderer;

pub(crate) struct AppState {
  pub dispatcher: Arc<Dispatcher>,
  pub hint_header: HeaderName,
  pub renderer: Arc<dyn PageRenderer>,
}

pub(crate) fn build_router(parts: EdgeParts, renderer: Arc<dyn PageRenderer>) -> Router {
  let state = Arc::new(AppState {
    dispatcher: parts.dispatcher,
    hint_header: parts.hint_header,
    renderer,
  });

  // Every path goes through the dispatcher; the edge layer already decided
  // this bucket owns the request.
  Router::new().fallback(page::handle_page).with_state(state)
}
