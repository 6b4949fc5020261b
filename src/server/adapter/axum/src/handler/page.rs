/* src/server/adapter/axum/src/handler/page.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::uri::PathAndQuery;
use axum::http::{HeaderMap, HeaderValue, Uri};
use axum::response::Response;
use edgeroute_server::{DispatchError, PageHint};

use super::AppState;
use crate::error::AxumError;
use crate::renderer::RenderRequest;

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  uri: Uri,
  headers: HeaderMap,
) -> Result<Response, AxumError> {
  let hint_values = headers
    .get_all(&state.hint_header)
    .iter()
    .map(HeaderValue::to_str)
    .collect::<Result<Vec<_>, _>>()
    .map_err(|_| DispatchError::bad_request("Page hint header is not valid UTF-8"))?;
  let url = uri.path_and_query().map_or("/", PathAndQuery::as_str);

  let resolved = state.dispatcher.resolve(PageHint::from_values(hint_values), url)?;
  let request = RenderRequest {
    page: resolved.page.clone(),
    resolution: resolved.resolution,
    params: resolved.params,
    uri,
    headers,
  };
  Ok(state.renderer.render(request).await?)
}
