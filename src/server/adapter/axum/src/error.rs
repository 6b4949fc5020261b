/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use edgeroute_server::DispatchError;

/// Dispatch failure rendered as the JSON error envelope.
#[derive(Debug)]
pub struct AxumError(pub DispatchError);

impl From<DispatchError> for AxumError {
  fn from(err: DispatchError) -> Self {
    Self(err)
  }
}

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let status =
      StatusCode::from_u16(self.0.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::json!({
      "ok": false,
      "error": { "code": self.0.code(), "message": self.0.message(), "transient": false }
    });
    (status, axum::Json(body)).into_response()
  }
}
