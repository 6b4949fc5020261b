/* src/server/core/rust/src/errors.rs */

use std::fmt;

/// Outcome of a dispatch that did not produce a page.
/// Client errors carry a 4xx status; everything else is a 500-class fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchError {
  code: String,
  message: String,
  status: u16,
}

fn default_status(code: &str) -> u16 {
  match code {
    "BAD_REQUEST" => 400,
    "NO_MATCHING_PAGE" => 500,
    "INTERNAL_ERROR" => 500,
    _ => 500,
  }
}

impl DispatchError {
  pub fn new(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
    Self { code: code.into(), message: message.into(), status }
  }

  pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
    let code = code.into();
    let status = default_status(&code);
    Self { code, message: message.into(), status }
  }

  pub fn bad_request(msg: impl Into<String>) -> Self {
    Self::with_code("BAD_REQUEST", msg)
  }

  /// The compiled table implied a page that this bucket does not carry.
  pub fn no_matching_page(msg: impl Into<String>) -> Self {
    Self::with_code("NO_MATCHING_PAGE", msg)
  }

  pub fn internal(msg: impl Into<String>) -> Self {
    Self::with_code("INTERNAL_ERROR", msg)
  }

  pub fn code(&self) -> &str {
    &self.code
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn status(&self) -> u16 {
    self.status
  }

  pub fn is_client_error(&self) -> bool {
    (400..500).contains(&self.status)
  }
}

impl fmt::Display for DispatchError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}: {}", self.code, self.message)
  }
}

impl std::error::Error for DispatchError {}
