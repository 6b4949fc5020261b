/* src/server/core/rust/src/server.rs */

use std::sync::Arc;

use http::HeaderName;

use crate::build_info::{BuildInfo, BuildInfoError};
use crate::dispatch::{Dispatcher, PAGE_HINT_HEADER};

/// Framework-agnostic parts extracted from `EdgeServer`.
/// Adapter crates consume this to build framework-specific routers.
pub struct EdgeParts {
  pub dispatcher: Arc<Dispatcher>,
  pub hint_header: HeaderName,
}

pub struct EdgeServer {
  dispatcher: Arc<Dispatcher>,
  hint_header: HeaderName,
}

impl EdgeServer {
  pub fn new(dispatcher: Dispatcher) -> Self {
    Self {
      dispatcher: Arc::new(dispatcher),
      hint_header: HeaderName::from_static(PAGE_HINT_HEADER),
    }
  }

  pub fn from_build_info(info: &BuildInfo) -> Result<Self, BuildInfoError> {
    Ok(Self::new(Dispatcher::from_build_info(info)?))
  }

  /// Override the page hint header name.
  pub fn hint_header(mut self, name: HeaderName) -> Self {
    self.hint_header = name;
    self
  }

  pub fn dispatcher(&self) -> &Dispatcher {
    &self.dispatcher
  }

  /// Consume the builder, returning framework-agnostic parts for an adapter.
  pub fn into_parts(self) -> EdgeParts {
    EdgeParts { dispatcher: self.dispatcher, hint_header: self.hint_header }
  }
}
