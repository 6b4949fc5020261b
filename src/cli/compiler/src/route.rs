/* src/cli/compiler/src/route.rs */

use std::collections::BTreeMap;

use edgeroute_server::PAGE_HINT_HEADER;
use serde::{Serialize, Serializer};

/// One row of the edge routing table. Order in the table is significant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteEntry {
  Redirect { src: String, location: String, status: u16, continue_matching: bool },
  /// Resume filesystem-style routing.
  Filesystem,
  Api { src: String, lambda: String, page: String },
  Data { src: String, page: String },
  SsrPage { src: String, lambda: String, page: String },
  Prerendered { src: String, lambda: String, page: String },
  Dynamic { src: String, dest: String },
  /// Literal route for a dynamic page's canonical key.
  DynamicPage { src: String, lambda: String, page: String },
  Hit,
  Error,
  Fallback { src: String, status: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteKind {
  Redirect,
  Filesystem,
  Api,
  Data,
  SsrPage,
  Prerendered,
  Dynamic,
  DynamicPage,
  Hit,
  Error,
  Fallback,
}

pub const FALLBACK_DEST: &str = "/404";

impl RouteEntry {
  pub fn kind(&self) -> RouteKind {
    match self {
      Self::Redirect { .. } => RouteKind::Redirect,
      Self::Filesystem => RouteKind::Filesystem,
      Self::Api { .. } => RouteKind::Api,
      Self::Data { .. } => RouteKind::Data,
      Self::SsrPage { .. } => RouteKind::SsrPage,
      Self::Prerendered { .. } => RouteKind::Prerendered,
      Self::Dynamic { .. } => RouteKind::Dynamic,
      Self::DynamicPage { .. } => RouteKind::DynamicPage,
      Self::Hit => RouteKind::Hit,
      Self::Error => RouteKind::Error,
      Self::Fallback { .. } => RouteKind::Fallback,
    }
  }

  /// Match pattern, `None` for sentinels.
  pub fn src(&self) -> Option<&str> {
    match self {
      Self::Redirect { src, .. }
      | Self::Api { src, .. }
      | Self::Data { src, .. }
      | Self::SsrPage { src, .. }
      | Self::Prerendered { src, .. }
      | Self::Dynamic { src, .. }
      | Self::DynamicPage { src, .. }
      | Self::Fallback { src, .. } => Some(src),
      Self::Filesystem | Self::Hit | Self::Error => None,
    }
  }

  fn to_wire(&self) -> WireRoute<'_> {
    match self {
      Self::Redirect { src, location, status, continue_matching } => WireRoute {
        src: Some(src),
        headers: Some(BTreeMap::from([("Location", location.as_str())])),
        status: Some(*status),
        continue_matching: Some(*continue_matching),
        ..WireRoute::default()
      },
      Self::Filesystem => WireRoute::handle("filesystem"),
      Self::Hit => WireRoute::handle("hit"),
      Self::Error => WireRoute::handle("error"),
      Self::Api { src, lambda, page }
      | Self::SsrPage { src, lambda, page }
      | Self::Prerendered { src, lambda, page }
      | Self::DynamicPage { src, lambda, page } => WireRoute {
        src: Some(src),
        dest: Some(lambda),
        headers: Some(BTreeMap::from([(PAGE_HINT_HEADER, page.as_str())])),
        check: Some(true),
        ..WireRoute::default()
      },
      Self::Data { src, page } => {
        WireRoute { src: Some(src), dest: Some(page), check: Some(true), ..WireRoute::default() }
      }
      Self::Dynamic { src, dest } => {
        WireRoute { src: Some(src), dest: Some(dest), check: Some(true), ..WireRoute::default() }
      }
      Self::Fallback { src, status } => WireRoute {
        src: Some(src),
        dest: Some(FALLBACK_DEST),
        status: Some(*status),
        ..WireRoute::default()
      },
    }
  }
}

/// JSON shape consumed by the edge layer.
#[derive(Default, Serialize)]
struct WireRoute<'a> {
  #[serde(skip_serializing_if = "Option::is_none")]
  src: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  dest: Option<&'a str>,
  #[serde(skip_serializing_if = "Option::is_none")]
  headers: Option<BTreeMap<&'a str, &'a str>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  status: Option<u16>,
  #[serde(skip_serializing_if = "Option::is_none")]
  check: Option<bool>,
  #[serde(rename = "continue", skip_serializing_if = "Option::is_none")]
  continue_matching: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  handle: Option<&'a str>,
}

impl WireRoute<'_> {
  fn handle(name: &'static str) -> Self {
    Self { handle: Some(name), ..Self::default() }
  }
}

impl Serialize for RouteEntry {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.to_wire().serialize(serializer)
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn sentinel_serializes_to_handle() {
    assert_eq!(serde_json::to_value(RouteEntry::Filesystem).unwrap(), json!({"handle": "filesystem"}));
    assert_eq!(serde_json::to_value(RouteEntry::Hit).unwrap(), json!({"handle": "hit"}));
    assert_eq!(serde_json::to_value(RouteEntry::Error).unwrap(), json!({"handle": "error"}));
  }

  #[test]
  fn redirect_shape() {
    let entry = RouteEntry::Redirect {
      src: "^/a/$".to_string(),
      location: "/$1".to_string(),
      status: 308,
      continue_matching: true,
    };
    assert_eq!(
      serde_json::to_value(entry).unwrap(),
      json!({"src": "^/a/$", "headers": {"Location": "/$1"}, "status": 308, "continue": true})
    );
  }

  #[test]
  fn lambda_route_shape() {
    let entry = RouteEntry::Api {
      src: r"^/api/hello\-world/?$".to_string(),
      lambda: "/site-next-api-abc".to_string(),
      page: "/api/hello-world".to_string(),
    };
    assert_eq!(
      serde_json::to_value(entry).unwrap(),
      json!({
        "src": r"^/api/hello\-world/?$",
        "dest": "/site-next-api-abc",
        "headers": {"x-nextjs-page": "/api/hello-world"},
        "check": true
      })
    );
  }

  #[test]
  fn fallback_shape() {
    let entry = RouteEntry::Fallback { src: "/.*".to_string(), status: 404 };
    assert_eq!(
      serde_json::to_value(entry).unwrap(),
      json!({"src": "/.*", "dest": "/404", "status": 404})
    );
  }

  #[test]
  fn field_order_is_stable() {
    let entry = RouteEntry::Dynamic { src: "^/x$".to_string(), dest: "/x".to_string() };
    assert_eq!(serde_json::to_string(&entry).unwrap(), r#"{"src":"^/x$","dest":"/x","check":true}"#);
  }

  #[test]
  fn src_is_none_for_sentinels() {
    assert_eq!(RouteEntry::Hit.src(), None);
    assert_eq!(RouteEntry::Data { src: "^a$".into(), page: "/a".into() }.src(), Some("^a$"));
  }
}
