/* src/server/core/rust/src/dynamic.rs */

use std::collections::BTreeMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Serialized dynamic route: named-capture pattern plus destination template,
/// e.g. `^/posts/(?<postId>[^/]+?)(?:/)?$` -> `/posts/[postId]?postId=$postId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicRouteDef {
  pub src: String,
  pub dest: String,
}

/// A `DynamicRouteDef` with its pattern compiled once, at load time.
#[derive(Debug, Clone)]
pub struct DynamicRoute {
  matcher: Regex,
  dest: String,
}

impl DynamicRoute {
  pub fn compile(def: &DynamicRouteDef) -> Result<Self, regex::Error> {
    Ok(Self { matcher: Regex::new(&def.src)?, dest: def.dest.clone() })
  }

  pub fn src(&self) -> &str {
    self.matcher.as_str()
  }

  pub fn dest(&self) -> &str {
    &self.dest
  }

  pub fn is_match(&self, path: &str) -> bool {
    self.matcher.is_match(path)
  }

  /// Path component of the destination: the canonical page key.
  pub fn dest_page(&self) -> &str {
    let end = self.dest.find(['?', '#']).unwrap_or(self.dest.len());
    &self.dest[..end]
  }

  /// Query parameters the destination derives from `path`, keyed by query name.
  /// `postId=$postId` against `/posts/hello` yields `{postId: hello}`.
  pub fn params(&self, path: &str) -> Option<BTreeMap<String, String>> {
    let caps = self.matcher.captures(path)?;
    let mut params = BTreeMap::new();
    let Some((_, query)) = self.dest.split_once('?') else { return Some(params) };
    for pair in query.split('&').filter(|p| !p.is_empty()) {
      let (name, template) = pair.split_once('=').unwrap_or((pair, ""));
      let value = match template.strip_prefix('$') {
        Some(group) => caps.name(group).map_or("", |m| m.as_str()),
        None => template,
      };
      params.insert(name.to_string(), value.to_string());
    }
    Some(params)
  }
}
