/* src/server/core/rust/src/registry.rs */

use std::collections::HashMap;

/// A page a bucket can serve: its canonical key (e.g. `/posts/[postId]`)
/// and the bundle-relative module that renders it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRef {
  pub key: String,
  pub loader: String,
}

/// Canonical page key -> page. Built once per bucket, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct PageRegistry {
  pages: HashMap<String, PageRef>,
}

impl PageRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register a page, returning the previous entry for the same key.
  pub fn insert(&mut self, key: impl Into<String>, loader: impl Into<String>) -> Option<PageRef> {
    let key = key.into();
    let page = PageRef { key: key.clone(), loader: loader.into() };
    self.pages.insert(key, page)
  }

  pub fn get(&self, key: &str) -> Option<&PageRef> {
    self.pages.get(key)
  }

  pub fn contains(&self, key: &str) -> bool {
    self.pages.contains_key(key)
  }

  pub fn len(&self) -> usize {
    self.pages.len()
  }

  pub fn is_empty(&self) -> bool {
    self.pages.is_empty()
  }

  /// Sorted keys, for diagnostics.
  pub fn keys(&self) -> Vec<&str> {
    let mut keys: Vec<&str> = self.pages.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
  }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PageRegistry {
  fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
    let mut registry = Self::new();
    for (key, loader) in iter {
      registry.insert(key, loader);
    }
    registry
  }
}
