/* src/cli/compiler/src/escape.rs */

/// Escape `-`, `[` and `]` so a literal page path can sit inside a route regex.
/// Everything else is left as is.
pub fn escape_path(segment: &str) -> String {
  let mut out = String::with_capacity(segment.len() + 4);
  for c in segment.chars() {
    if matches!(c, '-' | '[' | ']') {
      out.push('\\');
    }
    out.push(c);
  }
  out
}

/// `^<escaped path>/?$`: the path itself, with or without one trailing slash.
pub fn literal_pattern(path: &str) -> String {
  format!("^{}/?$", escape_path(path))
}

/// Leave every `-` in a manifest regex escaped exactly once.
/// Already-escaped hyphens are unescaped first so they do not end up doubled.
pub fn normalize_hyphen_escapes(pattern: &str) -> String {
  pattern.replace(r"\-", "-").replace('-', r"\-")
}
