/* src/cli/compiler/src/lambda.rs */

use std::fmt;

use edgeroute_server::BuildId;

use crate::error::CompileError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LambdaKind {
  Api,
  Page,
}

impl LambdaKind {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Api => "api",
      Self::Page => "page",
    }
  }
}

impl fmt::Display for LambdaKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// `<project>-next-<kind>-<buildId>`
pub fn lambda_name(project: &str, kind: LambdaKind, build_id: &BuildId) -> String {
  format!("{project}-next-{kind}-{build_id}")
}

pub fn validate_project_name(name: &str) -> Result<(), CompileError> {
  if name.is_empty() || name.contains('/') || name.chars().any(char::is_whitespace) {
    return Err(CompileError::ProjectName(name.to_string()));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn names_follow_project_kind_build() {
    let id = BuildId::parse("aabbcc").unwrap();
    assert_eq!(lambda_name("site", LambdaKind::Api, &id), "site-next-api-aabbcc");
    assert_eq!(lambda_name("site", LambdaKind::Page, &id), "site-next-page-aabbcc");
  }

  #[test]
  fn project_name_rules() {
    assert!(validate_project_name("my-site").is_ok());
    for bad in ["", "a/b", "my site"] {
      assert!(matches!(validate_project_name(bad), Err(CompileError::ProjectName(_))), "{bad:?}");
    }
  }
}
