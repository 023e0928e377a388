//! # Gate Configuration
//!
//! The environment is read once at startup into a [`CiEnvironment`] snapshot.
//! Command arguments and that snapshot are then merged into a [`GateConfig`],
//! which is all the gate ever looks at.

use std::env;

use crate::consts::{
  DEFAULT_BRANCHES, ENV_CI_BRANCH, ENV_CI_PROJECT_REPONAME, ENV_CI_PROJECT_USERNAME, ENV_CI_PULL_REQUEST,
  ENV_DEFAULT_BRANCHES, ENV_GH_TOKEN,
};
use crate::labels::RequiredLabels;
use crate::utils::split_list;

/// Snapshot of the CI-provided environment variables
///
/// Empty values are treated the same as unset ones.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CiEnvironment {
  pub token: Option<String>,
  pub branch: Option<String>,
  pub default_branches: Option<String>,
  pub project_username: Option<String>,
  pub project_reponame: Option<String>,
  pub pull_request_url: Option<String>,
}

impl CiEnvironment {
  /// Read the process environment
  pub fn from_env() -> Self {
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Build a snapshot from an arbitrary variable lookup
  pub fn from_lookup<F>(lookup: F) -> Self
  where
    F: Fn(&str) -> Option<String>,
  {
    let read = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

    Self {
      token: read(ENV_GH_TOKEN),
      branch: read(ENV_CI_BRANCH),
      default_branches: read(ENV_DEFAULT_BRANCHES),
      project_username: read(ENV_CI_PROJECT_USERNAME),
      project_reponame: read(ENV_CI_PROJECT_REPONAME),
      pull_request_url: read(ENV_CI_PULL_REQUEST),
    }
  }

  /// The branch policy this environment describes
  pub fn branch_policy(&self) -> BranchPolicy {
    let default_branches = self.default_branches.as_deref().unwrap_or(DEFAULT_BRANCHES);

    BranchPolicy {
      branch: self.branch.clone(),
      default_branches: split_list(default_branches).map(str::to_string).collect(),
    }
  }
}

/// Branches that are let through without a label check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchPolicy {
  /// Branch the build runs for, if the CI exposes one
  pub branch: Option<String>,
  pub default_branches: Vec<String>,
}

impl BranchPolicy {
  /// The current branch, if it is one of the default branches
  pub fn matching_default_branch(&self) -> Option<&str> {
    let branch = self.branch.as_deref()?;
    self
      .default_branches
      .iter()
      .any(|default| default == branch)
      .then_some(branch)
  }
}

/// Everything a single gate run needs, resolved up front
#[derive(Debug, Clone)]
pub struct GateConfig {
  pub organization: Option<String>,
  pub project: Option<String>,
  pub pull_request: Option<String>,
  pub required_labels: RequiredLabels,
  pub token: Option<String>,
  pub api_url: String,
  /// Only set in CI mode
  pub branch_policy: Option<BranchPolicy>,
}

#[cfg(test)]
mod tests {
  use std::collections::HashMap;

  use label_gate_test_utils::EnvVarGuard;

  use super::*;

  fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name: &str| map.get(name).cloned()
  }

  #[test]
  fn test_from_lookup_reads_all_variables() {
    let env = CiEnvironment::from_lookup(lookup_from(&[
      ("GH_TOKEN", "secret"),
      ("CIRCLE_BRANCH", "feature/x"),
      ("DEFAULT_BRANCHES", "main"),
      ("CIRCLE_PROJECT_USERNAME", "acme"),
      ("CIRCLE_PROJECT_REPONAME", "widgets"),
      ("CIRCLE_PULL_REQUEST", "https://github.com/acme/widgets/pull/42"),
    ]));

    assert_eq!(env.token.as_deref(), Some("secret"));
    assert_eq!(env.branch.as_deref(), Some("feature/x"));
    assert_eq!(env.default_branches.as_deref(), Some("main"));
    assert_eq!(env.project_username.as_deref(), Some("acme"));
    assert_eq!(env.project_reponame.as_deref(), Some("widgets"));
    assert_eq!(
      env.pull_request_url.as_deref(),
      Some("https://github.com/acme/widgets/pull/42")
    );
  }

  #[test]
  fn test_from_lookup_treats_empty_as_unset() {
    let env = CiEnvironment::from_lookup(lookup_from(&[("CIRCLE_BRANCH", ""), ("GH_TOKEN", "  ")]));

    assert_eq!(env, CiEnvironment::default());
  }

  #[test]
  fn test_from_env_reads_process_environment() {
    let _guard = EnvVarGuard::new(&[
      ("GH_TOKEN", Some("from-env")),
      ("CIRCLE_BRANCH", Some("staging")),
      ("DEFAULT_BRANCHES", None),
      ("CIRCLE_PROJECT_USERNAME", Some("acme")),
      ("CIRCLE_PROJECT_REPONAME", None),
      ("CIRCLE_PULL_REQUEST", None),
    ]);

    let env = CiEnvironment::from_env();
    assert_eq!(env.token.as_deref(), Some("from-env"));
    assert_eq!(env.branch.as_deref(), Some("staging"));
    assert_eq!(env.project_username.as_deref(), Some("acme"));
    assert!(env.project_reponame.is_none());
    assert!(env.pull_request_url.is_none());
  }

  #[test]
  fn test_branch_policy_uses_builtin_defaults() {
    let env = CiEnvironment {
      branch: Some("master".to_string()),
      ..Default::default()
    };

    let policy = env.branch_policy();
    assert_eq!(policy.default_branches, vec!["development", "staging", "master"]);
    assert_eq!(policy.matching_default_branch(), Some("master"));
  }

  #[test]
  fn test_branch_policy_uses_configured_list() {
    let env = CiEnvironment {
      branch: Some("master".to_string()),
      default_branches: Some("main, release".to_string()),
      ..Default::default()
    };

    let policy = env.branch_policy();
    assert_eq!(policy.default_branches, vec!["main", "release"]);
    assert_eq!(policy.matching_default_branch(), None);
  }

  #[test]
  fn test_branch_policy_without_branch_never_matches() {
    let policy = CiEnvironment::default().branch_policy();
    assert_eq!(policy.matching_default_branch(), None);
  }

  #[test]
  fn test_branch_policy_is_exact() {
    let policy = BranchPolicy {
      branch: Some("master-hotfix".to_string()),
      default_branches: vec!["master".to_string()],
    };
    assert_eq!(policy.matching_default_branch(), None);
  }
}
