//! # Direct Mode
//!
//! Every parameter is an explicit positional argument.

use clap::Args;

use crate::config::{CiEnvironment, GateConfig};
use crate::labels::{RequiredLabels, parse_required_labels};

/// Arguments for `label-gate check`
#[derive(Args, Debug)]
pub struct CheckArgs {
  /// Organization or user owning the repository
  #[arg(index = 1, value_name = "ORG")]
  pub org: String,

  /// Repository name
  #[arg(index = 2, value_name = "PROJECT")]
  pub project: String,

  /// Pull request number
  #[arg(index = 3, value_name = "PR")]
  pub pr: String,

  /// Comma-separated labels the pull request must carry (e.g. "bug,ready-for-review")
  #[arg(index = 4, value_name = "LABELS", value_parser = parse_required_labels)]
  pub labels: RequiredLabels,
}

impl CheckArgs {
  /// Only the token is taken from the environment
  pub fn resolve(&self, env: &CiEnvironment, api_url: &str) -> GateConfig {
    GateConfig {
      organization: Some(self.org.clone()),
      project: Some(self.project.clone()),
      pull_request: Some(self.pr.clone()),
      required_labels: self.labels.clone(),
      token: env.token.clone(),
      api_url: api_url.to_string(),
      branch_policy: None,
    }
  }
}
