//! # CI Mode
//!
//! Resolves the pull request from the CI build environment, with explicit
//! options as a fallback.

use clap::Args;
use label_gate_gh::pull_request_id_from_url;

use crate::config::{CiEnvironment, GateConfig};
use crate::labels::{RequiredLabels, parse_required_labels};

/// Arguments for `label-gate ci`
#[derive(Args, Debug)]
pub struct CiArgs {
  /// Comma-separated labels the pull request must carry (e.g. "bug,ready-for-review")
  #[arg(index = 1, value_name = "LABELS", value_parser = parse_required_labels)]
  pub labels: RequiredLabels,

  /// Organization or user owning the repository, when CIRCLE_PROJECT_USERNAME is unset
  #[arg(long, value_name = "ORG")]
  pub org: Option<String>,

  /// Repository name, when CIRCLE_PROJECT_REPONAME is unset
  #[arg(long, value_name = "PROJECT")]
  pub project: Option<String>,

  /// Pull request number, when CIRCLE_PULL_REQUEST is unset
  #[arg(long, value_name = "PR")]
  pub pr: Option<String>,
}

impl CiArgs {
  /// Environment values win; options fill whatever the CI did not provide
  pub fn resolve(&self, env: &CiEnvironment, api_url: &str) -> GateConfig {
    let pull_request = env
      .pull_request_url
      .as_deref()
      .and_then(pull_request_id_from_url)
      .map(str::to_string)
      .or_else(|| self.pr.clone());

    GateConfig {
      organization: env.project_username.clone().or_else(|| self.org.clone()),
      project: env.project_reponame.clone().or_else(|| self.project.clone()),
      pull_request,
      required_labels: self.labels.clone(),
      token: env.token.clone(),
      api_url: api_url.to_string(),
      branch_policy: Some(env.branch_policy()),
    }
  }
}
