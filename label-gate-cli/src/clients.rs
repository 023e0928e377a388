//! # Client Creation
//!
//! Connects the gate to the real GitHub API. The runtime and client are only
//! built when the gate actually asks for a pull request.

use anyhow::{Context, Result};
use label_gate_gh::{RawResponse, create_github_client};
use tokio::runtime::Runtime;

use crate::config::GateConfig;
use crate::gate::PullRequestSource;

/// Fetches pull requests from the GitHub REST API
pub struct GitHubSource {
  token: Option<String>,
  api_url: String,
}

impl GitHubSource {
  pub fn new(token: Option<String>, api_url: impl Into<String>) -> Self {
    Self {
      token,
      api_url: api_url.into(),
    }
  }

  /// Source using the token and API host of a resolved configuration
  pub fn from_config(config: &GateConfig) -> Self {
    Self::new(config.token.clone(), config.api_url.clone())
  }
}

impl PullRequestSource for GitHubSource {
  fn fetch_pull_request(&self, owner: &str, repo: &str, pr_number: &str) -> Result<RawResponse> {
    let rt = Runtime::new().context("Failed to create async runtime")?;
    let client = create_github_client(self.token.as_deref(), &self.api_url).context("Failed to create GitHub client")?;

    rt.block_on(client.fetch_pull_request(owner, repo, pr_number))
  }
}
