//! # GitHub Pull Request Endpoints
//!
//! Fetches a single pull request. The body is handed back undecoded together
//! with the status so the caller decides what counts as usable.

use anyhow::{Context, Result};
use tracing::debug;

use crate::client::GitHubClient;
use crate::models::RawResponse;

impl GitHubClient {
  /// Get a specific pull request
  ///
  /// Only transport failures are errors here; a 404 or 500 comes back as a
  /// [`RawResponse`] with that status.
  pub async fn fetch_pull_request(&self, owner: &str, repo: &str, pr_number: &str) -> Result<RawResponse> {
    let url = format!("{}/repos/{}/{}/pulls/{}", self.base_url, owner, repo, pr_number);
    debug!(url = %url, "Fetching pull request");

    let response = self.get(&url).send().await.context("Failed to fetch pull request")?;

    let status = response.status();
    let body = response
      .bytes()
      .await
      .context("Failed to read response body")?
      .to_vec();

    debug!(status = %status, bytes = body.len(), "GitHub responded");
    Ok(RawResponse { status, body })
  }
}
