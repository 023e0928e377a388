//! GitHub API doubles for testing
//!
//! Wraps a [`wiremock::MockServer`] that answers the pull request endpoint with
//! canned payloads.

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A local stand-in for `api.github.com`
pub struct GitHubMock {
  pub server: MockServer,
}

impl GitHubMock {
  /// Start a fresh mock server
  pub async fn start() -> Self {
    Self {
      server: MockServer::start().await,
    }
  }

  /// Base URL to hand to the client under test
  pub fn uri(&self) -> String {
    self.server.uri()
  }

  /// Answer `GET /repos/{owner}/{repo}/pulls/{pr}` with `status` and a JSON
  /// body, expecting exactly `expected_calls` hits by the time the server is
  /// dropped
  pub async fn pull_request(&self, owner: &str, repo: &str, pr: &str, status: u16, body: Value, expected_calls: u64) {
    Mock::given(method("GET"))
      .and(path(format!("/repos/{owner}/{repo}/pulls/{pr}")))
      .respond_with(ResponseTemplate::new(status).set_body_json(body))
      .expect(expected_calls)
      .mount(&self.server)
      .await;
  }

  /// Answer the pull request endpoint with a raw, possibly non-JSON body
  pub async fn pull_request_raw(&self, owner: &str, repo: &str, pr: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
      .and(path(format!("/repos/{owner}/{repo}/pulls/{pr}")))
      .respond_with(ResponseTemplate::new(status).set_body_string(body))
      .expect(1)
      .mount(&self.server)
      .await;
  }

  /// Number of requests the server has seen so far
  pub async fn request_count(&self) -> usize {
    self
      .server
      .received_requests()
      .await
      .map(|requests| requests.len())
      .unwrap_or_default()
  }
}

/// A minimal pull request payload carrying the given label names
pub fn pull_request_body(number: u64, labels: &[&str]) -> Value {
  let labels: Vec<Value> = labels
    .iter()
    .enumerate()
    .map(|(id, name)| json!({ "id": id + 1, "name": name, "color": "ededed" }))
    .collect();

  json!({
    "number": number,
    "title": format!("Pull request #{number}"),
    "state": "open",
    "labels": labels,
  })
}
