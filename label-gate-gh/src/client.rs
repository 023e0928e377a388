//! # GitHub HTTP Client
//!
//! HTTP client implementation for GitHub API interactions, handling
//! authentication and the common headers every request carries.

use anyhow::{Context, Result};
use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::consts::{ACCEPT, API_BASE_URL, USER_AGENT};
use crate::models::GitHubAuth;

/// Represents a GitHub API client
pub struct GitHubClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: GitHubAuth,
}

impl GitHubClient {
  /// Create a new GitHub client for the public API
  pub fn new(auth: GitHubAuth) -> Self {
    Self::with_base_url(auth, API_BASE_URL)
  }

  /// Create a new GitHub client for a specific API host
  pub fn with_base_url(auth: GitHubAuth, base_url: &str) -> Self {
    Self {
      client: Client::new(),
      base_url: base_url.trim_end_matches('/').to_string(),
      auth,
    }
  }

  /// The API root every endpoint path is appended to
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Start a GET request with the standard headers and credentials applied
  pub(crate) fn get(&self, url: &str) -> RequestBuilder {
    let request = self
      .client
      .get(url)
      .header("Accept", ACCEPT)
      .header("User-Agent", USER_AGENT);

    match &self.auth.token {
      Some(token) => request.header("Authorization", format!("token {token}")),
      None => request,
    }
  }
}

/// Create a GitHub client from a token and API base URL
pub fn create_github_client(token: Option<&str>, base_url: &str) -> Result<GitHubClient> {
  Url::parse(base_url).with_context(|| format!("Invalid GitHub API URL: {base_url}"))?;

  let auth = GitHubAuth {
    token: token.filter(|t| !t.is_empty()).map(str::to_string),
  };

  Ok(GitHubClient::with_base_url(auth, base_url))
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{header, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  #[test]
  fn test_github_client_creation() {
    let client = GitHubClient::new(GitHubAuth {
      token: Some("test_token".to_string()),
    });

    assert_eq!(client.base_url(), "https://api.github.com");
    assert_eq!(client.auth.token.as_deref(), Some("test_token"));
  }

  #[test]
  fn test_create_github_client_trims_trailing_slash() -> Result<()> {
    let client = create_github_client(Some("t"), "https://github.example.com/api/v3/")?;
    assert_eq!(client.base_url(), "https://github.example.com/api/v3");
    Ok(())
  }

  #[test]
  fn test_create_github_client_treats_empty_token_as_anonymous() -> Result<()> {
    let client = create_github_client(Some(""), API_BASE_URL)?;
    assert!(client.auth.token.is_none());
    Ok(())
  }

  #[test]
  fn test_create_github_client_rejects_invalid_url() {
    let error = create_github_client(None, "not a url").err().unwrap();
    assert!(error.to_string().contains("Invalid GitHub API URL"));
  }

  /// Every request carries the token, Accept and User-Agent headers
  #[tokio::test]
  async fn test_github_client_headers() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client(Some("test_token"), &mock_server.uri())?;

    Mock::given(method("GET"))
      .and(path("/ping"))
      .and(header("Authorization", "token test_token"))
      .and(header("Accept", ACCEPT))
      .and(header("User-Agent", USER_AGENT))
      .respond_with(ResponseTemplate::new(200))
      .expect(1)
      .mount(&mock_server)
      .await;

    let response = client.get(&format!("{}/ping", client.base_url())).send().await?;

    assert!(response.status().is_success());
    Ok(())
  }

  #[tokio::test]
  async fn test_github_client_without_token_sends_no_authorization() -> Result<()> {
    let mock_server = MockServer::start().await;
    let client = create_github_client(None, &mock_server.uri())?;

    Mock::given(method("GET"))
      .and(path("/ping"))
      .and(|request: &wiremock::Request| !request.headers.contains_key("authorization"))
      .respond_with(ResponseTemplate::new(200))
      .expect(1)
      .mount(&mock_server)
      .await;

    let response = client.get(&format!("{}/ping", client.base_url())).send().await?;

    assert!(response.status().is_success());
    Ok(())
  }
}
