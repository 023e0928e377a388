use reqwest::StatusCode;
use serde::{Deserialize, Deserializer};

/// Represents GitHub authentication credentials
#[derive(Clone, Default)]
pub struct GitHubAuth {
  /// Personal access or installation token; requests go out anonymously when
  /// absent
  pub token: Option<String>,
}

/// Represents a label attached to a GitHub issue or pull request
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitHubLabel {
  pub name: String,
  pub id: Option<u64>,
  pub color: Option<String>,
  pub description: Option<String>,
}

/// The part of a GitHub pull request payload that carries its labels
#[derive(Debug, Default, Deserialize)]
pub struct PullRequestLabels {
  pub number: Option<u64>,
  pub title: Option<String>,
  #[serde(default, deserialize_with = "null_as_empty")]
  pub labels: Vec<GitHubLabel>,
}

impl PullRequestLabels {
  /// Label names in response order
  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.labels.iter().map(|label| label.name.as_str())
  }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<GitHubLabel>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<Vec<GitHubLabel>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Status and undecoded body of a GitHub API response
#[derive(Debug, Clone)]
pub struct RawResponse {
  pub status: StatusCode,
  pub body: Vec<u8>,
}

impl RawResponse {
  /// Only a plain 200 counts as a usable response
  pub fn is_ok(&self) -> bool {
    self.status == StatusCode::OK
  }
}
