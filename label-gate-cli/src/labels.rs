//! # Label Matching
//!
//! Parses the required label list and counts how many of those labels a pull
//! request actually carries.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use label_gate_gh::PullRequestLabels;

use crate::utils::split_list;

/// The labels a pull request must carry, deduplicated
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredLabels(BTreeSet<String>);

impl RequiredLabels {
  /// Build the set from a comma-separated list such as `"bug,ready-for-review"`
  pub fn parse(value: &str) -> Self {
    Self(split_list(value).map(str::to_string).collect())
  }

  pub fn contains(&self, name: &str) -> bool {
    self.0.contains(name)
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.0.iter().map(String::as_str)
  }
}

impl fmt::Display for RequiredLabels {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let labels: Vec<&str> = self.iter().collect();
    write!(f, "{}", labels.join(","))
  }
}

/// Clap value parser for the `<labels>` argument
pub fn parse_required_labels(value: &str) -> Result<RequiredLabels, String> {
  let labels = RequiredLabels::parse(value);
  if labels.is_empty() {
    return Err("at least one label is required".to_string());
  }
  Ok(labels)
}

/// How many of the required labels a pull request carries
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
  /// Required labels found on the pull request, in response order
  pub found: Vec<String>,
  pub required_count: usize,
}

impl MatchResult {
  pub fn found_count(&self) -> usize {
    self.found.len()
  }

  /// True when every required label was found
  pub fn is_complete(&self) -> bool {
    self.found_count() == self.required_count
  }
}

/// Match the labels of a decoded pull request against the required set
///
/// A label listed twice in the response still counts once.
pub fn match_labels(pull_request: &PullRequestLabels, required: &RequiredLabels) -> MatchResult {
  let mut seen = HashSet::new();
  let found = pull_request
    .names()
    .filter(|name| required.contains(name) && seen.insert(*name))
    .map(str::to_string)
    .collect();

  MatchResult {
    found,
    required_count: required.len(),
  }
}

/// Decode a pull request body and match its labels against the required set
///
/// A body without a `labels` field has no labels. A body that is not a JSON
/// pull request object is an error.
pub fn count_matches(body: &[u8], required: &RequiredLabels) -> Result<MatchResult, serde_json::Error> {
  let pull_request: PullRequestLabels = serde_json::from_slice(body)?;
  Ok(match_labels(&pull_request, required))
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use test_case::test_case;

  use super::*;

  fn body(value: serde_json::Value) -> Vec<u8> {
    serde_json::to_vec(&value).unwrap()
  }

  #[test]
  fn test_parse_required_labels() {
    let labels = RequiredLabels::parse("a,b,c");
    assert_eq!(labels.len(), 3);
    assert!(labels.contains("a"));
    assert!(labels.contains("b"));
    assert!(labels.contains("c"));
  }

  #[test_case("c,a,b" ; "order does not matter")]
  #[test_case("a,b,a,c,b" ; "duplicates collapse")]
  #[test_case(" a , b,c ,," ; "whitespace and empty items are dropped")]
  fn test_parse_required_labels_normalises(input: &str) {
    assert_eq!(RequiredLabels::parse(input), RequiredLabels::parse("a,b,c"));
  }

  #[test]
  fn test_parse_required_labels_rejects_empty() {
    assert!(parse_required_labels("").is_err());
    assert!(parse_required_labels(" , ,").is_err());
    assert_eq!(parse_required_labels("ready").unwrap().len(), 1);
  }

  #[test]
  fn test_required_labels_display() {
    assert_eq!(RequiredLabels::parse("ready,approved").to_string(), "approved,ready");
  }

  #[test]
  fn test_count_matches_all_present() {
    let required = RequiredLabels::parse("ready,approved");
    let response = body(json!({
      "labels": [{ "name": "ready" }, { "name": "approved" }, { "name": "wip" }]
    }));

    let result = count_matches(&response, &required).unwrap();
    assert_eq!(result.found, vec!["ready", "approved"]);
    assert_eq!(result.found_count(), 2);
    assert_eq!(result.required_count, 2);
    assert!(result.is_complete());
  }

  #[test]
  fn test_count_matches_missing_label() {
    let required = RequiredLabels::parse("ready,approved");
    let response = body(json!({
      "labels": [{ "name": "ready" }, { "name": "wip" }]
    }));

    let result = count_matches(&response, &required).unwrap();
    assert_eq!(result.found_count(), 1);
    assert_eq!(result.required_count, 2);
    assert!(!result.is_complete());
  }

  #[test]
  fn test_count_matches_is_case_sensitive() {
    let required = RequiredLabels::parse("Ready");
    let response = body(json!({ "labels": [{ "name": "ready" }] }));

    let result = count_matches(&response, &required).unwrap();
    assert_eq!(result.found_count(), 0);
  }

  #[test]
  fn test_count_matches_counts_repeated_response_label_once() {
    let required = RequiredLabels::parse("ready,approved");
    let response = body(json!({
      "labels": [{ "name": "ready" }, { "name": "ready" }]
    }));

    let result = count_matches(&response, &required).unwrap();
    assert_eq!(result.found, vec!["ready"]);
    assert!(!result.is_complete());
  }

  #[test]
  fn test_count_matches_without_labels_field() {
    let required = RequiredLabels::parse("ready");

    let result = count_matches(br#"{"number": 42}"#, &required).unwrap();
    assert_eq!(result.found_count(), 0);
    assert_eq!(result.required_count, 1);
  }

  #[test_case(b"<html>rate limited</html>" ; "not json")]
  #[test_case(b"" ; "empty body")]
  #[test_case(br#"{"labels": "ready"}"# ; "labels is not an array")]
  #[test_case(br#"{"labels": [{"id": 1}]}"# ; "label without a name")]
  fn test_count_matches_rejects_malformed_body(response: &[u8]) {
    let required = RequiredLabels::parse("ready");
    assert!(count_matches(response, &required).is_err());
  }
}
