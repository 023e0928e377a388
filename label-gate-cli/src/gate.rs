//! # Label Gate
//!
//! The pass/fail decision. [`evaluate`] walks the checks in order and returns
//! a typed outcome; [`report`] prints the verdict and picks the exit code.

use anyhow::Result;
use label_gate_gh::{RawResponse, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::GateConfig;
use crate::consts::REPORT_TITLE;
use crate::labels::{MatchResult, count_matches};
use crate::utils::output::{print_error, print_header, print_info, print_parameters, print_success};

/// Exit code for a gate that lets the build through
pub const EXIT_PASS: u8 = 0;
/// Exit code when required labels are missing
pub const EXIT_LABEL_MISMATCH: u8 = 1;
/// Exit code when GitHub could not provide the pull request
pub const EXIT_UPSTREAM: u8 = 2;
/// Exit code when no pull request could be identified
pub const EXIT_NO_PULL_REQUEST: u8 = 3;

/// Something that can fetch a pull request from the hosting platform
pub trait PullRequestSource {
  /// Fetch `/repos/{owner}/{repo}/pulls/{pr_number}`
  ///
  /// `Err` means the request never got an answer; any HTTP status, including
  /// 4xx and 5xx, comes back as `Ok`.
  fn fetch_pull_request(&self, owner: &str, repo: &str, pr_number: &str) -> Result<RawResponse>;
}

/// Ways the gate can let a build through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
  /// The build runs on a default branch, labels were not checked
  DefaultBranch(String),
  /// Every required label is on the pull request
  LabelsMatched(MatchResult),
}

/// Ways the gate can fail a build
#[derive(Debug, Error)]
pub enum GateError {
  #[error("No active PR")]
  NoPullRequest,

  #[error("No active PR: the {0} could not be determined")]
  MissingParameter(&'static str),

  #[error("No response from github, not proceeding: {0:#}")]
  Transport(anyhow::Error),

  #[error("No response from github, not proceeding: HTTP {0}")]
  UnexpectedStatus(StatusCode),

  #[error("No response from github, not proceeding: malformed pull request payload ({0})")]
  MalformedResponse(#[from] serde_json::Error),

  #[error(
    "Inconsistency in label amounts, failing: found {} of {} required labels",
    .0.found_count(),
    .0.required_count
  )]
  LabelMismatch(MatchResult),
}

impl GateError {
  pub fn exit_code(&self) -> u8 {
    match self {
      GateError::NoPullRequest | GateError::MissingParameter(_) => EXIT_NO_PULL_REQUEST,
      GateError::Transport(_) | GateError::UnexpectedStatus(_) | GateError::MalformedResponse(_) => EXIT_UPSTREAM,
      GateError::LabelMismatch(_) => EXIT_LABEL_MISMATCH,
    }
  }
}

/// Run every check in order and stop at the first terminal outcome
///
/// Progress lines (parameter table, matched labels) are printed as the checks
/// run; the final verdict line is left to [`report`].
pub fn evaluate(config: &GateConfig, source: &dyn PullRequestSource) -> Result<Verdict, GateError> {
  print_header(REPORT_TITLE);

  if let Some(policy) = &config.branch_policy
    && let Some(branch) = policy.matching_default_branch()
  {
    info!(branch, "Default branch, skipping label check");
    return Ok(Verdict::DefaultBranch(branch.to_string()));
  }

  let pr_number = non_empty(config.pull_request.as_deref()).ok_or(GateError::NoPullRequest)?;
  let organization = non_empty(config.organization.as_deref()).ok_or(GateError::MissingParameter("organization"))?;
  let project = non_empty(config.project.as_deref()).ok_or(GateError::MissingParameter("project"))?;

  let labels = config.required_labels.to_string();
  print_parameters(&[
    ("Organization", organization),
    ("Project", project),
    ("Pull Request", pr_number),
    ("Labels", labels.as_str()),
  ]);

  debug!(organization, project, pr_number, api_url = %config.api_url, "Checking pull request labels");
  let response = source
    .fetch_pull_request(organization, project, pr_number)
    .map_err(GateError::Transport)?;

  if !response.is_ok() {
    warn!(status = %response.status, "GitHub did not return the pull request");
    return Err(GateError::UnexpectedStatus(response.status));
  }

  print_info(&format!("Required labels {}", config.required_labels.len()));

  let result = count_matches(&response.body, &config.required_labels)?;
  for name in &result.found {
    print_info(&format!("Found label {name}"));
  }
  print_info(&format!("Total labels found {}", result.found_count()));

  if result.is_complete() {
    info!(found = result.found_count(), "All required labels present");
    Ok(Verdict::LabelsMatched(result))
  } else {
    info!(
      found = result.found_count(),
      required = result.required_count,
      "Required labels missing"
    );
    Err(GateError::LabelMismatch(result))
  }
}

/// Print the verdict line and return the process exit code
pub fn report(outcome: &Result<Verdict, GateError>) -> u8 {
  match outcome {
    Ok(Verdict::DefaultBranch(_)) => {
      print_info("Default branch always proceeding");
      EXIT_PASS
    }
    Ok(Verdict::LabelsMatched(_)) => {
      print_success("Labels matched, proceeding");
      EXIT_PASS
    }
    Err(error) => {
      print_error(&error.to_string());
      error.exit_code()
    }
  }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
  value.map(str::trim).filter(|value| !value.is_empty())
}
