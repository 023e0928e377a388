//! # GitHub API Client
//!
//! Provides the slice of the GitHub REST API that label-gate needs: fetching a
//! single pull request and decoding the labels attached to it.

pub mod client;
pub mod consts;
pub mod endpoints;
pub mod models;
pub mod utils;

// Re-export the client
pub use client::{GitHubClient, create_github_client};
// Re-export models
pub use models::{GitHubAuth, GitHubLabel, PullRequestLabels, RawResponse};
pub use utils::pull_request_id_from_url;
// Re-export the status type callers match responses against
pub use reqwest::StatusCode;
