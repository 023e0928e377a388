//! # GitHub API Endpoints
//!
//! Endpoint implementations for the GitHub REST API, added as `impl` blocks on
//! [`GitHubClient`](crate::GitHubClient).

pub mod pulls;
