//! Test utilities shared across the label-gate workspace
//!
//! This crate provides common testing infrastructure including:
//! - Process environment isolation ([`EnvVarGuard`])
//! - A canned GitHub pull request endpoint ([`GitHubMock`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod env;
pub mod github;

// Re-export commonly used items
pub use env::EnvVarGuard;
pub use github::{GitHubMock, pull_request_body};
