//! # Utility Functions
//!
//! Helpers shared across the label-gate CLI.

pub mod output;

/// Split a comma-separated list into trimmed, non-empty items
pub fn split_list(value: &str) -> impl Iterator<Item = &str> {
  value.split(',').map(str::trim).filter(|item| !item.is_empty())
}
