//! # GitHub Utility Functions
//!
//! Helpers for pulling identifiers out of GitHub URLs.

/// Extract the pull request id from a pull request URL
///
/// The id is whatever follows the last `/`, so
/// `https://github.com/acme/widgets/pull/42` yields `42`. A value without any
/// `/` is taken as the id itself. Returns `None` when nothing is left.
pub fn pull_request_id_from_url(url: &str) -> Option<&str> {
  let id = match url.rfind('/') {
    Some(index) => &url[index + 1..],
    None => url,
  };
  let id = id.trim();

  (!id.is_empty()).then_some(id)
}
