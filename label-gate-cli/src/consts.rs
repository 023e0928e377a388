//! Constants for the label-gate CLI
//!
//! Environment variable names read at startup and the default values used when
//! they are absent.

/// Token used to authenticate against the GitHub API
pub const ENV_GH_TOKEN: &str = "GH_TOKEN";

/// Branch the CI build is running for
pub const ENV_CI_BRANCH: &str = "CIRCLE_BRANCH";

/// Comma-separated list of branches that skip the label check
pub const ENV_DEFAULT_BRANCHES: &str = "DEFAULT_BRANCHES";

/// Owner of the repository being built
pub const ENV_CI_PROJECT_USERNAME: &str = "CIRCLE_PROJECT_USERNAME";

/// Name of the repository being built
pub const ENV_CI_PROJECT_REPONAME: &str = "CIRCLE_PROJECT_REPONAME";

/// URL of the pull request the build belongs to
pub const ENV_CI_PULL_REQUEST: &str = "CIRCLE_PULL_REQUEST";

/// Override for the GitHub API root, e.g. a GitHub Enterprise host
pub const ENV_GITHUB_API_URL: &str = "GITHUB_API_URL";

/// Branches that skip the label check when `DEFAULT_BRANCHES` is unset
pub const DEFAULT_BRANCHES: &str = "development,staging,master";

/// Title printed above every report
pub const REPORT_TITLE: &str = "GitHub label validation";
