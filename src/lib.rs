//! Track download counts of GitHub release assets in an append-only CSV.
//!
//! One run fetches the releases of a repository, keeps the assets whose name
//! contains a version string, and appends a timestamped row per asset.

pub mod commands;
pub mod error;
pub mod github;
pub mod http;
pub mod ledger;
pub mod report;
pub mod runtime;

/// Version stamped by the build script from `git describe`.
pub const VERSION: &str = env!("GHRD_VERSION");

pub const DEFAULT_USER_AGENT: &str = concat!("ghrd/", env!("GHRD_VERSION"));

/// Where rows go when no path is configured.
pub const DEFAULT_CSV_PATH: &str = "GitHubDownloads.csv";
