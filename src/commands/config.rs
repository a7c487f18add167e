use anyhow::{Context, Result};
use log::debug;
use reqwest::Client;
use std::path::PathBuf;

use crate::{
    github::{GetReleases, GitHub, GitHubRepo},
    http::{HttpClient, RetryPolicy},
    report::VersionFilter,
    runtime::Runtime,
};

/// What to track and where to record it, fixed for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackConfig {
    pub repo: GitHubRepo,
    pub csv_path: PathBuf,
    pub version_filter: VersionFilter,
    pub api_url: Option<String>,
    pub user_agent: String,
    pub retries: usize,
    pub dry_run: bool,
}

impl TrackConfig {
    pub fn new(
        repo: GitHubRepo,
        csv_path: impl Into<PathBuf>,
        version_filter: VersionFilter,
    ) -> Self {
        Self {
            repo,
            csv_path: csv_path.into(),
            version_filter,
            api_url: None,
            user_agent: crate::DEFAULT_USER_AGENT.to_string(),
            retries: 0,
            dry_run: false,
        }
    }
}

/// The collaborators a run talks to.
pub struct Config<R: Runtime, G: GetReleases> {
    pub runtime: R,
    pub github: G,
}

impl<R: Runtime> Config<R, GitHub> {
    pub fn new(runtime: R, options: &TrackConfig) -> Result<Self> {
        debug!("Using user agent '{}'", options.user_agent);

        let client = Client::builder()
            .user_agent(options.user_agent.as_str())
            .build()
            .context("Failed to build HTTP client")?;

        let http = HttpClient::new(client).with_retry_policy(RetryPolicy::new(options.retries));
        let github = GitHub::new(http, options.api_url.clone());

        Ok(Self { runtime, github })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;
    use mockito::Server;

    fn options() -> TrackConfig {
        TrackConfig::new(
            GitHubRepo::new("owner", "repo"),
            "downloads.csv",
            VersionFilter::new("1.0.2"),
        )
    }

    #[test]
    fn test_track_config_defaults() {
        let options = options();

        assert_eq!(options.api_url, None);
        assert_eq!(options.retries, 0);
        assert!(!options.dry_run);
        assert!(options.user_agent.starts_with("ghrd/"));
    }

    #[tokio::test]
    async fn test_config_new_sets_user_agent_and_api_url() {
        // --- Create Mock Server ---

        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/repos/owner/repo/releases")
            .match_header("user-agent", "Python")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        // --- Execute ---

        let mut options = options();
        options.user_agent = "Python".to_string();
        options.api_url = Some(server.url());

        let config = Config::new(MockRuntime::new(), &options).unwrap();
        let releases = config.github.get_releases(&options.repo).await.unwrap();

        // --- Verify ---

        mock.assert_async().await;
        assert!(releases.is_empty());
        assert_eq!(config.github.api_url, server.url());
    }

    #[test]
    fn test_config_new_carries_retry_policy() {
        let mut options = options();
        options.retries = 2;

        let config = Config::new(MockRuntime::new(), &options).unwrap();

        assert_eq!(config.github.http.retry_policy().max_attempts(), 3);
    }

    #[test]
    fn test_config_new_rejects_invalid_user_agent() {
        let mut options = options();
        options.user_agent = "bad\nagent".to_string();

        assert!(Config::new(MockRuntime::new(), &options).is_err());
    }
}
