use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};

use super::repo::GitHubRepo;
use super::types::Release;
use crate::http::HttpClient;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GetReleases: Send + Sync {
    async fn get_releases(&self, repo: &GitHubRepo) -> Result<Vec<Release>>;
}

pub struct GitHub {
    pub http: HttpClient,
    pub api_url: String,
}

impl GitHub {
    #[tracing::instrument(skip(http, api_url))]
    pub fn new(http: HttpClient, api_url: Option<String>) -> Self {
        let api_url = api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { http, api_url }
    }

    /// Fetches the first page of releases exactly as the API returns it.
    #[tracing::instrument(skip(http, api_url))]
    pub async fn fetch_releases(
        repo: &GitHubRepo,
        http: &HttpClient,
        api_url: &str,
    ) -> Result<Vec<Release>> {
        let url = repo.releases_url(api_url);

        debug!(
            "Fetching releases from {} (up to {} attempt(s))...",
            url,
            http.retry_policy().max_attempts()
        );

        let releases: Vec<Release> = http
            .get_json(&url)
            .await
            .with_context(|| format!("Failed to fetch releases of {}", repo))?;

        info!("Fetched {} release(s) of {}", releases.len(), repo);
        Ok(releases)
    }
}

#[async_trait]
impl GetReleases for GitHub {
    #[tracing::instrument(skip(self, repo))]
    async fn get_releases(&self, repo: &GitHubRepo) -> Result<Vec<Release>> {
        GitHub::fetch_releases(repo, &self.http, &self.api_url).await
    }
}
