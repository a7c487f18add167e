use anyhow::{Result, anyhow};
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct GitHubRepo {
    pub owner: String,
    pub repo: String,
}

impl GitHubRepo {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
        }
    }

    /// `{api_url}/repos/{owner}/{repo}/releases`
    pub fn releases_url(&self, api_url: &str) -> String {
        format!(
            "{}/repos/{}/{}/releases",
            api_url.trim_end_matches('/'),
            self.owner,
            self.repo
        )
    }
}

impl std::fmt::Display for GitHubRepo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

impl FromStr for GitHubRepo {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            Err(anyhow!(
                "Invalid repository format '{}'. Expected 'owner/repo'.",
                s
            ))
        } else {
            Ok(GitHubRepo::new(parts[0], parts[1]))
        }
    }
}
