use serde::{Deserialize, Serialize};

/// A downloadable file attached to a release.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone)]
pub struct ReleaseAsset {
    pub name: String,
    pub download_count: u64,
}

/// A GitHub release as listed by `GET /repos/{owner}/{repo}/releases`.
///
/// Only the fields used for tracking are decoded; `assets` is required.
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Default)]
pub struct Release {
    #[serde(default)]
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// The release title, falling back to the tag for untitled releases.
    pub fn label(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.tag_name,
        }
    }
}
