mod client;
mod repo;
mod types;

pub use client::{DEFAULT_API_URL, GetReleases, GitHub};
#[cfg(test)]
pub use client::MockGetReleases;
pub use repo::GitHubRepo;
pub use types::{Release, ReleaseAsset};
