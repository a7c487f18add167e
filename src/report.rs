//! Turning a releases listing into rows for the download ledger.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::github::Release;

/// Format of the `Date` column, UTC with second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One observation of an asset's download count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OutputRow {
    pub date: String,
    pub release: String,
    pub asset: String,
    pub downloads: u64,
}

/// Selects assets by a case-sensitive substring of their file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFilter(String);

impl VersionFilter {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn matches(&self, asset_name: &str) -> bool {
        asset_name.contains(self.0.as_str())
    }
}

impl std::fmt::Display for VersionFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub fn timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Produces a row for every matching asset, in API order.
///
/// Every row carries the same `date`, so one run forms one snapshot.
pub fn collect_rows(releases: &[Release], filter: &VersionFilter, date: &str) -> Vec<OutputRow> {
    releases
        .iter()
        .flat_map(move |release| {
            release
                .assets
                .iter()
                .filter(move |asset| filter.matches(&asset.name))
                .map(move |asset| OutputRow {
                    date: date.to_string(),
                    release: release.label().to_string(),
                    asset: asset.name.clone(),
                    downloads: asset.download_count,
                })
        })
        .collect()
}
