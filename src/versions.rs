//! Version resolution against the eCFR versions listing.
//!
//! The versioner API publishes one `last_updated` date per CFR title; the
//! harvester fetches the full document at that revision.

use reqwest::blocking::Client;
use serde::Deserialize;

use crate::config::{versions_url, TARGET_TITLE};
use crate::error::{HarvesterError, Result};

/// Top-level shape of the versions listing JSON.
#[derive(Debug, Deserialize)]
pub struct VersionsListing {
    /// One entry per CFR title.
    pub title_versions: Vec<TitleVersion>,
}

/// A single title entry in the versions listing.
#[derive(Debug, Deserialize)]
pub struct TitleVersion {
    /// CFR title number.
    pub title: u32,

    /// Date of the latest published revision (YYYY-MM-DD).
    pub last_updated: String,
}

/// Download the versions listing and resolve the latest revision date for
/// the target title.
///
/// # Arguments
/// * `client` - HTTP client to use
///
/// # Returns
/// The `last_updated` date string for the target title
pub fn resolve_latest_date(client: &Client) -> Result<String> {
    let url = versions_url();
    tracing::info!(%url, "Requesting versions listing");

    let response = client.get(&url).send()?;
    let status = response.status();
    if !status.is_success() {
        tracing::error!(%status, "Versions listing request failed");
        return Err(HarvesterError::VersionsRequest { status });
    }

    let body = response.text()?;
    let listing: VersionsListing = serde_json::from_str(&body)?;
    latest_for_title(&listing, TARGET_TITLE)
}

/// Select the latest revision date for a title from a parsed listing.
///
/// # Arguments
/// * `listing` - Parsed versions listing
/// * `title` - CFR title number to look up
///
/// # Returns
/// The `last_updated` date, or `HarvesterError::VersionNotFound` if the
/// title has no entry
pub fn latest_for_title(listing: &VersionsListing, title: u32) -> Result<String> {
    listing
        .title_versions
        .iter()
        .find(|entry| entry.title == title)
        .map(|entry| entry.last_updated.clone())
        .ok_or(HarvesterError::VersionNotFound { title })
}
