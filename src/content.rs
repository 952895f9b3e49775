//! Full-title XML downloading and persistence.
//!
//! The versioner API serves the consolidated title XML constrained to the
//! target part and appendix. The body is saved verbatim; the extractor
//! re-reads the saved file rather than the in-memory response.

use std::fs;
use std::path::Path;

use reqwest::blocking::Client;

use crate::config::full_xml_url;
use crate::error::{HarvesterError, Result};

/// Download the full-title XML at a specific revision date.
///
/// A non-success status is fatal; the error carries the status code and the
/// response body. No retry, no partial-file cleanup.
///
/// # Arguments
/// * `client` - HTTP client to use
/// * `date` - The revision date in YYYY-MM-DD format
///
/// # Returns
/// The decoded XML body as a string
pub fn download_full_xml(client: &Client, date: &str) -> Result<String> {
    let url = full_xml_url(date);
    tracing::info!(%url, "Requesting full-title XML");

    let response = client.get(&url).send()?;
    let status = response.status();
    let body = response.text()?;

    if !status.is_success() {
        tracing::error!(%status, "Full XML request failed");
        return Err(HarvesterError::FetchFailed {
            date: date.to_string(),
            status,
            body,
        });
    }

    Ok(body)
}

/// Save the fetched XML to disk, overwriting any prior content.
///
/// # Arguments
/// * `xml` - The XML body to persist
/// * `path` - Destination file path
pub fn save_xml(xml: &str, path: &Path) -> Result<()> {
    fs::write(path, xml)?;
    tracing::info!(path = %path.display(), "Saved raw XML");
    Ok(())
}
