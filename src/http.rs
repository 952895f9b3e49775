//! HTTP client wrapper for the eCFR versioner API.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config::HTTP_TIMEOUT_SECS;
use crate::error::Result;

/// User agent string identifying this harvester.
const USER_AGENT: &str = concat!("ecfr-harvester/", env!("CARGO_PKG_VERSION"));

/// Create a configured HTTP client.
///
/// Requests run to completion or fail; there is no retry layer, and every
/// failure is fatal to the run.
///
/// # Returns
/// A `reqwest::blocking::Client` configured with appropriate timeout and user agent.
pub fn create_client() -> Result<Client> {
    let client = Client::builder()
        .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
        .user_agent(USER_AGENT)
        .build()?;
    Ok(client)
}
