//! Configuration constants and validation functions for the harvester.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{HarvesterError, Result};

/// Base URL for the eCFR versioner API.
pub const ECFR_API_BASE: &str = "https://www.ecfr.gov/api/versioner/v1";

/// The CFR title this harvester targets.
pub const TARGET_TITLE: u32 = 15;

/// The part within the title.
pub const TARGET_PART: &str = "744";

/// The appendix containing the entity list table.
pub const TARGET_APPENDIX: &str = "Supplement No. 4 to Part 744";

/// HTTP timeout in seconds.
///
/// Set to 30 seconds to accommodate the full-title XML payload.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// File name for the raw fetched XML, overwritten each run.
pub const XML_OUTPUT_FILE: &str = "ecfr_title_15_part_744.xml";

/// File name for the extracted CSV, overwritten each run.
pub const CSV_OUTPUT_FILE: &str = "ecfr_title_15_part_744_extracted.csv";

/// Date pattern: YYYY-MM-DD.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

/// Validate date format (YYYY-MM-DD).
///
/// # Arguments
/// * `date_str` - Date string to validate
///
/// # Returns
/// * `Ok(())` if valid format and a real calendar date
/// * `Err(HarvesterError::InvalidDate)` if invalid
///
/// # Examples
/// ```
/// use ecfr_harvester::config::validate_date;
///
/// assert!(validate_date("2025-01-01").is_ok());
/// assert!(validate_date("invalid").is_err());
/// assert!(validate_date("2025-13-01").is_err()); // Invalid month
/// ```
pub fn validate_date(date_str: &str) -> Result<()> {
    if !DATE_PATTERN.is_match(date_str) {
        return Err(HarvesterError::InvalidDate(date_str.to_string()));
    }

    // Parse and validate it's a real date
    chrono::NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| HarvesterError::InvalidDate(date_str.to_string()))?;

    Ok(())
}

/// Build the versions listing URL.
///
/// # Returns
/// URL to the JSON listing of all title versions
pub fn versions_url() -> String {
    format!("{ECFR_API_BASE}/versions.json")
}

/// Build the full-title XML URL for a specific revision date.
///
/// The request is constrained to the target part and appendix; spaces in the
/// appendix name are encoded as `+`, matching the versioner API's query
/// syntax.
///
/// # Arguments
/// * `date` - The revision date in YYYY-MM-DD format (should be validated
///   with `validate_date` first)
///
/// # Returns
/// URL to the constrained full-title XML
///
/// # Panics
/// Debug builds panic if `date` doesn't match the expected format.
pub fn full_xml_url(date: &str) -> String {
    debug_assert!(
        DATE_PATTERN.is_match(date),
        "date should be validated before calling full_xml_url"
    );
    let appendix = TARGET_APPENDIX.replace(' ', "+");
    format!(
        "{ECFR_API_BASE}/full/{date}/title-{TARGET_TITLE}.xml?appendix={appendix}&part={TARGET_PART}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date_valid() {
        assert!(validate_date("2025-01-01").is_ok());
        assert!(validate_date("2024-12-31").is_ok());
        assert!(validate_date("2000-06-15").is_ok());
    }

    #[test]
    fn test_validate_date_invalid_format() {
        assert!(validate_date("").is_err());
        assert!(validate_date("2025/01/01").is_err());
        assert!(validate_date("01-01-2025").is_err());
        assert!(validate_date("2025-1-1").is_err());
    }

    #[test]
    fn test_validate_date_invalid_date() {
        assert!(validate_date("2025-13-01").is_err()); // Invalid month
        assert!(validate_date("2025-02-30").is_err()); // Invalid day
        assert!(validate_date("2025-00-01").is_err()); // Zero month
    }

    #[test]
    fn test_versions_url() {
        assert_eq!(
            versions_url(),
            "https://www.ecfr.gov/api/versioner/v1/versions.json"
        );
    }

    #[test]
    fn test_full_xml_url() {
        assert_eq!(
            full_xml_url("2024-10-16"),
            "https://www.ecfr.gov/api/versioner/v1/full/2024-10-16/title-15.xml?appendix=Supplement+No.+4+to+Part+744&part=744"
        );
    }
}
