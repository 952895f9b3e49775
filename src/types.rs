//! Core data types for the harvester.

use std::path::PathBuf;

use serde::Serialize;

/// One extracted row of the entity list table.
///
/// Field names are renamed to the column headers the CSV output carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityRecord {
    /// Country heading in effect when the row was visited.
    #[serde(rename = "Country")]
    pub country: String,

    /// Entity name, aliases, and address text.
    #[serde(rename = "Entity Info")]
    pub entity_info: String,

    /// Items for which a license is required.
    #[serde(rename = "License Requirement")]
    pub license_requirement: String,

    /// Review policy applied to license applications.
    #[serde(rename = "License Review Policy")]
    pub license_review_policy: String,

    /// Federal Register citation(s) for the listing.
    #[serde(rename = "Federal Register Citation")]
    pub federal_register_citation: String,
}

impl EntityRecord {
    /// CSV column headers, in output order.
    pub const HEADERS: [&'static str; 5] = [
        "Country",
        "Entity Info",
        "License Requirement",
        "License Review Policy",
        "Federal Register Citation",
    ];
}

/// Summary of a completed harvest run.
#[derive(Debug, Clone)]
pub struct HarvestOutcome {
    /// Revision date the document was fetched at.
    pub revision_date: String,

    /// Number of records extracted from the table.
    pub record_count: usize,

    /// Path the raw XML was saved to.
    pub xml_path: PathBuf,

    /// Path the extracted CSV was saved to.
    pub csv_path: PathBuf,
}
