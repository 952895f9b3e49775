//! End-to-end integration tests for the harvester pipeline.
//!
//! Tests the offline stages (versions listing parse, table extraction, CSV
//! output) using fixture data shaped like the eCFR versioner API responses.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use ecfr_harvester::extract::extract_records;
use ecfr_harvester::harvester::extract_file;
use ecfr_harvester::output::write_csv;
use ecfr_harvester::types::EntityRecord;
use ecfr_harvester::versions::{latest_for_title, VersionsListing};

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("supplement4")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

#[test]
fn test_resolve_date_from_versions_listing() {
    let json = load_fixture("versions.json");
    let listing: VersionsListing = serde_json::from_str(&json).expect("valid listing JSON");

    assert_eq!(latest_for_title(&listing, 15).unwrap(), "2025-08-15");
}

#[test]
fn test_versions_listing_without_target_title() {
    let json = r#"{"title_versions": [{"title": 14, "last_updated": "2025-08-01"}]}"#;
    let listing: VersionsListing = serde_json::from_str(json).expect("valid listing JSON");

    assert!(latest_for_title(&listing, 15).is_err());
}

#[test]
fn test_extract_record_count() {
    let xml = load_fixture("content.xml");
    let records = extract_records(&xml).expect("fixture should parse");

    // Two Argentina rows, one Bolivia row; heading rows emit nothing.
    assert_eq!(records.len(), 3);
}

#[test]
fn test_extract_argentina_scenario() {
    let xml = load_fixture("content.xml");
    let records = extract_records(&xml).expect("fixture should parse");

    assert_eq!(
        records[0],
        EntityRecord {
            country: "Argentina".to_string(),
            entity_info: "Acme Corp".to_string(),
            license_requirement: "Validated End-User".to_string(),
            license_review_policy: "Case-by-case".to_string(),
            federal_register_citation: "81 FR 12345".to_string(),
        }
    );
}

#[test]
fn test_extract_strips_markup_and_normalizes() {
    let xml = load_fixture("content.xml");
    let records = extract_records(&xml).expect("fixture should parse");

    let widget = &records[1];
    assert_eq!(widget.country, "Argentina");
    assert_eq!(
        widget.entity_info,
        "Widget Industries, a.k.a. WIDGETCO, Av. Corrientes 1234, Buenos Aires."
    );
    assert_eq!(
        widget.license_requirement,
        "For all items subject to the EAR. (See § 744.11 of the EAR.)"
    );
}

#[test]
fn test_extract_mis_decoded_dash_normalized() {
    let xml = load_fixture("content.xml");
    let records = extract_records(&xml).expect("fixture should parse");

    let bolivia = &records[2];
    assert_eq!(bolivia.country, "Bolivia");
    assert_eq!(
        bolivia.license_review_policy,
        "Policy of denial (2015-2016 review)."
    );
}

#[test]
fn test_extract_is_idempotent_over_saved_file() {
    let xml = load_fixture("content.xml");

    let dir = tempdir().expect("tempdir");
    let saved = dir.path().join("saved.xml");
    fs::write(&saved, &xml).expect("write saved XML");

    let first = extract_file(&saved).expect("first extraction");
    let second = extract_file(&saved).expect("second extraction");
    assert_eq!(first, second);
}

#[test]
fn test_extract_then_write_csv() {
    let xml = load_fixture("content.xml");
    let records = extract_records(&xml).expect("fixture should parse");

    let dir = tempdir().expect("tempdir");
    let csv_path = dir.path().join("out.csv");
    write_csv(&records, &csv_path).expect("write CSV");

    let content = fs::read_to_string(&csv_path).expect("read CSV back");
    let mut lines = content.lines();

    assert_eq!(
        lines.next(),
        Some("Country,Entity Info,License Requirement,License Review Policy,Federal Register Citation")
    );
    assert_eq!(
        lines.next(),
        Some("Argentina,Acme Corp,Validated End-User,Case-by-case,81 FR 12345")
    );
    // Every remaining row starts with its country.
    assert!(lines.next().unwrap().starts_with("Argentina,"));
    assert!(lines.next().unwrap().starts_with("Bolivia,"));
    assert_eq!(lines.next(), None);
}
