//! Main harvester service that runs the pipeline end to end.

use std::fs;
use std::path::Path;

use crate::config::{validate_date, CSV_OUTPUT_FILE, XML_OUTPUT_FILE};
use crate::content::{download_full_xml, save_xml};
use crate::error::Result;
use crate::extract::extract_records;
use crate::http::create_client;
use crate::output::write_csv;
use crate::types::{EntityRecord, HarvestOutcome};
use crate::versions::resolve_latest_date;

/// Run the full pipeline: resolve revision date, fetch, save, extract, write CSV.
///
/// The steps run in strict sequence; a missing revision date halts before
/// any fetch attempt, and every other failure aborts the run. There is no
/// resumable or partial state.
///
/// # Arguments
/// * `date_override` - Fetch at this date instead of the resolved latest
/// * `output_dir` - Directory both output files are written into
///
/// # Returns
/// A summary of the completed run
pub fn run_harvest(date_override: Option<&str>, output_dir: &Path) -> Result<HarvestOutcome> {
    let client = create_client()?;

    let revision_date = match date_override {
        Some(date) => {
            validate_date(date)?;
            date.to_string()
        }
        None => resolve_latest_date(&client)?,
    };
    tracing::info!(%revision_date, "Resolved revision date");

    let xml = download_full_xml(&client, &revision_date)?;
    let xml_path = output_dir.join(XML_OUTPUT_FILE);
    save_xml(&xml, &xml_path)?;

    // The saved file is the extractor's input, not the in-memory body.
    let records = extract_file(&xml_path)?;

    let csv_path = output_dir.join(CSV_OUTPUT_FILE);
    write_csv(&records, &csv_path)?;

    Ok(HarvestOutcome {
        revision_date,
        record_count: records.len(),
        xml_path,
        csv_path,
    })
}

/// Extract entity records from an already-saved XML file.
///
/// # Arguments
/// * `path` - Path to the saved document
///
/// # Returns
/// Records in document traversal order
pub fn extract_file(path: &Path) -> Result<Vec<EntityRecord>> {
    let xml = fs::read_to_string(path)?;
    extract_records(&xml)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_extract_file_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saved.xml");
        fs::write(
            &path,
            r#"<GPOTABLE>
                <TR><TD scope="ROWGROUP">Argentina</TD></TR>
                <TR><TD></TD><TD>Acme Corp</TD></TR>
            </GPOTABLE>"#,
        )
        .unwrap();

        let records = extract_file(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].country, "Argentina");
    }

    #[test]
    fn test_extract_file_missing_is_io_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.xml");
        assert!(extract_file(&missing).is_err());
    }
}
