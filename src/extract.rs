//! Table extraction from the saved eCFR XML.
//!
//! The entity list is embedded as `TR`/`TD` table markup inside the
//! appendix. Rows are visited in document order while a "current country"
//! label is carried forward: a row whose first cell has a `scope` attribute
//! and non-empty direct text establishes a new country heading; every later
//! row with more than one cell becomes one [`EntityRecord`] under that
//! heading. Rows seen before any heading are skipped.

use regex::Regex;
use roxmltree::{Document, Node};
use std::sync::LazyLock;

use crate::error::Result;
use crate::types::EntityRecord;
use crate::xml::{find_children, get_text, has_tag};

/// Matches one markup tag. Deliberately non-nested and naive: anything
/// between `<` and the next `>` that contains no further `<` is removed.
/// Cells containing literal unescaped angle brackets in text content are
/// outside this pattern's contract.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^<]+?>").expect("valid regex"));

/// Strip markup from a serialized cell and normalize its text.
///
/// Removes every tag match, replaces the mis-decoded `â` (a UTF-8 en dash
/// read as Latin-1) with a plain hyphen, collapses newlines and carriage
/// returns to spaces, and trims. Idempotent for any input without literal
/// `<`/`>` characters.
///
/// # Examples
/// ```
/// use ecfr_harvester::extract::clean_markup;
///
/// assert_eq!(clean_markup("<TD>Acme <E T=\"03\">Corp</E></TD>"), "Acme Corp");
/// assert_eq!(clean_markup("81 FR 12345,\n3/2/16"), "81 FR 12345, 3/2/16");
/// ```
pub fn clean_markup(raw: &str) -> String {
    let text = TAG_PATTERN.replace_all(raw, "");
    text.replace('â', "-")
        .replace('\n', " ")
        .replace('\r', " ")
        .trim()
        .to_string()
}

/// Parse the saved document and extract all entity records.
///
/// The current country label is an explicit accumulator local to this
/// traversal; it carries forward across rows until the next heading row
/// replaces it.
///
/// # Arguments
/// * `xml` - Full text of the saved document
///
/// # Returns
/// Records in document traversal order, not deduplicated
pub fn extract_records(xml: &str) -> Result<Vec<EntityRecord>> {
    let doc = Document::parse(xml)?;

    let mut records = Vec::new();
    let mut current_country: Option<String> = None;

    for row in doc.descendants().filter(|n| has_tag(*n, "TR")) {
        let cells: Vec<Node<'_, '_>> = find_children(row, "TD").collect();

        if let Some(label) = heading_label(&cells) {
            current_country = Some(label);
        } else if let Some(country) = &current_country {
            if cells.len() > 1 {
                records.push(record_from_cells(country, &cells, xml));
            }
        }
    }

    tracing::info!(records = records.len(), "Extracted entity records");
    Ok(records)
}

/// Country label if this row is a heading row.
///
/// A heading row's first cell carries a `scope` attribute (any value) and
/// has non-empty direct text.
fn heading_label(cells: &[Node<'_, '_>]) -> Option<String> {
    let first = cells.first()?;
    first.attribute("scope")?;

    let text = get_text(*first);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Build a record from a data row's cells under the active country label.
///
/// The first cell is a row marker, not data; fields come from cells 1..=4.
/// Missing cells default to empty strings.
fn record_from_cells(country: &str, cells: &[Node<'_, '_>], xml: &str) -> EntityRecord {
    let field = |index: usize| {
        cells
            .get(index)
            .map(|cell| clean_markup(&xml[cell.range()]))
            .unwrap_or_default()
    };

    EntityRecord {
        country: country.to_string(),
        entity_info: field(1),
        license_requirement: field(2),
        license_review_policy: field(3),
        federal_register_citation: field(4),
    }
}
