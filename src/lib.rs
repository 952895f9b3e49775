//! eCFR Entity List Harvester - Download and extract Supplement No. 4 to Part 744.
//!
//! This crate downloads the consolidated XML for Title 15, Part 744,
//! Supplement No. 4 (the entity list) from the public eCFR versioner API,
//! extracts the embedded licensing table, and writes it out as CSV.
//!
//! # Example
//!
//! ```
//! use ecfr_harvester::config;
//!
//! // Validate a revision date
//! assert!(config::validate_date("2025-01-01").is_ok());
//! assert!(config::validate_date("01/01/2025").is_err());
//! ```
//!
//! # Architecture
//!
//! The harvester is a four-step sequential pipeline, organized into modules:
//!
//! - [`config`]: Configuration constants, URL builders, and validation
//! - [`types`]: Core data types ([`EntityRecord`], [`types::HarvestOutcome`])
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client for the versioner API
//! - [`versions`]: Revision date resolution from the versions listing
//! - [`content`]: Full-title XML downloading and persistence
//! - [`xml`]: XML utilities
//! - [`extract`]: Entity table extraction
//! - [`output`]: CSV output
//! - [`cli`]: Command-line interface
//! - [`harvester`]: Main harvester service

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod extract;
pub mod harvester;
pub mod http;
pub mod output;
pub mod types;
pub mod versions;
pub mod xml;

// Re-export main functions
pub use harvester::{extract_file, run_harvest};

// Re-export commonly used items
pub use config::validate_date;
pub use error::{HarvesterError, Result};
pub use types::{EntityRecord, HarvestOutcome};
