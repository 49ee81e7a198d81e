//! The immutable launch dataset and its one-time derivations.
//!
//! [`LaunchDataset`] is the process-wide context object: the launch
//! records plus everything derived from them exactly once at startup,
//! namely the launch-site directory, the payload-mass domain, and a
//! checksum of the source file. It is constructed in `main`, wrapped in an `Arc`, and
//! handed to the HTTP state; nothing mutates it afterwards, so handlers
//! read it without locking.

pub mod checksum;

use qtty::Kilograms;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::models::{LaunchRecord, PayloadRange};
use crate::parsing::csv_parser;

/// Errors that prevent the dataset from loading. All of these are fatal
/// at startup: the server must not begin serving without its data.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read launch data file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse launch data: {0}")]
    Parse(String),
    #[error("Launch data file contains no records")]
    Empty,
}

/// The loaded launch table with its derived control domains.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_domain: PayloadRange,
    checksum: String,
}

impl LaunchDataset {
    /// Load the dataset from a CSV file and run the one-time derivations.
    pub fn load(csv_path: &Path) -> Result<Self, DatasetError> {
        let raw = fs::read_to_string(csv_path).map_err(|source| DatasetError::Io {
            path: csv_path.display().to_string(),
            source,
        })?;
        let checksum = checksum::calculate_checksum(&raw);

        let records = csv_parser::parse_launch_csv_to_records(csv_path)
            .map_err(|e| DatasetError::Parse(format!("{:#}", e)))?;

        Self::from_records(records, checksum)
    }

    /// Build a dataset from already-parsed records.
    pub fn from_records(
        records: Vec<LaunchRecord>,
        checksum: String,
    ) -> Result<Self, DatasetError> {
        let payload_domain = derive_payload_domain(&records).ok_or(DatasetError::Empty)?;
        let sites = derive_site_directory(&records);

        Ok(Self {
            records,
            sites,
            payload_domain,
            checksum,
        })
    }

    /// All launch records, in source-file order.
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Distinct launch sites in order of first appearance. The "All
    /// Sites" sentinel is not part of the directory; the options DTO
    /// prepends it.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Payload-mass bounds over the whole table.
    pub fn payload_domain(&self) -> PayloadRange {
        self.payload_domain
    }

    /// SHA-256 hex digest of the raw source file.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Distinct launch sites in order of first appearance.
pub fn derive_site_directory(records: &[LaunchRecord]) -> Vec<String> {
    let mut sites: Vec<String> = Vec::new();
    for record in records {
        if !sites.iter().any(|s| s == &record.launch_site) {
            sites.push(record.launch_site.clone());
        }
    }
    sites
}

/// Payload-mass bounds over the whole table. `None` for an empty table;
/// a single-record table yields a zero-width range.
pub fn derive_payload_domain(records: &[LaunchRecord]) -> Option<PayloadRange> {
    let first = records.first()?;
    let mut min = first.payload_mass.value();
    let mut max = min;

    for record in &records[1..] {
        let mass = record.payload_mass.value();
        if mass < min {
            min = mass;
        }
        if mass > max {
            max = mass;
        }
    }

    Some(PayloadRange::new(Kilograms::new(min), Kilograms::new(max)))
}
