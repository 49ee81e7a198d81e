//! Parsers for launch record input files.
//!
//! The dashboard's only input is a CSV of launch attempts. Parsing goes
//! through Polars: read the file into a `DataFrame`, normalize column
//! dtypes, then materialize typed [`LaunchRecord`](crate::models::LaunchRecord)s
//! with per-row context on missing values.

pub mod csv_parser;
