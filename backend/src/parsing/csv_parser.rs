use anyhow::{Context, Result};
use polars::prelude::*;
use qtty::Kilograms;
use std::path::Path;

use crate::models::LaunchRecord;

/// Columns the dashboard cannot operate without.
pub const REQUIRED_COLUMNS: [&str; 4] = [
    "Launch Site",
    "Payload Mass (kg)",
    "class",
    "Booster Version Category",
];

/// Parse a launch records CSV file into a Polars DataFrame.
///
/// Fails when the file is unreadable, is not valid CSV, or lacks one of
/// the [`REQUIRED_COLUMNS`].
pub fn parse_launch_csv(csv_path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()
        .context("Failed to parse CSV into DataFrame")?;

    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for required in REQUIRED_COLUMNS {
        if !column_names.contains(&required.to_string()) {
            anyhow::bail!("Missing required column: {}", required);
        }
    }

    // Cast columns to expected types if they were inferred incorrectly
    let mut lazy_df = df.lazy();

    // Payload mass should be Float64 (may be inferred as i64 if no decimal point)
    lazy_df = lazy_df.with_column(col("Payload Mass (kg)").cast(DataType::Float64));

    // class should be Int64 however it was written (0/1, or 0.0/1.0)
    lazy_df = lazy_df.with_column(col("class").cast(DataType::Int64));

    if column_names.contains(&"Flight Number".to_string()) {
        lazy_df = lazy_df.with_column(col("Flight Number").cast(DataType::Int64));
    }

    let df = lazy_df
        .collect()
        .context("Failed to cast columns to expected types")?;

    Ok(df)
}

/// Parse a CSV file and convert to LaunchRecord structures.
pub fn parse_launch_csv_to_records(csv_path: &Path) -> Result<Vec<LaunchRecord>> {
    let df = parse_launch_csv(csv_path)?;
    dataframe_to_records(&df)
}

/// Convert a Polars DataFrame to LaunchRecord structures.
///
/// Required columns must not contain nulls; the optional `Flight Number`
/// and `Booster Version` columns may be absent entirely or null per row.
pub fn dataframe_to_records(df: &DataFrame) -> Result<Vec<LaunchRecord>> {
    let height = df.height();

    let sites = df.column("Launch Site")?.str()?;
    let payloads = df.column("Payload Mass (kg)")?.f64()?;
    let classes = df.column("class")?.i64()?;
    let categories = df.column("Booster Version Category")?.str()?;

    let flight_numbers = df.column("Flight Number").ok().and_then(|c| c.i64().ok());
    let boosters = df.column("Booster Version").ok().and_then(|c| c.str().ok());

    let mut records = Vec::with_capacity(height);

    for i in 0..height {
        let launch_site = sites
            .get(i)
            .with_context(|| format!("Missing Launch Site at row {}", i))?
            .to_string();

        let payload = payloads
            .get(i)
            .with_context(|| format!("Missing Payload Mass (kg) at row {}", i))?;

        let class = classes
            .get(i)
            .with_context(|| format!("Missing class at row {}", i))?;
        anyhow::ensure!(
            class == 0 || class == 1,
            "class must be 0 or 1 at row {} (got {})",
            i,
            class
        );

        let booster_version_category = categories
            .get(i)
            .with_context(|| format!("Missing Booster Version Category at row {}", i))?
            .to_string();

        records.push(LaunchRecord {
            flight_number: flight_numbers.and_then(|col| col.get(i)),
            launch_site,
            payload_mass: Kilograms::new(payload),
            class: class as u8,
            booster_version: boosters.and_then(|col| col.get(i)).map(|s| s.to_string()),
            booster_version_category,
        });
    }

    Ok(records)
}
