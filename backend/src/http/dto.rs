//! Data Transfer Objects for the HTTP API.
//!
//! The chart and control DTOs are re-exported from the routes module
//! since they already derive Serialize/Deserialize; this file adds the
//! request-side and health types.

use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Controls
    PayloadSliderData, SiteOption, SiteOptionsData, SliderMark,
    // Pie
    PieSlice, SuccessPieData,
    // Scatter
    PayloadScatterData, ScatterPoint,
};

/// Query parameters for the success pie endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SuccessPieQuery {
    /// Selected site; the sentinel `ALL` (also the default) selects
    /// every site.
    #[serde(default)]
    pub site: Option<String>,
}

/// Query parameters for the payload scatter endpoint.
///
/// The payload bounds arrive as raw strings so a malformed number can be
/// reported as a 400 with a useful message rather than a generic
/// rejection.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PayloadScatterQuery {
    #[serde(default)]
    pub site: Option<String>,
    /// Lower payload bound in kg; defaults to the dataset minimum.
    #[serde(default)]
    pub payload_min: Option<String>,
    /// Upper payload bound in kg; defaults to the dataset maximum.
    #[serde(default)]
    pub payload_max: Option<String>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Summary of the loaded dataset
    pub dataset: DatasetSummary,
}

/// Dataset summary reported by the health endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Number of launch records loaded
    pub records: usize,
    /// Number of distinct launch sites
    pub sites: usize,
    /// Prefix of the source file checksum
    pub checksum: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_query_defaults() {
        let query: PayloadScatterQuery = serde_json::from_str("{}").unwrap();
        assert!(query.site.is_none());
        assert!(query.payload_min.is_none());
        assert!(query.payload_max.is_none());
    }

    #[test]
    fn test_health_response_shape() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "v1".to_string(),
            dataset: DatasetSummary {
                records: 56,
                sites: 4,
                checksum: "deadbeef".to_string(),
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["dataset"]["records"], 56);
        assert_eq!(json["status"], "ok");
    }
}
