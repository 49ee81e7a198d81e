use serde::{Deserialize, Serialize};

// =========================================================
// Payload scatter types
// =========================================================

/// One point of the payload/outcome scatter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// x axis: payload mass in kilograms.
    pub payload_mass_kg: qtty::Kilograms,
    /// y axis: binary outcome, 1 = success, 0 = failure.
    pub class: u8,
    /// Marker size input, proportional to payload mass. The renderer
    /// applies its own pixel scaling.
    pub size: qtty::Kilograms,
    /// Color category for the point.
    pub booster_version_category: String,
}

/// Complete scatter chart specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadScatterData {
    pub title: String,
    pub points: Vec<ScatterPoint>,
}
