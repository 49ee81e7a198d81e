use serde::{Deserialize, Serialize};

// =========================================================
// Dashboard control types (dropdown + payload slider)
// =========================================================

/// One entry of the site dropdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

/// Complete dropdown option list. The "All Sites" sentinel is always the
/// first entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteOptionsData {
    pub options: Vec<SiteOption>,
    pub total: usize,
}

/// Labelled tick along the payload slider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    pub label: String,
}

/// Payload slider bounds derived from the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadSliderData {
    pub min: qtty::Kilograms,
    pub max: qtty::Kilograms,
    /// Step granularity in kilograms.
    pub step: f64,
    pub marks: Vec<SliderMark>,
}
