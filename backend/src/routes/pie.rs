use serde::{Deserialize, Serialize};

// =========================================================
// Success pie types
// =========================================================

/// One slice of the success pie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PieSlice {
    /// Site identifier in the all-sites view, class digit otherwise.
    pub label: String,
    pub value: f64,
}

/// Complete pie chart specification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessPieData {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl SuccessPieData {
    /// Sum of all slice values.
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}
