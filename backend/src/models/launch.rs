//! Domain types for launch records and dashboard selections.

use qtty::Kilograms;
use serde::{Deserialize, Serialize};

/// One row of the launch table: a single launch attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Sequential flight number from the source file, when present.
    #[serde(default)]
    pub flight_number: Option<i64>,
    /// Launch facility identifier, e.g. `CCAFS LC-40`.
    pub launch_site: String,
    /// Payload mass in kilograms. Non-negative.
    pub payload_mass: Kilograms,
    /// Binary mission outcome: 1 = success, 0 = failure.
    pub class: u8,
    /// Full booster version string, when present.
    #[serde(default)]
    pub booster_version: Option<String>,
    /// Booster family, used as the scatter color attribute.
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn is_success(&self) -> bool {
        self.class == 1
    }
}

/// Closed payload-mass interval in kilograms.
///
/// An inverted interval (`min > max`) is representable and simply contains
/// nothing; the slider cannot produce one, but the API does not forbid it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub min: Kilograms,
    pub max: Kilograms,
}

impl PayloadRange {
    pub fn new(min: Kilograms, max: Kilograms) -> Self {
        Self { min, max }
    }

    pub fn from_kg(min: f64, max: f64) -> Self {
        Self::new(Kilograms::new(min), Kilograms::new(max))
    }

    /// Inclusive containment test on both ends.
    pub fn contains(&self, mass: Kilograms) -> bool {
        mass.value() >= self.min.value() && mass.value() <= self.max.value()
    }
}

/// Launch-site choice coming from the dashboard dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSelection {
    /// Do not filter by site.
    All,
    /// Restrict to a single launch site.
    Site(String),
}

impl SiteSelection {
    /// Wire value of the synthetic "All Sites" dropdown option.
    pub const SENTINEL: &'static str = "ALL";

    /// Parse the `site` query parameter. Matching is exact and
    /// case-sensitive; anything other than the sentinel is treated as a
    /// site identifier, known or not.
    pub fn from_param(value: &str) -> Self {
        if value == Self::SENTINEL {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}
