//! Public API surface for the Rust backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::controls::PayloadSliderData;
pub use crate::routes::controls::SiteOption;
pub use crate::routes::controls::SiteOptionsData;
pub use crate::routes::controls::SliderMark;
pub use crate::routes::pie::PieSlice;
pub use crate::routes::pie::SuccessPieData;
pub use crate::routes::scatter::PayloadScatterData;
pub use crate::routes::scatter::ScatterPoint;

pub use crate::models::{LaunchRecord, PayloadRange, SiteSelection};
