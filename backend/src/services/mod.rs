//! Service layer: pure chart computations over the launch dataset.
//!
//! Each service is a pure function from the immutable record table and
//! the current selection to a chart or control specification. No service
//! mutates the table or holds state between calls; recomputation happens
//! from scratch on every request.

pub mod controls;

pub mod payload_scatter;

pub mod success_pie;

pub use controls::{payload_slider, site_options};
pub use payload_scatter::compute_payload_scatter;
pub use success_pie::compute_success_pie;
