//! Success pie aggregation.

use crate::models::{LaunchRecord, SiteSelection};
use crate::routes::pie::{PieSlice, SuccessPieData};

/// Chart title when aggregating across every site.
const ALL_SITES_TITLE: &str = "Total Successful Launches by Site";

/// Compute the success pie for the current site selection.
///
/// With the all-sites selection the pie shows successful-launch counts
/// per site; with a single site it shows that site's success/failure
/// breakdown. An unknown site yields an empty slice list, which the
/// renderer shows as an empty chart.
pub fn compute_success_pie(records: &[LaunchRecord], selection: &SiteSelection) -> SuccessPieData {
    match selection {
        SiteSelection::All => successes_by_site(records),
        SiteSelection::Site(site) => outcome_breakdown(records, site),
    }
}

/// One slice per site, in first-appearance order.
///
/// Slice values sum the binary outcome, so this counts successes per
/// site, not launch attempts. A site with zero successes still gets a
/// slice, with value 0.
fn successes_by_site(records: &[LaunchRecord]) -> SuccessPieData {
    let mut slices: Vec<PieSlice> = Vec::new();

    for record in records {
        let value = f64::from(record.class);
        match slices.iter_mut().find(|s| s.label == record.launch_site) {
            Some(slice) => slice.value += value,
            None => slices.push(PieSlice {
                label: record.launch_site.clone(),
                value,
            }),
        }
    }

    SuccessPieData {
        title: ALL_SITES_TITLE.to_string(),
        slices,
    }
}

/// One slice per outcome class observed at the site, failures first.
fn outcome_breakdown(records: &[LaunchRecord], site: &str) -> SuccessPieData {
    let mut failures = 0u64;
    let mut successes = 0u64;

    for record in records.iter().filter(|r| r.launch_site == site) {
        if record.is_success() {
            successes += 1;
        } else {
            failures += 1;
        }
    }

    let mut slices = Vec::new();
    if failures > 0 {
        slices.push(PieSlice {
            label: "0".to_string(),
            value: failures as f64,
        });
    }
    if successes > 0 {
        slices.push(PieSlice {
            label: "1".to_string(),
            value: successes as f64,
        });
    }

    SuccessPieData {
        title: format!("Success vs. Failed Launches for {}", site),
        slices,
    }
}
