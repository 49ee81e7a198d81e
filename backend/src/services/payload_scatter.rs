//! Payload/outcome scatter filtering.

use crate::models::{LaunchRecord, PayloadRange, SiteSelection};
use crate::routes::scatter::{PayloadScatterData, ScatterPoint};

const SCATTER_TITLE: &str = "Payload vs. Outcome based on selected criteria";

/// Compute the scatter chart for the current selection.
///
/// Keeps the records whose payload mass lies inside `range` (inclusive
/// on both ends) and, for a single-site selection, whose site matches.
/// Points come out in table order. An inverted range or a selection that
/// matches nothing yields an empty point list, which the renderer shows
/// as an empty chart.
pub fn compute_payload_scatter(
    records: &[LaunchRecord],
    selection: &SiteSelection,
    range: &PayloadRange,
) -> PayloadScatterData {
    let points = records
        .iter()
        .filter(|r| range.contains(r.payload_mass))
        .filter(|r| selection.matches(&r.launch_site))
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass,
            class: r.class,
            size: r.payload_mass,
            booster_version_category: r.booster_version_category.clone(),
        })
        .collect();

    PayloadScatterData {
        title: SCATTER_TITLE.to_string(),
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Kilograms;

    fn record(site: &str, payload: f64, class: u8) -> LaunchRecord {
        LaunchRecord {
            flight_number: None,
            launch_site: site.to_string(),
            payload_mass: Kilograms::new(payload),
            class,
            booster_version: None,
            booster_version_category: "FT".to_string(),
        }
    }

    fn sample_records() -> Vec<LaunchRecord> {
        vec![
            record("A", 500.0, 1),
            record("A", 1500.0, 0),
            record("B", 1000.0, 1),
        ]
    }

    #[test]
    fn test_range_filter_is_inclusive() {
        let records = sample_records();

        let data = compute_payload_scatter(
            &records,
            &SiteSelection::All,
            &PayloadRange::from_kg(0.0, 1000.0),
        );

        // Keeps payloads 500 and 1000; excludes 1500
        assert_eq!(data.points.len(), 2);
        assert_eq!(data.points[0].payload_mass_kg.value(), 500.0);
        assert_eq!(data.points[1].payload_mass_kg.value(), 1000.0);
        assert_eq!(data.title, "Payload vs. Outcome based on selected criteria");
    }

    #[test]
    fn test_site_filter_composes_with_range() {
        let records = sample_records();

        let data = compute_payload_scatter(
            &records,
            &SiteSelection::Site("A".to_string()),
            &PayloadRange::from_kg(0.0, 2000.0),
        );

        assert_eq!(data.points.len(), 2);
        assert!(data.points.iter().all(|p| p.booster_version_category == "FT"));
        assert_eq!(data.points[0].class, 1);
        assert_eq!(data.points[1].class, 0);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let records = sample_records();

        let data = compute_payload_scatter(
            &records,
            &SiteSelection::All,
            &PayloadRange::from_kg(2000.0, 100.0),
        );

        assert!(data.points.is_empty());
    }

    #[test]
    fn test_degenerate_range_at_max() {
        let records = sample_records();

        let data = compute_payload_scatter(
            &records,
            &SiteSelection::All,
            &PayloadRange::from_kg(1500.0, 1500.0),
        );

        assert_eq!(data.points.len(), 1);
        assert_eq!(data.points[0].payload_mass_kg.value(), 1500.0);
    }

    #[test]
    fn test_unknown_site_is_empty() {
        let records = sample_records();

        let data = compute_payload_scatter(
            &records,
            &SiteSelection::Site("Z".to_string()),
            &PayloadRange::from_kg(0.0, 10_000.0),
        );

        assert!(data.points.is_empty());
    }

    #[test]
    fn test_marker_size_tracks_payload() {
        let records = sample_records();

        let data = compute_payload_scatter(
            &records,
            &SiteSelection::All,
            &PayloadRange::from_kg(0.0, 10_000.0),
        );

        for point in &data.points {
            assert_eq!(point.size.value(), point.payload_mass_kg.value());
        }
    }

    #[test]
    fn test_idempotent_for_identical_inputs() {
        let records = sample_records();
        let selection = SiteSelection::Site("A".to_string());
        let range = PayloadRange::from_kg(0.0, 2000.0);

        let first = compute_payload_scatter(&records, &selection, &range);
        let second = compute_payload_scatter(&records, &selection, &range);

        assert_eq!(first.points.len(), second.points.len());
        for (a, b) in first.points.iter().zip(second.points.iter()) {
            assert_eq!(a.payload_mass_kg.value(), b.payload_mass_kg.value());
            assert_eq!(a.class, b.class);
        }
    }
}
