//! Dropdown options and slider bounds derived from the dataset.

use crate::dataset::LaunchDataset;
use crate::models::SiteSelection;
use crate::routes::controls::{PayloadSliderData, SiteOption, SiteOptionsData, SliderMark};

/// Slider step granularity, kilograms.
const PAYLOAD_STEP_KG: f64 = 100.0;

/// Spacing of the labelled slider marks, kilograms.
const MARK_INTERVAL_KG: i64 = 1000;

/// Build the site dropdown options: the "All Sites" sentinel first, then
/// every site in first-appearance order.
pub fn site_options(dataset: &LaunchDataset) -> SiteOptionsData {
    let mut options = vec![SiteOption {
        label: "All Sites".to_string(),
        value: SiteSelection::SENTINEL.to_string(),
    }];

    options.extend(dataset.sites().iter().map(|site| SiteOption {
        label: site.clone(),
        value: site.clone(),
    }));

    let total = options.len();
    SiteOptionsData { options, total }
}

/// Build the payload slider specification from the dataset's payload
/// domain: bounds, step, and `{n}kg` marks every 1000 kg.
pub fn payload_slider(dataset: &LaunchDataset) -> PayloadSliderData {
    let domain = dataset.payload_domain();

    let start = domain.min.value() as i64;
    let stop = domain.max.value() as i64 + MARK_INTERVAL_KG;
    let marks = (start..stop)
        .step_by(MARK_INTERVAL_KG as usize)
        .map(|n| SliderMark {
            value: n as f64,
            label: format!("{}kg", n),
        })
        .collect();

    PayloadSliderData {
        min: domain.min,
        max: domain.max,
        step: PAYLOAD_STEP_KG,
        marks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LaunchRecord;
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

    fn dataset(records: Vec<LaunchRecord>) -> LaunchDataset {
        LaunchDataset::from_records(records, "test".to_string()).unwrap()
    }

    #[test]
    fn test_site_options_sentinel_first() {
        let ds = dataset(vec![
            record("CCAFS LC-40", 500.0, 1),
            record("VAFB SLC-4E", 1500.0, 0),
        ]);

        let data = site_options(&ds);

        assert_eq!(data.total, 3);
        assert_eq!(data.options[0].label, "All Sites");
        assert_eq!(data.options[0].value, "ALL");
        assert_eq!(data.options[1].value, "CCAFS LC-40");
        assert_eq!(data.options[2].value, "VAFB SLC-4E");
    }

    #[test]
    fn test_payload_slider_marks() {
        let ds = dataset(vec![record("A", 0.0, 1), record("A", 2600.0, 0)]);

        let data = payload_slider(&ds);

        assert_eq!(data.min.value(), 0.0);
        assert_eq!(data.max.value(), 2600.0);
        assert_eq!(data.step, 100.0);
        // Marks at 0, 1000, 2000, 3000
        let values: Vec<f64> = data.marks.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![0.0, 1000.0, 2000.0, 3000.0]);
        assert_eq!(data.marks[1].label, "1000kg");
    }

    #[test]
    fn test_payload_slider_zero_width_domain() {
        let ds = dataset(vec![record("A", 500.0, 1)]);

        let data = payload_slider(&ds);

        assert_eq!(data.min.value(), data.max.value());
        // A single mark still renders a usable control
        assert_eq!(data.marks.len(), 1);
        assert_eq!(data.marks[0].label, "500kg");
    }
}
