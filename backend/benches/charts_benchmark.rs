use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qtty::Kilograms;
use slrd_rust::models::{LaunchRecord, PayloadRange, SiteSelection};
use slrd_rust::services::{compute_payload_scatter, compute_success_pie};

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const CATEGORIES: [&str; 3] = ["v1.1", "FT", "B5"];

fn synthetic_records(n: usize) -> Vec<LaunchRecord> {
    (0..n)
        .map(|i| LaunchRecord {
            flight_number: Some(i as i64),
            launch_site: SITES[i % SITES.len()].to_string(),
            payload_mass: Kilograms::new((i % 97) as f64 * 100.0),
            class: (i % 3 == 0) as u8,
            booster_version: None,
            booster_version_category: CATEGORIES[i % CATEGORIES.len()].to_string(),
        })
        .collect()
}

fn bench_success_pie(c: &mut Criterion) {
    let mut group = c.benchmark_group("success_pie");

    let records = synthetic_records(10_000);

    group.bench_function("all_sites", |b| {
        b.iter(|| compute_success_pie(black_box(&records), black_box(&SiteSelection::All)));
    });

    let single = SiteSelection::Site("KSC LC-39A".to_string());
    group.bench_function("single_site", |b| {
        b.iter(|| compute_success_pie(black_box(&records), black_box(&single)));
    });

    group.finish();
}

fn bench_payload_scatter(c: &mut Criterion) {
    let mut group = c.benchmark_group("payload_scatter");

    let records = synthetic_records(10_000);
    let range = PayloadRange::from_kg(1000.0, 8000.0);

    group.bench_function("all_sites", |b| {
        b.iter(|| {
            compute_payload_scatter(
                black_box(&records),
                black_box(&SiteSelection::All),
                black_box(&range),
            )
        });
    });

    let single = SiteSelection::Site("VAFB SLC-4E".to_string());
    group.bench_function("single_site", |b| {
        b.iter(|| {
            compute_payload_scatter(black_box(&records), black_box(&single), black_box(&range))
        });
    });

    group.finish();
}

criterion_group!(benches, bench_success_pie, bench_payload_scatter);
criterion_main!(benches);
