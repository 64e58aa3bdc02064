use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use kg_coords::geodesy::{transform, Crs};
use kg_coords::models::{builtin_objectives, Objective};
use kg_coords::processors::ObjectiveConverter;
use kg_coords::settings::Settings;
use kg_coords::utils::coordinates::dms_to_decimal;

// Spread objectives over the zone 26 sheet
fn create_test_objectives(count: usize) -> Vec<Objective> {
    (0..count)
        .map(|i| {
            let step = i as f64 / count.max(1) as f64;
            Objective::new(
                format!("Objective {}", i),
                (41.0 + step * 2.0, 0.0, 0.0),
                (77.0 + step * 2.0, 0.0, 0.0),
                if i % 2 == 0 { "wgs84" } else { "sk42" },
            )
        })
        .collect()
}

fn benchmark_builtin_objectives(c: &mut Criterion) {
    let converter = ObjectiveConverter::from_settings(&Settings::default()).unwrap();
    let objectives = builtin_objectives();

    c.bench_function("convert_builtin_objectives", |b| {
        b.iter(|| {
            let report = converter.convert_all(black_box(&objectives)).unwrap();
            black_box(report.conversions.len())
        })
    });
}

fn benchmark_single_transform(c: &mut Criterion) {
    let source = Crs::wgs84();
    let target = Crs::parse("EPSG:2542").unwrap();

    c.bench_function("transform_wgs84_to_zone_26", |b| {
        b.iter(|| transform(&source, &target, black_box(78.896_619), black_box(42.098_333)))
    });
}

fn benchmark_definition_parsing(c: &mut Criterion) {
    let definition = "+proj=tmerc +lat_0=0 +lon_0=135 +k=1 +x_0=500000 +y_0=0 +ellps=krass \
                      +towgs84=24.0,-123.0,-94.0,0.02,-0.25,-0.13,1.1 +units=m +no_defs";

    c.bench_function("parse_sk42_definition", |b| {
        b.iter(|| Crs::parse(black_box(definition)))
    });
}

fn benchmark_coordinate_conversion(c: &mut Criterion) {
    let dms_coordinates = vec![
        "42:05:54",
        "78:53:47.83",
        "42:07:02.34",
        "78:54:44.85",
        "-0:07:39",
    ];

    c.bench_function("dms_to_decimal", |b| {
        b.iter(|| {
            let mut results = Vec::new();
            for dms in &dms_coordinates {
                if let Ok(decimal) = dms_to_decimal(dms) {
                    results.push(decimal);
                }
            }
            black_box(results.len())
        })
    });
}

fn benchmark_varying_objective_counts(c: &mut Criterion) {
    let converter = ObjectiveConverter::from_settings(&Settings::default()).unwrap();
    let mut group = c.benchmark_group("conversion_by_size");

    for &size in &[10, 100, 1000] {
        let objectives = create_test_objectives(size);
        group.bench_with_input(BenchmarkId::new("objectives", size), &objectives, |b, objectives| {
            b.iter(|| {
                let report = converter.convert_all(objectives).unwrap();
                black_box(report.conversions.len())
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_builtin_objectives,
    benchmark_single_transform,
    benchmark_definition_parsing,
    benchmark_coordinate_conversion,
    benchmark_varying_objective_counts
);
criterion_main!(benches);
