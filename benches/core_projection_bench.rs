use criterion::{Criterion, criterion_group, criterion_main};
use gantt_rs::api::{ProjectRecord, TimelineConfig, YearTimeline};
use gantt_rs::core::{CalendarDate, DateRange, VisibleWindow, color_for_key, project_ranges};
use std::hint::black_box;

fn generated_ranges(count: i64) -> Vec<DateRange> {
    let origin = CalendarDate::new(2024, 6, 1).expect("valid origin");
    (0..count)
        .map(|i| {
            let start = origin.add_days(i % 500).expect("start in range");
            let end = start.add_days(i % 90).expect("end in range");
            DateRange::new(start, end)
        })
        .collect()
}

fn bench_project_ranges_10k(c: &mut Criterion) {
    let ranges = generated_ranges(10_000);
    let window = VisibleWindow::year(2025);

    c.bench_function("project_ranges_year_10k", |b| {
        b.iter(|| {
            let _ = project_ranges(black_box(&ranges), black_box(window));
        })
    });
}

fn bench_color_for_key(c: &mut Criterion) {
    c.bench_function("color_for_key_uuid", |b| {
        b.iter(|| {
            let _ = color_for_key(
                black_box("6f1c2e8a-93b4-4c7e-9a51-0d2f3b7e8c41"),
                black_box(6),
            )
            .expect("non-empty palette");
        })
    });
}

fn bench_year_timeline_2k(c: &mut Criterion) {
    let projects: Vec<ProjectRecord> = generated_ranges(2_000)
        .into_iter()
        .enumerate()
        .map(|(i, range)| {
            ProjectRecord::new(format!("p-{i}"), format!("Project {i}"))
                .with_dates(range.start().to_string(), range.end().to_string())
        })
        .collect();
    let config = TimelineConfig::default();

    c.bench_function("year_timeline_build_2k", |b| {
        b.iter(|| {
            let _ = YearTimeline::build(black_box(&projects), 2025, &config)
                .expect("timeline should build");
        })
    });
}

criterion_group!(
    benches,
    bench_project_ranges_10k,
    bench_color_for_key,
    bench_year_timeline_2k
);
criterion_main!(benches);
