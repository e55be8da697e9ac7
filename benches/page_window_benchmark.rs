use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use marklee::domain::pagination::{compute_visible_pages, format_page_window};
use marklee::domain::route_guard::decide;

fn bench_page_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_visible_pages");
    for total in [1u32, 10, 1_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(total), &total, |b, &total| {
            b.iter(|| compute_visible_pages(black_box(total / 2), black_box(total), black_box(5)))
        });
    }
    group.finish();

    c.bench_function("format_page_window", |b| {
        let items = compute_visible_pages(500, 1_000, 7);
        b.iter(|| format_page_window(black_box(&items)))
    });
}

fn bench_route_guard(c: &mut Criterion) {
    let claim = r#"{"role":"admin"}"#;
    c.bench_function("decide_admin_on_user_route", |b| {
        b.iter(|| decide(black_box("/dashboard/reports/weekly"), black_box(Some(claim))))
    });
    c.bench_function("decide_missing_claim", |b| {
        b.iter(|| decide(black_box("/usermanagement"), black_box(None)))
    });
}

criterion_group!(benches, bench_page_window, bench_route_guard);
criterion_main!(benches);
