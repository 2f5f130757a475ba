use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlwhere::{Expr, SqlWhere};

struct Employee;

/// Build a filter with `n` comparison conditions:
/// WHERE col0 > @P1 AND col1 > @P2 ...
fn build_filter(n: usize) -> SqlWhere<Employee> {
    let mut filter = SqlWhere::new();
    for i in 0..n {
        filter.and(Expr::field(format!("col{i}")).gt(i as i64)).unwrap();
    }
    filter
}

fn bench_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_render/build_and_render");

    for n in [1, 5, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let filter = build_filter(n);
                black_box(filter.query());
            });
        });
    }

    group.finish();
}

fn bench_render_only(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_render/render_only");

    for n in [1, 5, 10, 50] {
        let filter = build_filter(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &filter, |b, filter| {
            b.iter(|| black_box(filter.query()));
        });
    }

    group.finish();
}

fn bench_membership_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("sql_render/membership_list");

    for n in [5, 20, 100, 500] {
        let values: Vec<i64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, values| {
            b.iter(|| {
                let mut filter = SqlWhere::<Employee>::new();
                filter
                    .in_list(Expr::field("id"), values.iter().copied())
                    .unwrap();
                black_box(filter.query());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build_and_render,
    bench_render_only,
    bench_membership_list
);
criterion_main!(benches);
