use bench_graphs::{compare_to_baseline, difference_average, parse_benchmark_data};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn sample_file(series: usize) -> String {
    (0..series)
        .map(|s| {
            let values = (1..=10).map(|i| ((i * (s + 1)) as f64 * 1.5).to_string()).collect::<Vec<_>>();
            format!("alloc{s},{}\n", values.join(","))
        })
        .collect()
}

fn bench_difference(c: &mut Criterion) {
    let a: Vec<f64> = (1..=10).map(f64::from).collect();
    let b: Vec<f64> = a.iter().map(|v| v * 2.0).collect();
    c.bench_function("difference_average_10", |bench| {
        bench.iter(|| difference_average(black_box(&a), black_box(&b)))
    });

    let data = sample_file(8);
    c.bench_function("parse_and_compare_8x10", |bench| {
        bench.iter(|| -> anyhow::Result<()> {
            let set = parse_benchmark_data(black_box(data.as_bytes()))?;
            black_box(compare_to_baseline(&set)?);
            Ok(())
        })
    });
}

criterion_group!(benches, bench_difference);
criterion_main!(benches);
