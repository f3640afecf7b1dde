use anyhow::Result;
use chart_core::{Annotation, Axis, Chart, RenderOptions, Series};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_chart(series: usize, n: usize) -> Chart {
    let mut ch = Chart::new();
    for s in 0..series {
        let data = (0..n)
            .map(|i| {
                let x = (i + 1) as f64 / n as f64;
                (x, (x * 6.0 + s as f64).sin() * 10.0 + 20.0)
            })
            .collect();
        ch.add_series(Series::with_data(data).labeled(format!("series-{s}")));
    }
    ch.x_axis = Axis::new("time (seconds)", 0.0, 1.0);
    ch.y_axis = Axis::new("actions", 0.0, 40.0);
    ch.add_annotation(Annotation::at_fraction("series-0 - series-1: 101.5%\n", 0.173, 0.6));
    ch
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg_bytes");
    for &(series, n) in &[(4usize, 10usize), (8, 1_000)] {
        group.bench_function(format!("lines_{series}x{n}"), |b| {
            let ch = build_chart(series, n);
            let mut opts = RenderOptions::default();
            opts.draw_labels = false;
            b.iter(|| -> Result<()> {
                let bytes = ch.render_to_svg_bytes(&opts)?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
