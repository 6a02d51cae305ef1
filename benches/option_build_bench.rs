use criterion::{Criterion, criterion_group, criterion_main};
use echarts_composer::{
    AreaChartProps, AxisKind, Entry, HorizontalBarChartProps, LabelDensityPolicy, ValueKind,
    ZoomEvent, build_area_chart, build_horizontal_bar_chart,
};
use std::hint::black_box;

fn monthly_entries(count: usize) -> Vec<Entry> {
    (0..count)
        .map(|i| {
            let label = format!("{:04}-{:02}", 2000 + i / 12, i % 12 + 1);
            Entry::new(label, (i % 40) as f64).expect("valid generated entry")
        })
        .collect()
}

fn bench_area_chart_build_1k(c: &mut Criterion) {
    let props = AreaChartProps::new(monthly_entries(1_000))
        .with_x_kind(AxisKind::Time)
        .with_date_format("yyyy-MM")
        .with_title("Monthly output");

    c.bench_function("area_chart_build_1k", |b| {
        b.iter(|| {
            let _ = build_area_chart(black_box(&props)).expect("build should succeed");
        })
    });
}

fn bench_horizontal_bar_build_500(c: &mut Criterion) {
    let data: Vec<Entry> = (0..500)
        .map(|i| Entry::new(format!("team {i}"), (i % 120) as f64).expect("valid generated entry"))
        .collect();
    let props = HorizontalBarChartProps::new(data).with_color("#336699");

    c.bench_function("horizontal_bar_build_500", |b| {
        b.iter(|| {
            let _ =
                build_horizontal_bar_chart(black_box(&props)).expect("build should succeed");
        })
    });
}

fn bench_options_json_1k(c: &mut Criterion) {
    let props = AreaChartProps::new(monthly_entries(1_000))
        .with_x_kind(AxisKind::Time)
        .with_date_format("yyyy-MM");
    let built = build_area_chart(&props).expect("build should succeed");

    c.bench_function("options_json_1k", |b| {
        b.iter(|| {
            let _ = built
                .options
                .to_json_pretty()
                .expect("serialization should succeed");
        })
    });
}

fn bench_label_density_patch(c: &mut Criterion) {
    let policy = LabelDensityPolicy::new(1_000, ValueKind::Time);

    c.bench_function("label_density_patch", |b| {
        b.iter(|| {
            let _ = policy.on_zoom(black_box(ZoomEvent::new(40.0, 42.0)));
        })
    });
}

criterion_group!(
    benches,
    bench_area_chart_build_1k,
    bench_horizontal_bar_build_500,
    bench_options_json_1k,
    bench_label_density_patch
);
criterion_main!(benches);
