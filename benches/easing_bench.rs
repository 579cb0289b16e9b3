use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flourish::animation::ScrollAnimation;
use flourish::EasingFunction;
use web_time::{Duration, Instant};

fn easing_benchmark(c: &mut Criterion) {
    let f = EasingFunction::CubicInOut;
    c.bench_function("cubic_in_out_easing", |b| {
        b.iter(|| black_box(f.evaluate(black_box(0.5))))
    });
}

fn scroll_sample_benchmark(c: &mut Criterion) {
    let start = Instant::now();
    let anim = ScrollAnimation::new(
        0.0,
        1600.0,
        start,
        Duration::from_millis(1000),
        EasingFunction::CubicInOut,
    );
    let mid = start + Duration::from_millis(500);

    c.bench_function("scroll_position_sample", |b| {
        b.iter(|| black_box(anim.position_at(black_box(mid))))
    });
}

fn full_curve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve_sweep");

    for samples in [60, 600].iter() {
        group.bench_function(format!("{}_samples", samples), |b| {
            b.iter(|| {
                let f = EasingFunction::CubicInOut;
                let mut acc = 0.0f32;
                for i in 0..*samples {
                    acc += f.evaluate(i as f32 / *samples as f32);
                }
                black_box(acc)
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    easing_benchmark,
    scroll_sample_benchmark,
    full_curve_benchmark
);
criterion_main!(benches);
