use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flagship::carousel::{Carousel, CarouselTiming, CubicBezier};
use std::time::Duration;

fn bench_easing(c: &mut Criterion) {
    let curve = CubicBezier::SMOOTH;

    c.bench_function("cubic_bezier_ease_100_samples", |b| {
        b.iter(|| {
            let mut sum = 0.0;
            for step in 0..100 {
                sum += curve.ease(black_box(step as f32 / 100.0));
            }
            black_box(sum)
        })
    });
}

fn bench_carousel_tick(c: &mut Criterion) {
    c.bench_function("carousel_one_minute_at_60fps", |b| {
        b.iter(|| {
            let mut carousel = Carousel::new(12, CarouselTiming::default()).unwrap();
            let frame = Duration::from_micros(16_667);
            for _ in 0..3600 {
                black_box(carousel.tick(frame));
            }
            black_box(carousel.active_index())
        })
    });
}

criterion_group!(benches, bench_easing, bench_carousel_tick);
criterion_main!(benches);
