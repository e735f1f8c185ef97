use criterion::{black_box, criterion_group, criterion_main, Criterion};
use globe_tour::flight::FlightController;
use globe_tour::geo::{project, unproject, GeoPoint};

/// Benchmark: a single flight-controller step
fn bench_flight_step(c: &mut Criterion) {
    let mut controller = FlightController::new();
    let mut t = 0.0f32;

    c.bench_function("flight_step", |b| {
        b.iter(|| {
            t += 0.016;
            controller.advance(black_box(t));
            black_box(controller.state().position)
        })
    });
}

/// Benchmark: a simulated second of frames (60 steps)
fn bench_flight_sixty_steps(c: &mut Criterion) {
    c.bench_function("flight_sixty_steps", |b| {
        b.iter(|| {
            let mut controller = FlightController::new();
            for k in 0..60 {
                controller.advance(black_box(k as f32 / 60.0));
            }
            black_box(controller.state().orientation)
        })
    });
}

/// Benchmark: geo projection round trip
fn bench_geo_projection(c: &mut Criterion) {
    let point = GeoPoint::new(41.0082, 28.9784);

    c.bench_function("geo_project", |b| {
        b.iter(|| black_box(project(black_box(point), black_box(105.0))))
    });

    let position = project(point, 105.0);
    c.bench_function("geo_unproject", |b| {
        b.iter(|| black_box(unproject(black_box(position))))
    });
}

criterion_group!(
    benches,
    bench_flight_step,
    bench_flight_sixty_steps,
    bench_geo_projection
);
criterion_main!(benches);
