use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::Vec2;
use orbit_scenes::animation::{AnimationFunction, OrbitPlane};
use orbit_scenes::scenes::create_grid_scene;
use orbit_scenes::text::triangulate;
use orbit_scenes::viewport::Viewport;
use std::f32::consts::TAU;

/// Benchmark: single animation function evaluation
fn bench_orbit_offset(c: &mut Criterion) {
    let orbit = AnimationFunction::orbit(OrbitPlane::Xy);

    c.bench_function("orbit_offset", |b| {
        b.iter(|| black_box(orbit.offset(black_box(1.234))))
    });
}

/// Benchmark: a full tick of the grid scene
fn bench_grid_scene_advance(c: &mut Criterion) {
    let mut context = create_grid_scene(Viewport::new(800, 600, 1.0));

    c.bench_function("grid_scene_advance", |b| {
        let mut t = 0.0f32;
        b.iter(|| {
            t += 0.016;
            context.advance(black_box(t));
        })
    });
}

/// Benchmark: ear clipping a flattened circular contour
fn bench_triangulate_contour(c: &mut Criterion) {
    let circle: Vec<Vec2> = (0..64)
        .map(|i| {
            let angle = i as f32 / 64.0 * TAU;
            Vec2::new(angle.cos(), angle.sin())
        })
        .collect();

    c.bench_function("triangulate_circle_64", |b| {
        b.iter(|| black_box(triangulate(black_box(&circle))))
    });
}

criterion_group!(
    benches,
    bench_orbit_offset,
    bench_grid_scene_advance,
    bench_triangulate_contour
);
criterion_main!(benches);
