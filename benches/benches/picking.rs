// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Arc, Point};
use tracery_scene::{Geometry, Scene, World};

/// A scene of points on a 10-unit grid starting at (10, 10).
fn point_grid(len: usize) -> Scene {
    let side = (len as f64).sqrt().ceil() as usize;
    let mut scene = Scene::new();
    for i in 0..len {
        let x = 10.0 + ((i % side) as f64) * 10.0;
        let y = 10.0 + ((i / side) as f64) * 10.0;
        scene.create_entity(Geometry::Point(Point::new(x, y)));
    }
    scene
}

/// A scene of radius-3 arcs centered on the same grid.
fn arc_grid(len: usize) -> Scene {
    let side = (len as f64).sqrt().ceil() as usize;
    let mut scene = Scene::new();
    for i in 0..len {
        let x = 10.0 + ((i % side) as f64) * 10.0;
        let y = 10.0 + ((i / side) as f64) * 10.0;
        scene.create_entity(Geometry::Arc(Arc::new(
            Point::new(x, y),
            (3.0, 3.0),
            0.0,
            core::f64::consts::PI,
            0.0,
        )));
    }
    scene
}

fn bench_point_picking(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/pick_points");

    // Hypothesis: the linear scan dominates, so hit and miss cost the same
    // and both scale with entity count.
    for len in [256usize, 1_024, 4_096, 16_384] {
        let scene = point_grid(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("hit", len), &scene, |b, scene| {
            b.iter(|| black_box(scene.entities_under_point(black_box(Point::new(50.0, 50.0)))));
        });

        group.bench_with_input(BenchmarkId::new("miss", len), &scene, |b, scene| {
            b.iter(|| black_box(scene.entities_under_point(black_box(Point::new(5.0, 5.0)))));
        });
    }

    group.finish();
}

fn bench_arc_picking(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene/pick_arcs");

    // Arc distance goes through flattening plus nearest-point per entity,
    // so this bounds how expensive curve-heavy scenes get.
    for len in [64usize, 256, 1_024] {
        let scene = arc_grid(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("near_curve", len), &scene, |b, scene| {
            b.iter(|| black_box(scene.entities_under_point(black_box(Point::new(53.0, 50.0)))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_point_picking, bench_arc_picking);
criterion_main!(benches);
