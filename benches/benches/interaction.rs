// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::Point;
use tracery_event::{PointerButtons, ScreenPoint};
use tracery_mode::PlaceMode;
use tracery_scene::{Geometry, Scene, World};
use tracery_session::{PanZoomView, Session};

/// A session mid-drag with `len` entities, all selected, pressed on the
/// first one.
fn dragging_session(len: usize) -> Session<Scene, PanZoomView> {
    let mut scene = Scene::new();
    for i in 0..len {
        let id = scene.create_entity(Geometry::Point(Point::new((i as f64) * 10.0, 0.0)));
        scene.select(id);
    }
    let mut session = Session::new(scene, PanZoomView::new());
    session.pointer_down(PointerButtons::LEFT, ScreenPoint::ZERO);
    session
}

fn bench_drag_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/drag_selected");

    // Hypothesis: each move costs one translate over the selection plus one
    // pick for hover, so steps scale with selection size.
    for len in [16usize, 256, 4_096] {
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("eight_steps", len), &len, |b, &len| {
            b.iter_batched(
                || dragging_session(len),
                |mut session| {
                    for step in 1..=8_u32 {
                        let x = f64::from(step);
                        black_box(session.pointer_move(ScreenPoint::new(x, 0.0)));
                    }
                    session
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_place_commit_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("session/place_commit");

    // One press-release pair per placed entity, committed into a scene that
    // keeps growing inside the batch.
    group.bench_function("point_mode", |b| {
        b.iter_batched(
            || {
                let mut session = Session::new(Scene::new(), PanZoomView::new());
                session.change_mode(PlaceMode::point());
                session
            },
            |mut session| {
                for i in 0..64_u32 {
                    let at = ScreenPoint::new(f64::from(i) * 20.0, 0.0);
                    session.pointer_down(PointerButtons::LEFT, at);
                    session.pointer_up(PointerButtons::LEFT, at);
                }
                session
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_drag_moves, bench_place_commit_cycle);
criterion_main!(benches);
