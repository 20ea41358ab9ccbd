// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selecting and dragging entities with a scripted pointer.
//!
//! Walks a `Session` through the select mode: click to select, drag to move,
//! press inside a multi-entity selection to move it as one, Escape to abort
//! a drag, Delete to remove the selection.
//!
//! Run:
//! - `cargo run -p tracery_demos --example select_and_drag`

use kurbo::{Point, Vec2};
use tracery_event::{KeyCode, KeyEventArgs, PointerButtons, ScreenPoint};
use tracery_mode::{ChangeSink, IgnoreDiagnostics};
use tracery_scene::{EntityId, Geometry, Scene, World};
use tracery_session::{PanZoomView, Session};

/// Prints every commit as it happens.
#[derive(Debug, Default)]
struct PrintChanges;

impl ChangeSink for PrintChanges {
    fn selection_dragged(&mut self, ids: &[EntityId], displacement: Vec2) {
        println!("  commit: dragged {} entities by {:?}", ids.len(), displacement);
    }

    fn entities_deleted(&mut self, ids: &[EntityId]) {
        println!("  commit: deleted {} entities", ids.len());
    }
}

fn main() {
    let mut scene = Scene::new();
    let a = scene.create_entity(Geometry::Point(Point::new(10.0, 10.0)));
    let b = scene.create_entity(Geometry::Point(Point::new(30.0, 10.0)));

    let mut session = Session::with_sinks(
        scene,
        PanZoomView::new(),
        PrintChanges,
        IgnoreDiagnostics,
    );

    println!("== Click selects ==");
    session.pointer_down(PointerButtons::LEFT, ScreenPoint::new(10.0, 10.0));
    session.pointer_up(PointerButtons::LEFT, ScreenPoint::new(10.0, 10.0));
    println!("  selected: {:?}", session.world().selected());
    assert_eq!(session.world().selected(), &[a]);

    println!("== Drag moves the selection ==");
    session.pointer_down(PointerButtons::LEFT, ScreenPoint::new(10.0, 10.0));
    session.pointer_move(ScreenPoint::new(25.0, 20.0));
    session.pointer_up(PointerButtons::LEFT, ScreenPoint::new(25.0, 20.0));
    println!("  a is now at {:?}", session.world().geometry(a));
    assert_eq!(
        session.world().geometry(a),
        Some(Geometry::Point(Point::new(25.0, 20.0)))
    );

    println!("== A multi-selection drags as one ==");
    session.world_mut().select(b);
    session.pointer_down(PointerButtons::LEFT, ScreenPoint::new(25.0, 20.0));
    session.pointer_move(ScreenPoint::new(30.0, 20.0));
    session.pointer_up(PointerButtons::LEFT, ScreenPoint::new(30.0, 20.0));
    assert_eq!(
        session.world().geometry(b),
        Some(Geometry::Point(Point::new(35.0, 10.0)))
    );

    println!("== Escape aborts a drag ==");
    session.pointer_down(PointerButtons::LEFT, ScreenPoint::new(30.0, 20.0));
    session.pointer_move(ScreenPoint::new(90.0, 90.0));
    session.key_down(KeyEventArgs::plain(KeyCode::Escape));
    session.pointer_up(PointerButtons::LEFT, ScreenPoint::new(90.0, 90.0));
    println!("  a is back at {:?}", session.world().geometry(a));
    assert_eq!(
        session.world().geometry(a),
        Some(Geometry::Point(Point::new(30.0, 20.0)))
    );

    println!("== Delete removes the selection ==");
    session.key_down(KeyEventArgs::plain(KeyCode::Delete));
    assert!(session.world().is_empty());

    println!("done");
}
