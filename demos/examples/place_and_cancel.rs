// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Placing points and arcs from the keyboard.
//!
//! Uses the mode shortcuts (`p`, `a`, Escape) to move between select and
//! place modes, commits a few entities, cancels one mid-placement, and
//! routes absorbed diagnostics through `env_logger`.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p tracery_demos --example place_and_cancel`

use tracery_event::{KeyCode, KeyEventArgs, PointerButtons, ScreenPoint};
use tracery_mode::{NullChanges, StateKind};
use tracery_scene::{Geometry, Scene, World};
use tracery_session::{LogDiagnostics, PanZoomView, Session};

fn main() {
    env_logger::init();

    let mut session = Session::with_sinks(
        Scene::new(),
        PanZoomView::new(),
        NullChanges,
        LogDiagnostics,
    );

    println!("== 'p' enters point placement ==");
    session.key_down(KeyEventArgs::plain(KeyCode::Char('p')));
    assert_eq!(session.state_kind(), StateKind::AddPoint);

    println!("== press, drag, release places a point ==");
    session.pointer_down(PointerButtons::LEFT, ScreenPoint::new(10.0, 10.0));
    session.pointer_move(ScreenPoint::new(14.0, 10.0));
    session.pointer_up(PointerButtons::LEFT, ScreenPoint::new(14.0, 10.0));
    println!("  entities: {}", session.world().len());
    assert_eq!(session.world().len(), 1);

    println!("== Escape mid-placement deletes the provisional entity ==");
    session.pointer_down(PointerButtons::LEFT, ScreenPoint::new(40.0, 40.0));
    assert_eq!(session.world().len(), 2);
    session.key_down(KeyEventArgs::plain(KeyCode::Escape));
    session.pointer_up(PointerButtons::LEFT, ScreenPoint::new(40.0, 40.0));
    assert_eq!(session.world().len(), 1);
    assert_eq!(session.state_kind(), StateKind::Idle);

    println!("== 'a' enters arc placement ==");
    session.key_down(KeyEventArgs::plain(KeyCode::Char('a')));
    assert_eq!(session.state_kind(), StateKind::AddArc);

    println!("== dragging an arc sets its radius ==");
    session.pointer_down(PointerButtons::LEFT, ScreenPoint::new(60.0, 60.0));
    session.pointer_move(ScreenPoint::new(65.0, 60.0));
    session.pointer_up(PointerButtons::LEFT, ScreenPoint::new(65.0, 60.0));
    let arc_id = session.world().selected()[0];
    if let Some(Geometry::Arc(arc)) = session.world().geometry(arc_id) {
        println!("  arc radii: {:?}", arc.radii);
    }

    println!("== a zero-drag arc still commits, with a logged diagnostic ==");
    session.pointer_down(PointerButtons::LEFT, ScreenPoint::new(80.0, 80.0));
    session.pointer_up(PointerButtons::LEFT, ScreenPoint::new(80.0, 80.0));

    println!("== Escape returns to select mode ==");
    session.key_down(KeyEventArgs::plain(KeyCode::Escape));
    assert_eq!(session.state_kind(), StateKind::Idle);
    println!("done: {} entities", session.world().len());
}
