// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scenario tests driving the built-in modes through the event protocol.

use core::f64::consts::PI;

use kurbo::{Point, Vec2};
use tracery_event::{
    IdentityView, KeyCode, KeyEventArgs, PointerButtons, PointerEventArgs, ScreenPoint,
};
use tracery_mode::{
    ChangeSink, Diagnostic, DiagnosticSink, EditContext, EditState, Idle, PlaceMode, StateKind,
};
use tracery_scene::{EntityId, Geometry, Scene, World};

/// Records every commit notification.
#[derive(Debug, Default)]
struct Changes {
    placed: Vec<EntityId>,
    dragged: Vec<(Vec<EntityId>, Vec2)>,
    deleted: Vec<Vec<EntityId>>,
}

impl ChangeSink for Changes {
    fn entity_placed(&mut self, id: EntityId) {
        self.placed.push(id);
    }

    fn selection_dragged(&mut self, ids: &[EntityId], displacement: Vec2) {
        self.dragged.push((ids.to_vec(), displacement));
    }

    fn entities_deleted(&mut self, ids: &[EntityId]) {
        self.deleted.push(ids.to_vec());
    }
}

/// Records every absorbed condition.
#[derive(Debug, Default)]
struct Diagnostics {
    noted: Vec<Diagnostic>,
}

impl DiagnosticSink for Diagnostics {
    fn note(&mut self, diagnostic: Diagnostic) {
        self.noted.push(diagnostic);
    }
}

/// A scene, recording sinks, and one root state slot driven like a
/// dispatcher drives it.
struct Rig {
    scene: Scene,
    changes: Changes,
    diagnostics: Diagnostics,
    state: Box<dyn EditState>,
}

impl Rig {
    fn new(state: impl EditState + 'static) -> Self {
        Self {
            scene: Scene::new(),
            changes: Changes::default(),
            diagnostics: Diagnostics::default(),
            state: Box::new(state),
        }
    }

    fn add_point(&mut self, x: f64, y: f64) -> EntityId {
        self.scene.create_entity(Geometry::Point(Point::new(x, y)))
    }

    fn leaf_kind(&self) -> StateKind {
        let mut state: &dyn EditState = self.state.as_ref();
        while let Some(nested) = state.nested() {
            state = nested;
        }
        state.kind()
    }

    fn press_with(&mut self, x: f64, y: f64, buttons: PointerButtons) {
        let args = pointer_args(x, y, buttons);
        self.dispatch(|state, ctx| state.on_pointer_down(ctx, &args).apply_to(state));
    }

    fn press(&mut self, x: f64, y: f64) {
        self.press_with(x, y, PointerButtons::LEFT);
    }

    fn drag(&mut self, x: f64, y: f64) {
        let args = pointer_args(x, y, PointerButtons::LEFT);
        self.dispatch(|state, ctx| state.on_pointer_move(ctx, &args).apply_to(state));
    }

    fn hover(&mut self, x: f64, y: f64) {
        let args = pointer_args(x, y, PointerButtons::empty());
        self.dispatch(|state, ctx| state.on_pointer_move(ctx, &args).apply_to(state));
    }

    fn release_with(&mut self, x: f64, y: f64, buttons: PointerButtons) {
        let args = pointer_args(x, y, buttons);
        self.dispatch(|state, ctx| state.on_pointer_up(ctx, &args).apply_to(state));
    }

    fn release(&mut self, x: f64, y: f64) {
        self.release_with(x, y, PointerButtons::empty());
    }

    fn key(&mut self, key: KeyCode) {
        self.key_args(KeyEventArgs::plain(key));
    }

    fn key_args(&mut self, args: KeyEventArgs) {
        self.dispatch(|state, ctx| state.on_key_down(ctx, &args).apply_to(state));
    }

    fn cancel(&mut self) {
        self.dispatch(|state, ctx| state.on_cancelled(ctx));
    }

    fn dispatch(&mut self, f: impl FnOnce(&mut Box<dyn EditState>, &mut EditContext<'_>)) {
        let view = IdentityView;
        let mut ctx = EditContext::new(
            &mut self.scene,
            &view,
            &mut self.changes,
            &mut self.diagnostics,
        );
        f(&mut self.state, &mut ctx);
    }
}

fn pointer_args(x: f64, y: f64, buttons: PointerButtons) -> PointerEventArgs {
    PointerEventArgs {
        drawing_location: Point::new(x, y),
        screen_location: ScreenPoint::new(x, y),
        buttons,
    }
}

#[test]
fn click_without_motion_selects_but_commits_no_drag() {
    let mut rig = Rig::new(Idle::new());
    let id = rig.add_point(5.0, 5.0);

    rig.press(5.0, 5.0);
    assert_eq!(rig.leaf_kind(), StateKind::DraggingSelection);
    assert_eq!(rig.scene.selected(), &[id]);

    rig.release(5.0, 5.0);
    assert_eq!(rig.leaf_kind(), StateKind::WaitingToSelect);
    assert_eq!(rig.scene.geometry(id), Some(Geometry::Point(Point::new(5.0, 5.0))));
    assert!(rig.changes.dragged.is_empty());
}

#[test]
fn drag_commits_the_accumulated_displacement() {
    let mut rig = Rig::new(Idle::new());
    let id = rig.add_point(0.0, 0.0);

    rig.press(0.0, 0.0);
    rig.drag(1.0, 0.0);
    rig.drag(1.0, 1.0);
    rig.drag(3.0, 1.0);
    rig.release(3.0, 1.0);

    assert_eq!(rig.scene.geometry(id), Some(Geometry::Point(Point::new(3.0, 1.0))));
    assert_eq!(rig.changes.dragged, [(vec![id], Vec2::new(3.0, 1.0))]);
}

#[test]
fn drag_applies_movement_step_by_step() {
    let mut rig = Rig::new(Idle::new());
    let id = rig.add_point(0.0, 0.0);

    rig.press(0.0, 0.0);
    rig.drag(1.0, 0.0);
    assert_eq!(rig.scene.geometry(id), Some(Geometry::Point(Point::new(1.0, 0.0))));
    rig.drag(1.0, 1.0);
    assert_eq!(rig.scene.geometry(id), Some(Geometry::Point(Point::new(1.0, 1.0))));
}

#[test]
fn release_location_contributes_a_final_step() {
    let mut rig = Rig::new(Idle::new());
    let id = rig.add_point(0.0, 0.0);

    rig.press(0.0, 0.0);
    rig.drag(1.0, 0.0);
    rig.release(2.0, 0.0);

    assert_eq!(rig.scene.geometry(id), Some(Geometry::Point(Point::new(2.0, 0.0))));
    assert_eq!(rig.changes.dragged, [(vec![id], Vec2::new(2.0, 0.0))]);
}

#[test]
fn click_inside_a_multi_selection_drags_it_as_one() {
    let mut rig = Rig::new(Idle::new());
    let a = rig.add_point(0.0, 0.0);
    let b = rig.add_point(10.0, 0.0);
    rig.scene.select(a);
    rig.scene.select(b);

    rig.press(0.0, 0.0);
    assert_eq!(rig.scene.selected(), &[a, b]);

    rig.drag(2.0, 0.0);
    rig.release(2.0, 0.0);

    assert_eq!(rig.scene.geometry(a), Some(Geometry::Point(Point::new(2.0, 0.0))));
    assert_eq!(rig.scene.geometry(b), Some(Geometry::Point(Point::new(12.0, 0.0))));
    assert_eq!(rig.changes.dragged, [(vec![a, b], Vec2::new(2.0, 0.0))]);
}

#[test]
fn click_outside_the_selection_replaces_it() {
    let mut rig = Rig::new(Idle::new());
    let a = rig.add_point(0.0, 0.0);
    let b = rig.add_point(10.0, 0.0);
    rig.scene.select(a);

    rig.press(10.0, 0.0);
    assert_eq!(rig.scene.selected(), &[b]);

    rig.release(10.0, 0.0);
    assert_eq!(rig.scene.selected(), &[b]);
}

#[test]
fn click_on_empty_space_clears_the_selection() {
    let mut rig = Rig::new(Idle::new());
    let a = rig.add_point(0.0, 0.0);
    rig.scene.select(a);

    rig.press(50.0, 50.0);
    assert!(rig.scene.selected().is_empty());
    assert_eq!(rig.leaf_kind(), StateKind::WaitingToSelect);
}

#[test]
fn non_left_press_does_not_start_a_selection() {
    let mut rig = Rig::new(Idle::new());
    rig.add_point(5.0, 5.0);

    rig.press_with(5.0, 5.0, PointerButtons::RIGHT);
    assert_eq!(rig.leaf_kind(), StateKind::WaitingToSelect);
    assert!(rig.scene.selected().is_empty());
}

#[test]
fn releasing_a_secondary_button_keeps_the_drag_alive() {
    let mut rig = Rig::new(Idle::new());
    let id = rig.add_point(0.0, 0.0);

    rig.press(0.0, 0.0);
    rig.drag(4.0, 0.0);
    // A right-button release arrives while the left button is still held.
    rig.release_with(4.0, 0.0, PointerButtons::LEFT);
    assert_eq!(rig.leaf_kind(), StateKind::DraggingSelection);
    assert!(rig.changes.dragged.is_empty());

    rig.release(6.0, 0.0);
    assert_eq!(rig.leaf_kind(), StateKind::WaitingToSelect);
    assert_eq!(rig.scene.geometry(id), Some(Geometry::Point(Point::new(6.0, 0.0))));
    assert_eq!(rig.changes.dragged, [(vec![id], Vec2::new(6.0, 0.0))]);
}

#[test]
fn escape_mid_drag_restores_positions_and_commits_nothing() {
    let mut rig = Rig::new(Idle::new());
    let id = rig.add_point(0.0, 0.0);

    rig.press(0.0, 0.0);
    rig.drag(5.0, 5.0);
    rig.key(KeyCode::Escape);

    assert_eq!(rig.leaf_kind(), StateKind::WaitingToSelect);
    assert_eq!(rig.scene.geometry(id), Some(Geometry::Point(Point::new(0.0, 0.0))));
    assert!(rig.changes.dragged.is_empty());
}

#[test]
fn sub_slop_wiggle_moves_the_world_but_commits_nothing() {
    let mut rig = Rig::new(Idle::new());
    let id = rig.add_point(0.0, 0.0);

    rig.press(0.0, 0.0);
    rig.drag(0.2, 0.0);
    rig.release(0.2, 0.0);

    assert_eq!(rig.scene.geometry(id), Some(Geometry::Point(Point::new(0.2, 0.0))));
    assert!(rig.changes.dragged.is_empty());
}

#[test]
fn delete_removes_the_selection_and_reports_it() {
    let mut rig = Rig::new(Idle::new());
    let a = rig.add_point(0.0, 0.0);
    let b = rig.add_point(10.0, 0.0);
    rig.scene.select(a);
    rig.scene.select(b);

    rig.key(KeyCode::Delete);

    assert!(rig.scene.is_empty());
    assert!(rig.scene.selected().is_empty());
    assert_eq!(rig.changes.deleted, [vec![a, b]]);
}

#[test]
fn delete_with_nothing_selected_does_nothing() {
    let mut rig = Rig::new(Idle::new());
    rig.add_point(0.0, 0.0);

    rig.key(KeyCode::Delete);

    assert_eq!(rig.scene.len(), 1);
    assert!(rig.changes.deleted.is_empty());
}

#[test]
fn keyboard_switches_between_modes() {
    let mut rig = Rig::new(Idle::new());

    rig.key(KeyCode::Char('p'));
    assert_eq!(rig.state.kind(), StateKind::AddPoint);
    assert_eq!(rig.leaf_kind(), StateKind::WaitingToPlace);

    rig.key(KeyCode::Escape);
    assert_eq!(rig.state.kind(), StateKind::Idle);
    assert_eq!(rig.leaf_kind(), StateKind::WaitingToSelect);

    rig.key(KeyCode::Char('a'));
    assert_eq!(rig.state.kind(), StateKind::AddArc);
}

#[test]
fn mode_key_mid_drag_reverts_the_uncommitted_displacement() {
    let mut rig = Rig::new(Idle::new());
    let id = rig.add_point(0.0, 0.0);

    rig.press(0.0, 0.0);
    rig.drag(5.0, 5.0);
    assert_eq!(rig.scene.geometry(id), Some(Geometry::Point(Point::new(5.0, 5.0))));

    // Switching modes from the keyboard abandons the drag: the movement is
    // rolled back, not committed.
    rig.key(KeyCode::Char('a'));

    assert_eq!(rig.state.kind(), StateKind::AddArc);
    assert_eq!(rig.scene.geometry(id), Some(Geometry::Point(Point::new(0.0, 0.0))));
    assert!(rig.changes.dragged.is_empty());
}

#[test]
fn unmapped_or_modified_keys_change_nothing() {
    let mut rig = Rig::new(Idle::new());

    rig.key(KeyCode::Char('q'));
    assert_eq!(rig.state.kind(), StateKind::Idle);

    let ctrl_p = KeyEventArgs {
        shift: false,
        ctrl: true,
        key: Some(KeyCode::Char('p')),
    };
    rig.key_args(ctrl_p);
    assert_eq!(rig.state.kind(), StateKind::Idle);
}

#[test]
fn placing_a_point_tracks_the_drag_and_commits_on_release() {
    let mut rig = Rig::new(PlaceMode::point());

    rig.press(3.0, 4.0);
    assert_eq!(rig.leaf_kind(), StateKind::PlacingEntity);
    assert_eq!(rig.scene.len(), 1);
    let id = rig.scene.selected()[0];
    assert_eq!(rig.scene.geometry(id), Some(Geometry::Point(Point::new(3.0, 4.0))));

    rig.drag(6.0, 8.0);
    assert_eq!(rig.scene.geometry(id), Some(Geometry::Point(Point::new(6.0, 8.0))));

    rig.release(6.0, 8.0);
    assert_eq!(rig.leaf_kind(), StateKind::WaitingToPlace);
    assert_eq!(rig.changes.placed, [id]);
    assert!(rig.scene.is_alive(id));
}

#[test]
fn placement_clears_any_prior_selection() {
    let mut rig = Rig::new(PlaceMode::point());
    let old = rig.add_point(50.0, 50.0);
    rig.scene.select(old);

    rig.press(0.0, 0.0);
    let placed = rig.scene.selected().to_vec();
    assert_eq!(placed.len(), 1);
    assert_ne!(placed[0], old);
}

#[test]
fn consecutive_placements_each_commit() {
    let mut rig = Rig::new(PlaceMode::point());

    rig.press(1.0, 1.0);
    rig.release(1.0, 1.0);
    rig.press(2.0, 2.0);
    rig.release(2.0, 2.0);

    assert_eq!(rig.scene.len(), 2);
    assert_eq!(rig.changes.placed.len(), 2);
    assert_ne!(rig.changes.placed[0], rig.changes.placed[1]);
}

#[test]
fn escape_mid_placement_deletes_the_provisional_entity() {
    let mut rig = Rig::new(PlaceMode::point());

    rig.press(3.0, 4.0);
    assert_eq!(rig.scene.len(), 1);

    rig.key(KeyCode::Escape);
    assert_eq!(rig.state.kind(), StateKind::Idle);
    assert!(rig.scene.is_empty());
    assert!(rig.changes.placed.is_empty());
}

#[test]
fn escape_with_no_placement_in_flight_just_returns_to_idle() {
    let mut rig = Rig::new(PlaceMode::arc());

    rig.key(KeyCode::Escape);
    assert_eq!(rig.state.kind(), StateKind::Idle);
    assert!(rig.scene.is_empty());
    assert!(rig.diagnostics.noted.is_empty());
}

#[test]
fn cancelling_the_whole_mode_reaches_the_active_leaf() {
    let mut rig = Rig::new(PlaceMode::point());

    rig.press(1.0, 1.0);
    assert_eq!(rig.scene.len(), 1);

    // A dispatcher about to swap modes cancels the outgoing state.
    rig.cancel();
    assert!(rig.scene.is_empty());
}

#[test]
fn arc_placement_anchors_the_center_and_drags_the_radius() {
    let mut rig = Rig::new(PlaceMode::arc());

    rig.press(0.0, 0.0);
    rig.drag(3.0, 0.0);

    let id = rig.scene.selected()[0];
    let Some(Geometry::Arc(arc)) = rig.scene.geometry(id) else {
        panic!("expected an arc");
    };
    assert_eq!(arc.center, Point::new(0.0, 0.0));
    assert_eq!(arc.radii, Vec2::new(3.0, 3.0));
    assert_eq!(arc.start_angle, 0.0);
    assert_eq!(arc.sweep_angle, PI);

    // Dragging straight up swings the start angle with the pointer.
    rig.drag(0.0, 4.0);
    let Some(Geometry::Arc(arc)) = rig.scene.geometry(id) else {
        panic!("expected an arc");
    };
    assert_eq!(arc.radii, Vec2::new(4.0, 4.0));
    assert!((arc.start_angle - PI / 2.0).abs() < 1e-12);
}

#[test]
fn zero_radius_arc_commit_is_reported_degenerate() {
    let mut rig = Rig::new(PlaceMode::arc());

    rig.press(2.0, 2.0);
    rig.release(2.0, 2.0);

    let id = rig.changes.placed[0];
    assert!(rig.scene.is_alive(id));
    assert_eq!(rig.diagnostics.noted, [Diagnostic::DegenerateGeometry(id)]);
}

#[test]
fn hover_moves_leave_quiescent_leaves_unchanged() {
    let mut rig = Rig::new(Idle::new());
    rig.hover(1.0, 2.0);
    assert_eq!(rig.leaf_kind(), StateKind::WaitingToSelect);

    let mut rig = Rig::new(PlaceMode::point());
    rig.hover(1.0, 2.0);
    assert_eq!(rig.leaf_kind(), StateKind::WaitingToPlace);
}
