//! Use-Case: Handle nahe der Klickposition greifen.

use crate::app::AppState;

/// Macht das nächstgelegene Handle innerhalb des Pick-Radius zum aktiven
/// Drag-Ziel. Kein Treffer → No-op.
pub fn grab_handle_at(state: &mut AppState, plan_pos: glam::Vec2) {
    let pick_radius = state.plan_space().pick_radius_plan(
        state.view.viewport_vec(),
        state.options.handle_pick_radius_px,
    );

    let Some(hit) = state.plan.nearest_handle(plan_pos) else {
        return;
    };

    if hit.distance <= pick_radius {
        state.drag.active_handle = Some(hit.handle_id);
        log::info!(
            "Handle {} gegriffen (Distanz {:.2})",
            hit.handle_id,
            hit.distance
        );
    }
}
