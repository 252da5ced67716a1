//! Use-Case: Aktives Handle unter Ordnungs-Constraints bewegen.

use crate::app::use_cases;
use crate::app::AppState;

/// Bewegt das aktiv gezogene Handle auf die Plan-Position.
///
/// No-op wenn kein Handle aktiv ist, die Position außerhalb des Plans
/// liegt oder die Zeitordnung gegen die Nachbarn verletzt würde (das
/// Handle bleibt dann stehen, es wird nicht geklemmt). Wandert das letzte
/// Handle, werden die Deko-Segmente neu aufgebaut.
pub fn drag_active_handle(state: &mut AppState, plan_pos: glam::Vec2) {
    let Some(handle_id) = state.drag.active_handle else {
        return;
    };

    if state.plan_space().is_out_of_bounds(plan_pos) {
        return;
    }

    if !state.plan.move_handle(handle_id, plan_pos) {
        log::debug!(
            "Drag abgelehnt: Handle {} darf nicht auf Zeit {:.1}",
            handle_id,
            plan_pos.x
        );
        return;
    }

    if state.plan.is_last_handle(handle_id) {
        use_cases::deco::rebuild_deco_stops(state);
    }
}
