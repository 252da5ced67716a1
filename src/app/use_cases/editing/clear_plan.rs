//! Use-Case: Gesamten Plan verwerfen.

use crate::app::AppState;

/// Entfernt alle Handles und Segmente und löst einen aktiven Drag.
/// Entspricht dem Zustand nach Prozessstart.
pub fn clear_plan(state: &mut AppState) {
    let handles = state.plan.handle_count();
    state.plan.clear();
    state.drag.active_handle = None;

    log::info!("Plan verworfen ({} Handles entfernt)", handles);
}
