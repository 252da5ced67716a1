//! Handler für den Drag-Lebenszyklus eines Handles.

use crate::app::use_cases;
use crate::app::AppState;

/// Greift das Handle nahe der Plan-Position (Drag-Beginn).
pub fn grab_handle(state: &mut AppState, plan_pos: glam::Vec2) {
    use_cases::drag::grab_handle_at(state, plan_pos);
}

/// Bewegt das aktiv gezogene Handle auf die Plan-Position.
pub fn drag_active_handle(state: &mut AppState, plan_pos: glam::Vec2) {
    use_cases::drag::drag_active_handle(state, plan_pos);
}

/// Beendet den aktiven Drag. No-op wenn kein Handle aktiv ist.
pub fn release_handle(state: &mut AppState) {
    if let Some(handle_id) = state.drag.active_handle.take() {
        log::info!("Handle {} losgelassen", handle_id);
    }
}
