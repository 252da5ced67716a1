//! Handler für Plan-Editing: Handles anhängen und Plan verwerfen.

use crate::app::use_cases;
use crate::app::AppState;

/// Hängt ein neues Handle an der übergebenen Plan-Position an.
pub fn add_handle(state: &mut AppState, plan_pos: glam::Vec2) {
    use_cases::editing::add_handle_at_position(state, plan_pos);
}

/// Verwirft den gesamten Plan.
pub fn clear_plan(state: &mut AppState) {
    use_cases::editing::clear_plan(state);
}
