//! Use-Case: Neues Handle an einer Plan-Position anhängen.

use crate::app::use_cases;
use crate::app::AppState;

/// Hängt ein neues Handle an der gegebenen Plan-Position an.
///
/// Abgelehnt (No-op) wird eine Position außerhalb des Plan-Rechtecks sowie
/// eine Zeitkoordinate, die nicht strikt hinter dem letzten Handle liegt.
/// Nach erfolgreichem Anhängen werden die generierten Deko-Segmente
/// komplett neu aufgebaut.
pub fn add_handle_at_position(state: &mut AppState, plan_pos: glam::Vec2) {
    if state.plan_space().is_out_of_bounds(plan_pos) {
        log::debug!(
            "Handle abgelehnt: ({:.1}, {:.1}) liegt außerhalb des Plans",
            plan_pos.x,
            plan_pos.y
        );
        return;
    }

    if !state.plan.can_append(plan_pos) {
        log::debug!(
            "Handle abgelehnt: Zeit {:.1} liegt nicht hinter dem letzten Handle",
            plan_pos.x
        );
        return;
    }

    let Some(handle_id) = state.plan.append_handle(plan_pos) else {
        return;
    };

    use_cases::deco::rebuild_deco_stops(state);

    log::info!(
        "Handle {} an Position ({:.1}, {:.1}) angehängt",
        handle_id,
        plan_pos.x,
        plan_pos.y
    );
}
