//! Use-Case: Deko-Stopps hinter dem letzten Handle neu aufbauen.

use crate::app::AppState;

/// Verwirft alle generierten Segmente und baut sie aus dem aktuellen
/// letzten Handle neu auf.
///
/// Generierte Segmente sind reine Ableitung des letzten Handles: nach
/// diesem Aufruf entspricht die Liste exakt der Ausgabe des injizierten
/// Deko-Modells, nie einer Mischung aus altem und neuem Zustand. Auf einem
/// leeren Plan bleibt die Liste leer.
pub fn rebuild_deco_stops(state: &mut AppState) {
    state.plan.clear_deco();

    let Some(last_handle) = state.plan.last_handle().cloned() else {
        return;
    };

    let rect = state.options.plan_rect();
    let stops = state.deco_model.generate(&last_handle, &rect);
    let count = stops.len();

    for stop in stops {
        state.plan.push_deco_segment(stop.start, stop.end);
    }

    log::debug!(
        "{} Deko-Segmente ab Handle {} generiert",
        count,
        last_handle.id
    );
}
