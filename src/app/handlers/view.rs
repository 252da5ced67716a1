//! Handler für Viewport, Fadenkreuz und Optionen.

use crate::app::AppState;
use crate::shared::PlannerOptions;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Führt die Fadenkreuz-Hilfslinien auf die Plan-Position nach.
///
/// Der Warnzustand signalisiert, dass die Zeitkoordinate vor dem letzten
/// Handle liegt und ein Doppelklick dort abgelehnt würde.
pub fn update_crosshair(state: &mut AppState, plan_pos: glam::Vec2) {
    state.crosshair.position = plan_pos;
    state.crosshair.warning = state
        .plan
        .last_handle()
        .is_some_and(|last| last.position.x > plan_pos.x);
}

/// Übernimmt neue Optionen und persistiert sie in der Konfigurationsdatei.
pub fn apply_options(state: &mut AppState, options: PlannerOptions) -> anyhow::Result<()> {
    state.options = options;
    let path = PlannerOptions::config_path();
    state.options.save_to_file(&path)
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    state.options = PlannerOptions::default();
    let path = PlannerOptions::config_path();
    state.options.save_to_file(&path)
}
