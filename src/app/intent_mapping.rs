//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
///
/// Hier passiert die Umrechnung von Viewport- in Plan-Koordinaten. Eine
/// Pointer-Bewegung außerhalb des Plan-Rechtecks erzeugt keine Commands:
/// Fadenkreuz und aktiver Drag bleiben dann unverändert.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::PointerMoved { screen_pos } => {
            let space = state.plan_space();
            let plan_pos = space.screen_to_plan(screen_pos, state.view.viewport_vec());
            if space.is_out_of_bounds(plan_pos) {
                return vec![];
            }

            let mut commands = Vec::with_capacity(2);
            if state.drag.is_dragging() {
                // Drag vor Fadenkreuz: der Warnzustand vergleicht gegen das
                // bereits bewegte letzte Handle
                commands.push(AppCommand::DragActiveHandle { plan_pos });
            }
            commands.push(AppCommand::UpdateCrosshair { plan_pos });
            commands
        }
        AppIntent::PointerPressed { screen_pos } => {
            let plan_pos = state
                .plan_space()
                .screen_to_plan(screen_pos, state.view.viewport_vec());
            vec![AppCommand::GrabHandleAt { plan_pos }]
        }
        AppIntent::PointerReleased => vec![AppCommand::ReleaseActiveHandle],
        AppIntent::PointerDoubleClicked { screen_pos } => {
            let plan_pos = state
                .plan_space()
                .screen_to_plan(screen_pos, state.view.viewport_vec());
            vec![AppCommand::AddHandleAtPosition { plan_pos }]
        }
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::ClearPlanRequested => vec![AppCommand::ClearPlan],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
