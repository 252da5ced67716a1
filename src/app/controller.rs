//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Editing ===
            AppCommand::AddHandleAtPosition { plan_pos } => {
                handlers::editing::add_handle(state, plan_pos)
            }
            AppCommand::ClearPlan => handlers::editing::clear_plan(state),

            // === Drag ===
            AppCommand::GrabHandleAt { plan_pos } => handlers::drag::grab_handle(state, plan_pos),
            AppCommand::DragActiveHandle { plan_pos } => {
                handlers::drag::drag_active_handle(state, plan_pos)
            }
            AppCommand::ReleaseActiveHandle => handlers::drag::release_handle(state),

            // === View & Optionen ===
            AppCommand::UpdateCrosshair { plan_pos } => {
                handlers::view::update_crosshair(state, plan_pos)
            }
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ApplyOptions { options } => handlers::view::apply_options(state, options)?,
            AppCommand::ResetOptions => handlers::view::reset_options(state)?,
        }

        Ok(())
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(&self, state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
        render_scene::build(state, viewport_size)
    }
}
