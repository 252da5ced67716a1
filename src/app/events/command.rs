use crate::shared::PlannerOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
/// Positionen sind hier bereits in Plan-Koordinaten umgerechnet.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neues Handle an Plan-Position anhängen
    AddHandleAtPosition { plan_pos: glam::Vec2 },
    /// Handle nahe der Plan-Position greifen (Drag-Beginn)
    GrabHandleAt { plan_pos: glam::Vec2 },
    /// Aktiv gezogenes Handle auf neue Plan-Position bewegen
    DragActiveHandle { plan_pos: glam::Vec2 },
    /// Aktiven Drag beenden
    ReleaseActiveHandle,
    /// Fadenkreuz-Hilfslinien auf Plan-Position nachführen
    UpdateCrosshair { plan_pos: glam::Vec2 },
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Gesamten Plan verwerfen
    ClearPlan,
    /// Neue Optionen übernehmen und persistieren
    ApplyOptions { options: PlannerOptions },
    /// Optionen auf Standardwerte zurücksetzen und persistieren
    ResetOptions,
}
