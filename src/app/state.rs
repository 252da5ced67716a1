//! Application State — zentrale Datenhaltung.

use glam::Vec2;

use super::CommandLog;
use crate::core::{DecoModel, DirectAscentModel, DivePlan, PlanSpace};
use crate::shared::PlannerOptions;

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self {
            viewport_size: [0.0, 0.0],
        }
    }

    /// Viewport-Größe als Vektor.
    pub fn viewport_vec(&self) -> Vec2 {
        Vec2::new(self.viewport_size[0], self.viewport_size[1])
    }
}

/// Zustand des Drag-Controllers.
/// Höchstens ein Handle ist zu jedem Zeitpunkt aktiv.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    /// ID des aktuell gezogenen Handles (None = kein Drag aktiv)
    pub active_handle: Option<u64>,
}

impl DragState {
    /// Erstellt den Standard-Drag-Zustand (kein Drag aktiv).
    pub fn new() -> Self {
        Self {
            active_handle: None,
        }
    }

    /// Gibt zurück, ob gerade ein Handle gezogen wird.
    pub fn is_dragging(&self) -> bool {
        self.active_handle.is_some()
    }
}

/// Zustand der Fadenkreuz-Hilfslinien.
/// Folgt der letzten in-bounds Pointer-Position.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosshairState {
    /// Letzte Pointer-Position in Plan-Koordinaten
    pub position: Vec2,
    /// true = Warnfarbe: ein Doppelklick hier würde abgelehnt
    pub warning: bool,
}

impl CrosshairState {
    /// Erstellt den Standard-Fadenkreuz-Zustand (Ursprung, neutral).
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            warning: false,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Der aktuelle Tauchplan (Handles + Segmente)
    pub plan: DivePlan,
    /// View-State
    pub view: ViewState,
    /// Drag-State
    pub drag: DragState,
    /// Fadenkreuz-State
    pub crosshair: CrosshairState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Plan-Rechteck, Farben, Pick-Radius)
    pub options: PlannerOptions,
    /// Injizierter Deko-Stopp-Generator
    pub deco_model: Box<dyn DecoModel>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit dem Platzhalter-Deko-Modell
    pub fn new() -> Self {
        Self::with_deco_model(Box::new(DirectAscentModel))
    }

    /// Erstellt einen App-State mit einem injizierten Deko-Modell.
    pub fn with_deco_model(deco_model: Box<dyn DecoModel>) -> Self {
        Self {
            plan: DivePlan::new(),
            view: ViewState::new(),
            drag: DragState::new(),
            crosshair: CrosshairState::new(),
            command_log: CommandLog::new(),
            options: PlannerOptions::default(),
            deco_model,
        }
    }

    /// Plan-Koordinatensystem aus den aktuellen Optionen.
    pub fn plan_space(&self) -> PlanSpace {
        PlanSpace::new(self.options.plan_rect())
    }

    /// Gibt die Anzahl der Handles zurück (für UI-Anzeige)
    pub fn handle_count(&self) -> usize {
        self.plan.handle_count()
    }

    /// Gibt die Anzahl der Nutzer-Segmente zurück (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.plan.segment_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
