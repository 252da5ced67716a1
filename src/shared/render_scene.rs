//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, damit der (außerhalb dieses Crates liegende)
//! Renderer keine Abhängigkeit auf den App-Layer braucht.

use glam::Vec2;

use super::options::PlannerOptions;

/// Darstellungsdaten eines Handles für einen Render-Frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleSprite {
    /// Handle-ID
    pub id: u64,
    /// Position in Plan-Koordinaten
    pub position: Vec2,
    /// true = wird gerade gezogen (Hervorhebung)
    pub active: bool,
}

/// Darstellungsdaten eines Segments für einen Render-Frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentSprite {
    /// Segment-ID
    pub id: u64,
    /// Aufgelöste Startposition
    pub start: Vec2,
    /// Aufgelöste Endposition
    pub end: Vec2,
    /// true = generiertes Deko-Segment
    pub generated: bool,
}

/// Die beiden Fadenkreuz-Hilfslinien samt Warnzustand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrosshairSprite {
    /// Vertikale Linie (von, bis) in Plan-Koordinaten
    pub vertical: (Vec2, Vec2),
    /// Horizontale Linie (von, bis) in Plan-Koordinaten
    pub horizontal: (Vec2, Vec2),
    /// true = Warnfarbe (Doppelklick hier würde abgelehnt)
    pub warning: bool,
}

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Handles in Zeit-Reihenfolge
    pub handles: Vec<HandleSprite>,
    /// Segmente: erst Nutzer-Segmente in Erstellungsreihenfolge, dann Deko
    pub segments: Vec<SegmentSprite>,
    /// Fadenkreuz-Hilfslinien
    pub crosshair: CrosshairSprite,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Laufzeit-Optionen für Farben und Größen
    pub options: PlannerOptions,
}

impl RenderScene {
    /// Gibt zurück, ob der Plan Handles zum Zeichnen enthält.
    pub fn has_handles(&self) -> bool {
        !self.handles.is_empty()
    }
}
