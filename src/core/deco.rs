//! Austauschbarer Generator für Dekompressions-Stopps.
//!
//! Der Plan-Editor behandelt den Rückgabewert generisch: 0..n Segmente,
//! in Reihenfolge angehängt, alle als generiert markiert. Das eigentliche
//! physiologische Modell ist bewusst ausgelagert; hier steht nur ein
//! Platzhalter ohne jede Deko-Berechnung.

use glam::Vec2;

use super::{DiveHandle, PlanRect};

/// Geometrie eines einzelnen generierten Deko-Segments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecoSegment {
    /// Startpunkt in Plan-Koordinaten
    pub start: Vec2,
    /// Endpunkt in Plan-Koordinaten
    pub end: Vec2,
}

impl DecoSegment {
    /// Erstellt ein Deko-Segment zwischen zwei Plan-Punkten.
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }
}

/// Generator für die Deko-Stopps hinter dem letzten Handle.
///
/// Implementierungen müssen rein aus `last_handle` und `rect` ableiten;
/// der Editor verwirft die Ausgabe bei jeder Strukturänderung komplett
/// und fordert sie neu an.
pub trait DecoModel {
    /// Liefert die generierten Segmente für das übergebene letzte Handle.
    fn generate(&self, last_handle: &DiveHandle, rect: &PlanRect) -> Vec<DecoSegment>;
}

/// Platzhalter-Modell: direkter Aufstieg zum rechten Plan-Rand auf Tiefe 0.
///
/// Ein echtes Modell würde hier gestufte Aufstiegs-Stopps liefern.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectAscentModel;

impl DecoModel for DirectAscentModel {
    fn generate(&self, last_handle: &DiveHandle, rect: &PlanRect) -> Vec<DecoSegment> {
        vec![DecoSegment::new(last_handle.position, rect.surface_sink())]
    }
}
