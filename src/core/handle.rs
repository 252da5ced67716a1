//! Repräsentiert einen vom Nutzer gesetzten Wegpunkt auf dem Tauchplan.

use glam::Vec2;

/// Ein Handle: Wegpunkt mit Zeit/Tiefe-Position und Segment-Verweisen
#[derive(Debug, Clone, PartialEq)]
pub struct DiveHandle {
    /// Eindeutige Handle-ID
    pub id: u64,
    /// Position in Plan-Koordinaten (x = Zeit, y = Tiefe)
    pub position: Vec2,
    /// ID des eingehenden Segments (vom Vorgänger bzw. Plan-Ursprung)
    pub incoming_segment: Option<u64>,
    /// ID des ausgehenden Segments (zum Nachfolger)
    pub outgoing_segment: Option<u64>,
}

impl DiveHandle {
    /// Erstellt ein neues Handle ohne Segment-Verweise.
    pub fn new(id: u64, position: Vec2) -> Self {
        Self {
            id,
            position,
            incoming_segment: None,
            outgoing_segment: None,
        }
    }

    /// Zeitkoordinate des Handles.
    pub fn time(&self) -> f32 {
        self.position.x
    }

    /// Tiefenkoordinate des Handles.
    pub fn depth(&self) -> f32 {
        self.position.y
    }
}
