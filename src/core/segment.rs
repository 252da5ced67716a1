//! Repräsentiert ein Segment zwischen zwei zeitlich geordneten Punkten.

use glam::Vec2;

/// Endpunkt eines Segments: Handle-Verweis oder fester Plan-Punkt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentEnd {
    /// Verweis auf ein Handle (ID, nicht-besitzend)
    Handle(u64),
    /// Fester Punkt in Plan-Koordinaten (Ursprungs-Anker, Deko-Senke)
    Fixed(Vec2),
}

/// Ein Segment des Tauchplans
///
/// Nutzer-Segmente verbinden den Plan-Ursprung mit dem ersten Handle bzw.
/// zwei aufeinanderfolgende Handles. Generierte Segmente bilden die
/// Deko-Stopps hinter dem letzten Handle ab und werden bei jeder
/// Strukturänderung komplett neu aufgebaut.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Eindeutige Segment-ID
    pub id: u64,
    /// Start-Endpunkt
    pub start: SegmentEnd,
    /// End-Endpunkt
    pub end: SegmentEnd,
    /// Aufgelöste Startposition
    pub start_pos: Vec2,
    /// Aufgelöste Endposition
    pub end_pos: Vec2,
    /// true = automatisch generiertes Deko-Segment
    pub generated: bool,
    /// Mittelpunkt des Segments (2D)
    pub midpoint: Vec2,
    /// Winkel des Segments (Radiant)
    pub angle: f32,
}

impl Segment {
    /// Erstellt ein Nutzer-Segment zwischen zwei Handles.
    pub fn between_handles(
        id: u64,
        start_handle: u64,
        end_handle: u64,
        start_pos: Vec2,
        end_pos: Vec2,
    ) -> Self {
        Self::build(
            id,
            SegmentEnd::Handle(start_handle),
            SegmentEnd::Handle(end_handle),
            start_pos,
            end_pos,
            false,
        )
    }

    /// Erstellt das erste Nutzer-Segment vom Plan-Ursprung zum ersten Handle.
    pub fn from_origin(id: u64, end_handle: u64, end_pos: Vec2) -> Self {
        Self::build(
            id,
            SegmentEnd::Fixed(Vec2::ZERO),
            SegmentEnd::Handle(end_handle),
            Vec2::ZERO,
            end_pos,
            false,
        )
    }

    /// Erstellt ein generiertes Deko-Segment.
    pub fn deco(id: u64, start: SegmentEnd, start_pos: Vec2, end_pos: Vec2) -> Self {
        Self::build(id, start, SegmentEnd::Fixed(end_pos), start_pos, end_pos, true)
    }

    fn build(
        id: u64,
        start: SegmentEnd,
        end: SegmentEnd,
        start_pos: Vec2,
        end_pos: Vec2,
        generated: bool,
    ) -> Self {
        let (midpoint, angle) = Self::calculate_geometry(start_pos, end_pos);
        Self {
            id,
            start,
            end,
            start_pos,
            end_pos,
            generated,
            midpoint,
            angle,
        }
    }

    /// Verschiebt den Start-Endpunkt und aktualisiert die Geometrie.
    pub fn set_start_pos(&mut self, start_pos: Vec2) {
        self.start_pos = start_pos;
        self.update_geometry();
    }

    /// Verschiebt den End-Endpunkt und aktualisiert die Geometrie.
    pub fn set_end_pos(&mut self, end_pos: Vec2) {
        self.end_pos = end_pos;
        self.update_geometry();
    }

    fn update_geometry(&mut self) {
        let (midpoint, angle) = Self::calculate_geometry(self.start_pos, self.end_pos);
        self.midpoint = midpoint;
        self.angle = angle;
    }

    fn calculate_geometry(start_pos: Vec2, end_pos: Vec2) -> (Vec2, f32) {
        let midpoint = (start_pos + end_pos) * 0.5;
        let delta = end_pos - start_pos;
        let angle = delta.y.atan2(delta.x);

        (midpoint, angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_geometry_follows_endpoint_moves() {
        let mut segment =
            Segment::between_handles(1, 10, 11, Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
        assert_eq!(segment.midpoint, Vec2::new(5.0, 0.0));
        assert_relative_eq!(segment.angle, 0.0);

        segment.set_end_pos(Vec2::new(10.0, 10.0));
        assert_eq!(segment.midpoint, Vec2::new(5.0, 5.0));
        assert_relative_eq!(segment.angle, std::f32::consts::FRAC_PI_4);
    }

    #[test]
    fn test_origin_segment_is_anchored_at_zero() {
        let segment = Segment::from_origin(1, 7, Vec2::new(10.0, 10.0));
        assert_eq!(segment.start, SegmentEnd::Fixed(Vec2::ZERO));
        assert_eq!(segment.end, SegmentEnd::Handle(7));
        assert!(!segment.generated);
    }

    #[test]
    fn test_deco_segment_carries_generated_flag() {
        let segment = Segment::deco(
            3,
            SegmentEnd::Handle(2),
            Vec2::new(20.0, 30.0),
            Vec2::new(100.0, 0.0),
        );
        assert!(segment.generated);
        assert_eq!(segment.end, SegmentEnd::Fixed(Vec2::new(100.0, 0.0)));
    }
}
