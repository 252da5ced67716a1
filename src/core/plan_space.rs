//! Plan-Koordinatensystem: Viewport→Plan-Transformation und Grenzprüfung.

use glam::Vec2;

/// Gültiges Plan-Rechteck (x = Tauchzeit, y = Tiefe, Ursprung oben links)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanRect {
    /// Breite der Zeitachse in Plan-Einheiten
    pub width: f32,
    /// Höhe der Tiefenachse in Plan-Einheiten
    pub height: f32,
}

impl PlanRect {
    /// Standard-Breite der Zeitachse.
    pub const DEFAULT_WIDTH: f32 = 100.0;
    /// Standard-Höhe der Tiefenachse.
    pub const DEFAULT_HEIGHT: f32 = 100.0;

    /// Erstellt ein Plan-Rechteck mit den gegebenen Ausmaßen.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Prüft ob ein Punkt außerhalb des Rechtecks liegt.
    /// Der Rand selbst zählt als innerhalb.
    pub fn is_out_of_bounds(&self, point: Vec2) -> bool {
        point.x < 0.0 || point.x > self.width || point.y < 0.0 || point.y > self.height
    }

    /// Fester Senken-Punkt für generierte Deko-Segmente (rechter Rand, Tiefe 0).
    pub fn surface_sink(&self) -> Vec2 {
        Vec2::new(self.width, 0.0)
    }
}

impl Default for PlanRect {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

/// Abbildung von rohen Viewport-Koordinaten auf Plan-Koordinaten
#[derive(Debug, Clone, Copy)]
pub struct PlanSpace {
    /// Gültiges Plan-Rechteck
    pub rect: PlanRect,
}

impl PlanSpace {
    /// Erstellt ein Plan-Koordinatensystem über dem gegebenen Rechteck.
    pub fn new(rect: PlanRect) -> Self {
        Self { rect }
    }

    /// Konvertiert Viewport-Koordinaten (Pixel) zu Plan-Koordinaten.
    /// Lineare Abbildung des gesamten Viewports auf das Plan-Rechteck.
    pub fn screen_to_plan(&self, screen_pos: Vec2, screen_size: Vec2) -> Vec2 {
        let sw = screen_size.x.max(1.0);
        let sh = screen_size.y.max(1.0);
        Vec2::new(
            screen_pos.x / sw * self.rect.width,
            screen_pos.y / sh * self.rect.height,
        )
    }

    /// Prüft ob ein Plan-Punkt außerhalb des Rechtecks liegt.
    pub fn is_out_of_bounds(&self, point: Vec2) -> bool {
        self.rect.is_out_of_bounds(point)
    }

    /// Berechnet den Pick-Radius in Plan-Einheiten für Handle-Selektion.
    ///
    /// Konvertiert den Pixel-Radius über den gröberen der beiden
    /// Achsen-Maßstäbe, damit ein Treffer unabhängig vom Seitenverhältnis
    /// des Viewports plausibel bleibt.
    pub fn pick_radius_plan(&self, screen_size: Vec2, pick_radius_px: f32) -> f32 {
        let sw = screen_size.x.max(1.0);
        let sh = screen_size.y.max(1.0);
        let per_px = (self.rect.width / sw).max(self.rect.height / sh);
        pick_radius_px * per_px
    }
}
