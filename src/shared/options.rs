//! Zentrale Konfiguration für den Dive-Planner.
//!
//! `PlannerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::PlanRect;

// ── Plan-Rechteck ───────────────────────────────────────────────────

/// Breite der Zeitachse in Plan-Einheiten.
pub const PLAN_WIDTH: f32 = 100.0;
/// Höhe der Tiefenachse in Plan-Einheiten.
pub const PLAN_HEIGHT: f32 = 100.0;

// ── Handles ─────────────────────────────────────────────────────────

/// Darstellungsgröße der Handles in Screen-Pixeln (Kantenlänge).
pub const HANDLE_SIZE_PX: f32 = 10.0;
/// Pick-Radius für das Greifen von Handles in Screen-Pixeln.
pub const HANDLE_PICK_RADIUS_PX: f32 = 6.0;
/// Standard-Farbe der Handles (RGBA: Cyan).
pub const HANDLE_COLOR_DEFAULT: [f32; 4] = [0.0, 0.8, 1.0, 1.0];
/// Farbe des aktiv gezogenen Handles (RGBA: Rot).
pub const HANDLE_COLOR_ACTIVE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

// ── Segmente ────────────────────────────────────────────────────────

/// Farbe für Nutzer-Segmente (RGBA: Grün).
pub const SEGMENT_COLOR_USER: [f32; 4] = [0.2, 0.9, 0.2, 1.0];
/// Farbe für generierte Deko-Segmente (RGBA: Grau).
pub const SEGMENT_COLOR_DECO: [f32; 4] = [0.6, 0.6, 0.6, 1.0];

// ── Fadenkreuz ──────────────────────────────────────────────────────

/// Neutrale Farbe der Fadenkreuz-Hilfslinien (RGBA: gedecktes Weiß).
pub const CROSSHAIR_COLOR_NEUTRAL: [f32; 4] = [0.8, 0.8, 0.8, 0.6];
/// Warnfarbe der Hilfslinien wenn ein Doppelklick abgelehnt würde (RGBA: Rot).
pub const CROSSHAIR_COLOR_WARNING: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Planner-Optionen.
/// Wird als `dive_planner.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerOptions {
    // ── Plan-Rechteck ───────────────────────────────────────────
    /// Breite der Zeitachse in Plan-Einheiten
    pub plan_width: f32,
    /// Höhe der Tiefenachse in Plan-Einheiten
    pub plan_height: f32,

    // ── Handles ─────────────────────────────────────────────────
    /// Darstellungsgröße der Handles in Screen-Pixeln
    pub handle_size_px: f32,
    /// Pick-Radius für das Greifen in Screen-Pixeln
    #[serde(default = "default_handle_pick_radius_px")]
    pub handle_pick_radius_px: f32,
    /// Standard-Farbe der Handles (RGBA)
    pub handle_color_default: [f32; 4],
    /// Farbe des aktiv gezogenen Handles
    pub handle_color_active: [f32; 4],

    // ── Segmente ────────────────────────────────────────────────
    /// Farbe für Nutzer-Segmente
    pub segment_color_user: [f32; 4],
    /// Farbe für generierte Deko-Segmente
    pub segment_color_deco: [f32; 4],

    // ── Fadenkreuz ──────────────────────────────────────────────
    /// Neutrale Farbe der Hilfslinien
    pub crosshair_color_neutral: [f32; 4],
    /// Warnfarbe der Hilfslinien
    pub crosshair_color_warning: [f32; 4],
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            plan_width: PLAN_WIDTH,
            plan_height: PLAN_HEIGHT,

            handle_size_px: HANDLE_SIZE_PX,
            handle_pick_radius_px: HANDLE_PICK_RADIUS_PX,
            handle_color_default: HANDLE_COLOR_DEFAULT,
            handle_color_active: HANDLE_COLOR_ACTIVE,

            segment_color_user: SEGMENT_COLOR_USER,
            segment_color_deco: SEGMENT_COLOR_DECO,

            crosshair_color_neutral: CROSSHAIR_COLOR_NEUTRAL,
            crosshair_color_warning: CROSSHAIR_COLOR_WARNING,
        }
    }
}

/// Serde-Default für `handle_pick_radius_px` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_handle_pick_radius_px() -> f32 {
    HANDLE_PICK_RADIUS_PX
}

impl PlannerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("dive_planner"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("dive_planner.toml")
    }

    /// Das konfigurierte Plan-Rechteck.
    pub fn plan_rect(&self) -> PlanRect {
        PlanRect::new(self.plan_width, self.plan_height)
    }
}
