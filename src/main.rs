//! Dive-Planner (headless).
//!
//! Treibt den Planner-Kern ohne Rendering-Frontend mit einer kurzen
//! Beispiel-Session an und protokolliert den resultierenden Plan. Das
//! eigentliche Zeichnen und die Eingabe-Anbindung liefert ein externer
//! Host, der `AppIntent`s einspeist und die `RenderScene` konsumiert.

use dive_planner::{AppController, AppIntent, AppState, PlannerOptions};
use glam::Vec2;

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Dive-Planner v{} startet...", env!("CARGO_PKG_VERSION"));

    // Optionen aus TOML laden (oder Standardwerte)
    let config_path = PlannerOptions::config_path();
    let planner_options = PlannerOptions::load_from_file(&config_path);

    let mut state = AppState::new();
    state.options = planner_options;
    let mut controller = AppController::new();

    // Beispiel-Session: Viewport setzen, zwei Handles anlegen,
    // erstes Handle greifen und verschieben
    let session = [
        AppIntent::ViewportResized {
            size: [800.0, 600.0],
        },
        AppIntent::PointerDoubleClicked {
            screen_pos: Vec2::new(80.0, 60.0),
        },
        AppIntent::PointerDoubleClicked {
            screen_pos: Vec2::new(160.0, 180.0),
        },
        AppIntent::PointerPressed {
            screen_pos: Vec2::new(82.0, 62.0),
        },
        AppIntent::PointerMoved {
            screen_pos: Vec2::new(120.0, 150.0),
        },
        AppIntent::PointerReleased,
    ];

    for intent in session {
        controller.handle_intent(&mut state, intent)?;
    }

    let scene = controller.build_render_scene(&state, state.view.viewport_size);
    log::info!(
        "Plan: {} Handles, {} Nutzer-Segmente, {} Deko-Segmente",
        state.plan.handle_count(),
        state.plan.segment_count(),
        state.plan.deco_count()
    );
    for handle in &scene.handles {
        log::info!(
            "  Handle {}: Zeit {:.1}, Tiefe {:.1}",
            handle.id,
            handle.position.x,
            handle.position.y
        );
    }

    Ok(())
}
