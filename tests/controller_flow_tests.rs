use dive_planner::{AppController, AppIntent, AppState};
use dive_planner::{DecoModel, DecoSegment, DiveHandle, PlanRect, SegmentEnd};
use glam::Vec2;

/// Erstellt einen App-State mit 100×100-Viewport, sodass Screen-Pixel
/// direkt Plan-Einheiten entsprechen.
fn make_state() -> AppState {
    let mut state = AppState::new();
    state.view.viewport_size = [100.0, 100.0];
    state
}

fn double_click(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerDoubleClicked {
                screen_pos: Vec2::new(x, y),
            },
        )
        .expect("Doppelklick sollte ohne Fehler durchlaufen");
}

fn pointer_move(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerMoved {
                screen_pos: Vec2::new(x, y),
            },
        )
        .expect("Pointer-Move sollte ohne Fehler durchlaufen");
}

fn pointer_press(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    controller
        .handle_intent(
            state,
            AppIntent::PointerPressed {
                screen_pos: Vec2::new(x, y),
            },
        )
        .expect("Pointer-Press sollte ohne Fehler durchlaufen");
}

#[test]
fn test_first_double_click_creates_origin_segment_and_deco() {
    let mut controller = AppController::new();
    let mut state = make_state();

    double_click(&mut controller, &mut state, 10.0, 10.0);

    assert_eq!(state.plan.handle_count(), 1);
    assert_eq!(state.plan.segment_count(), 1);
    assert_eq!(state.plan.deco_count(), 1);

    let segment = state.plan.segments_iter().next().expect("Segment erwartet");
    assert_eq!(segment.start, SegmentEnd::Fixed(Vec2::ZERO));
    assert_eq!(segment.end_pos, Vec2::new(10.0, 10.0));

    // Platzhalter-Modell: ein Segment zum rechten Rand auf Tiefe 0
    let deco = &state.plan.deco_segments()[0];
    assert_eq!(deco.start_pos, Vec2::new(10.0, 10.0));
    assert_eq!(deco.end_pos, Vec2::new(100.0, 0.0));
    assert!(deco.generated);
}

#[test]
fn test_two_handles_scenario() {
    let mut controller = AppController::new();
    let mut state = make_state();

    double_click(&mut controller, &mut state, 10.0, 10.0);
    double_click(&mut controller, &mut state, 20.0, 30.0);

    let positions: Vec<Vec2> = state.plan.handles_iter().map(|h| h.position).collect();
    assert_eq!(positions, vec![Vec2::new(10.0, 10.0), Vec2::new(20.0, 30.0)]);

    let segments: Vec<(Vec2, Vec2)> = state
        .plan
        .segments_iter()
        .map(|s| (s.start_pos, s.end_pos))
        .collect();
    assert_eq!(
        segments,
        vec![
            (Vec2::ZERO, Vec2::new(10.0, 10.0)),
            (Vec2::new(10.0, 10.0), Vec2::new(20.0, 30.0)),
        ]
    );

    // Deko exakt aus dem neuen letzten Handle abgeleitet
    assert_eq!(state.plan.deco_count(), 1);
    let deco = &state.plan.deco_segments()[0];
    assert_eq!(deco.start_pos, Vec2::new(20.0, 30.0));
    assert_eq!(deco.end_pos, Vec2::new(100.0, 0.0));
}

#[test]
fn test_double_click_with_time_regression_is_noop() {
    let mut controller = AppController::new();
    let mut state = make_state();

    double_click(&mut controller, &mut state, 10.0, 10.0);
    double_click(&mut controller, &mut state, 20.0, 30.0);
    // Zeitlich vor dem letzten Handle → No-op
    double_click(&mut controller, &mut state, 15.0, 5.0);

    assert_eq!(state.plan.handle_count(), 2);
    assert_eq!(state.plan.segment_count(), 2);
    assert_eq!(state.plan.deco_count(), 1);
    let positions: Vec<Vec2> = state.plan.handles_iter().map(|h| h.position).collect();
    assert_eq!(positions, vec![Vec2::new(10.0, 10.0), Vec2::new(20.0, 30.0)]);
}

#[test]
fn test_double_click_out_of_bounds_is_noop() {
    let mut controller = AppController::new();
    let mut state = make_state();

    double_click(&mut controller, &mut state, 10.0, 10.0);
    // 150 > Plan-Breite 100 → No-op
    double_click(&mut controller, &mut state, 150.0, 50.0);

    assert_eq!(state.plan.handle_count(), 1);
    assert_eq!(state.plan.segment_count(), 1);
    assert_eq!(state.plan.deco_count(), 1);
}

#[test]
fn test_segment_counts_hold_after_each_add() {
    let mut controller = AppController::new();
    let mut state = make_state();

    for i in 1..=6 {
        double_click(&mut controller, &mut state, i as f32 * 12.0, 40.0);

        assert_eq!(state.plan.segment_count(), state.plan.handle_count());
        assert_eq!(
            state.plan.segments_between_handles(),
            state.plan.handle_count() - 1
        );
        // Neu aufgebaut, nie akkumuliert
        assert_eq!(state.plan.deco_count(), 1);
    }
}

#[test]
fn test_press_grabs_nearest_handle_and_release_clears() {
    let mut controller = AppController::new();
    let mut state = make_state();
    double_click(&mut controller, &mut state, 10.0, 10.0);

    pointer_press(&mut controller, &mut state, 10.5, 10.5);
    let active = state.drag.active_handle.expect("Handle sollte aktiv sein");
    assert!(state.plan.is_last_handle(active));

    controller
        .handle_intent(&mut state, AppIntent::PointerReleased)
        .expect("Release sollte ohne Fehler durchlaufen");
    assert!(state.drag.active_handle.is_none());
}

#[test]
fn test_press_far_from_handles_grabs_nothing() {
    let mut controller = AppController::new();
    let mut state = make_state();
    double_click(&mut controller, &mut state, 10.0, 10.0);

    pointer_press(&mut controller, &mut state, 80.0, 80.0);

    assert!(state.drag.active_handle.is_none());
}

#[test]
fn test_drag_within_neighbor_window_moves_handle_and_segments() {
    let mut controller = AppController::new();
    let mut state = make_state();
    double_click(&mut controller, &mut state, 10.0, 10.0);
    double_click(&mut controller, &mut state, 20.0, 30.0);

    pointer_press(&mut controller, &mut state, 10.0, 10.0);
    pointer_move(&mut controller, &mut state, 15.0, 25.0);

    let first = state.plan.handles_iter().next().expect("Handle erwartet");
    assert_eq!(first.position, Vec2::new(15.0, 25.0));

    let segments: Vec<(Vec2, Vec2)> = state
        .plan
        .segments_iter()
        .map(|s| (s.start_pos, s.end_pos))
        .collect();
    assert_eq!(
        segments,
        vec![
            (Vec2::ZERO, Vec2::new(15.0, 25.0)),
            (Vec2::new(15.0, 25.0), Vec2::new(20.0, 30.0)),
        ]
    );
}

#[test]
fn test_drag_violating_neighbor_order_is_noop() {
    let mut controller = AppController::new();
    let mut state = make_state();
    double_click(&mut controller, &mut state, 10.0, 10.0);
    double_click(&mut controller, &mut state, 20.0, 30.0);

    pointer_press(&mut controller, &mut state, 10.0, 10.0);
    // 25 > 20 → würde den Nachbarn überholen → Handle bleibt stehen
    pointer_move(&mut controller, &mut state, 25.0, 25.0);

    let first = state.plan.handles_iter().next().expect("Handle erwartet");
    assert_eq!(first.position, Vec2::new(10.0, 10.0));
    let segments: Vec<(Vec2, Vec2)> = state
        .plan
        .segments_iter()
        .map(|s| (s.start_pos, s.end_pos))
        .collect();
    assert_eq!(
        segments,
        vec![
            (Vec2::ZERO, Vec2::new(10.0, 10.0)),
            (Vec2::new(10.0, 10.0), Vec2::new(20.0, 30.0)),
        ]
    );
}

#[test]
fn test_drag_of_last_handle_rebuilds_deco() {
    let mut controller = AppController::new();
    let mut state = make_state();
    double_click(&mut controller, &mut state, 10.0, 10.0);
    double_click(&mut controller, &mut state, 20.0, 30.0);

    pointer_press(&mut controller, &mut state, 20.0, 30.0);
    pointer_move(&mut controller, &mut state, 35.0, 45.0);

    assert_eq!(state.plan.deco_count(), 1);
    let deco = &state.plan.deco_segments()[0];
    assert_eq!(deco.start_pos, Vec2::new(35.0, 45.0));
    assert_eq!(deco.end_pos, Vec2::new(100.0, 0.0));
}

#[test]
fn test_move_without_active_drag_only_updates_crosshair() {
    let mut controller = AppController::new();
    let mut state = make_state();
    double_click(&mut controller, &mut state, 10.0, 10.0);

    pointer_move(&mut controller, &mut state, 50.0, 50.0);

    assert_eq!(state.crosshair.position, Vec2::new(50.0, 50.0));
    let handle = state.plan.handles_iter().next().expect("Handle erwartet");
    assert_eq!(handle.position, Vec2::new(10.0, 10.0));
}

#[test]
fn test_crosshair_warning_behind_last_handle() {
    let mut controller = AppController::new();
    let mut state = make_state();
    double_click(&mut controller, &mut state, 60.0, 40.0);

    // Vor dem letzten Handle → Warnfarbe
    pointer_move(&mut controller, &mut state, 50.0, 50.0);
    assert!(state.crosshair.warning);

    // Hinter dem letzten Handle → neutral
    pointer_move(&mut controller, &mut state, 70.0, 20.0);
    assert!(!state.crosshair.warning);
}

#[test]
fn test_out_of_bounds_move_leaves_crosshair_and_log_untouched() {
    let mut controller = AppController::new();
    let mut state = make_state();

    pointer_move(&mut controller, &mut state, 40.0, 40.0);
    let log_len = state.command_log.len();

    pointer_move(&mut controller, &mut state, 150.0, 40.0);

    assert_eq!(state.crosshair.position, Vec2::new(40.0, 40.0));
    assert_eq!(state.command_log.len(), log_len);
}

#[test]
fn test_clear_plan_resets_to_start_state() {
    let mut controller = AppController::new();
    let mut state = make_state();
    double_click(&mut controller, &mut state, 10.0, 10.0);
    double_click(&mut controller, &mut state, 20.0, 30.0);
    pointer_press(&mut controller, &mut state, 20.0, 30.0);

    controller
        .handle_intent(&mut state, AppIntent::ClearPlanRequested)
        .expect("ClearPlanRequested sollte funktionieren");

    assert_eq!(state.plan.handle_count(), 0);
    assert_eq!(state.plan.segment_count(), 0);
    assert_eq!(state.plan.deco_count(), 0);
    assert!(state.drag.active_handle.is_none());

    // Nach Clear darf wieder zeitlich früh eingefügt werden
    double_click(&mut controller, &mut state, 5.0, 5.0);
    assert_eq!(state.plan.handle_count(), 1);
}

// ═══════════════════════════════════════════════════════════════════
// Injizierte Deko-Modelle: 0..n Segmente, immer komplett neu aufgebaut
// ═══════════════════════════════════════════════════════════════════

/// Modell mit einem Zwischenstopp: zwei gestufte Segmente bis zur Senke.
struct StagedStopsModel;

impl DecoModel for StagedStopsModel {
    fn generate(&self, last_handle: &DiveHandle, rect: &PlanRect) -> Vec<DecoSegment> {
        let stop = Vec2::new(
            last_handle.position.x + 10.0,
            last_handle.position.y * 0.5,
        );
        vec![
            DecoSegment::new(last_handle.position, stop),
            DecoSegment::new(stop, rect.surface_sink()),
        ]
    }
}

/// Modell ohne Stopps (leere Ausgabe ist gültig).
struct NoStopsModel;

impl DecoModel for NoStopsModel {
    fn generate(&self, _last_handle: &DiveHandle, _rect: &PlanRect) -> Vec<DecoSegment> {
        Vec::new()
    }
}

#[test]
fn test_staged_model_yields_two_deco_segments_per_rebuild() {
    let mut controller = AppController::new();
    let mut state = AppState::with_deco_model(Box::new(StagedStopsModel));
    state.view.viewport_size = [100.0, 100.0];

    double_click(&mut controller, &mut state, 10.0, 40.0);
    assert_eq!(state.plan.deco_count(), 2);

    double_click(&mut controller, &mut state, 30.0, 60.0);
    // Neu aufgebaut, nicht akkumuliert
    assert_eq!(state.plan.deco_count(), 2);

    let deco: Vec<(Vec2, Vec2)> = state
        .plan
        .deco_segments()
        .iter()
        .map(|s| (s.start_pos, s.end_pos))
        .collect();
    assert_eq!(
        deco,
        vec![
            (Vec2::new(30.0, 60.0), Vec2::new(40.0, 30.0)),
            (Vec2::new(40.0, 30.0), Vec2::new(100.0, 0.0)),
        ]
    );

    // Erstes Deko-Segment hängt am letzten Handle, der Rest an festen Punkten
    let last = state.plan.last_handle().expect("Handle erwartet");
    assert_eq!(
        state.plan.deco_segments()[0].start,
        SegmentEnd::Handle(last.id)
    );
    assert!(matches!(
        state.plan.deco_segments()[1].start,
        SegmentEnd::Fixed(_)
    ));
}

#[test]
fn test_empty_model_yields_no_deco_segments() {
    let mut controller = AppController::new();
    let mut state = AppState::with_deco_model(Box::new(NoStopsModel));
    state.view.viewport_size = [100.0, 100.0];

    double_click(&mut controller, &mut state, 10.0, 40.0);
    double_click(&mut controller, &mut state, 30.0, 60.0);

    assert_eq!(state.plan.deco_count(), 0);
    assert_eq!(state.plan.segment_count(), 2);
}
