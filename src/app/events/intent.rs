use crate::shared::PlannerOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Pointer-Positionen sind rohe Viewport-Koordinaten (Pixel); die
/// Umrechnung in Plan-Koordinaten passiert erst im Intent-Mapping.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Pointer hat sich bewegt (Fadenkreuz nachführen, aktiven Drag fortsetzen)
    PointerMoved { screen_pos: glam::Vec2 },
    /// Primärtaste gedrückt (Handle greifen)
    PointerPressed { screen_pos: glam::Vec2 },
    /// Primärtaste losgelassen (Drag beenden)
    PointerReleased,
    /// Doppelklick (neues Handle anhängen)
    PointerDoubleClicked { screen_pos: glam::Vec2 },
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Gesamten Plan verwerfen
    ClearPlanRequested,
    /// Optionen wurden geändert (sofortige Anwendung + Persistierung)
    OptionsChanged { options: PlannerOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
