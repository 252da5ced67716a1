//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem externen Renderer geteilt
//! werden, um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;

pub use options::PlannerOptions;
pub use render_scene::{CrosshairSprite, HandleSprite, RenderScene, SegmentSprite};
