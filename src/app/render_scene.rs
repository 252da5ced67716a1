//! Builder für Render-Szenen aus dem AppState.

use glam::Vec2;

use crate::app::AppState;
use crate::shared::{CrosshairSprite, HandleSprite, RenderScene, SegmentSprite};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Handles erscheinen in Zeit-Reihenfolge, Segmente zuerst in
/// Erstellungsreihenfolge und dahinter die generierten Deko-Segmente.
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    let handles = state
        .plan
        .handles_iter()
        .map(|handle| HandleSprite {
            id: handle.id,
            position: handle.position,
            active: state.drag.active_handle == Some(handle.id),
        })
        .collect();

    let segments = state
        .plan
        .segments_iter()
        .chain(state.plan.deco_segments().iter())
        .map(|segment| SegmentSprite {
            id: segment.id,
            start: segment.start_pos,
            end: segment.end_pos,
            generated: segment.generated,
        })
        .collect();

    let rect = state.options.plan_rect();
    let pos = state.crosshair.position;
    let crosshair = CrosshairSprite {
        vertical: (Vec2::new(pos.x, 0.0), Vec2::new(pos.x, rect.height)),
        horizontal: (Vec2::new(0.0, pos.y), Vec2::new(rect.width, pos.y)),
        warning: state.crosshair.warning,
    };

    RenderScene {
        handles,
        segments,
        crosshair,
        viewport_size,
        options: state.options.clone(),
    }
}
