//! Pointer-Delta-Verarbeitung: Kamera-Pan.

use super::{InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Verarbeitet Maus-Bewegungs-Deltas für Kamera-Pan.
    ///
    /// Primär-Drag pannt nur solange das Pan-Gate fortgesetzt ist — aktive
    /// exklusive Modi pausieren es. Mittlere/rechte Maustaste pannt immer.
    pub(crate) fn handle_pointer_delta(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let pointer_delta = ctx.ui.input(|i| i.pointer.delta());
        if pointer_delta == egui::Vec2::ZERO {
            return;
        }

        let wpp = ctx.camera.world_per_pixel(ctx.viewport_size[1]);

        if ctx.response.dragged_by(egui::PointerButton::Primary) {
            if !ctx.pan_paused {
                events.push(AppIntent::CameraPan {
                    delta: glam::Vec2::new(-pointer_delta.x * wpp, -pointer_delta.y * wpp),
                });
            }
        } else if ctx.response.dragged_by(egui::PointerButton::Middle)
            || ctx.response.dragged_by(egui::PointerButton::Secondary)
        {
            events.push(AppIntent::CameraPan {
                delta: glam::Vec2::new(-pointer_delta.x * wpp, -pointer_delta.y * wpp),
            });
        }
    }
}
