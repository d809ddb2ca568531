//! Pointer-Press/-Release inkl. Drag-Session der Drag-Disambiguierung.

use super::{screen_pos_to_world, DragSession, InputState, ViewportContext};
use crate::app::AppIntent;

impl InputState {
    /// Erkennt den Primärtasten-Druck im Viewport und startet die Drag-Session.
    pub(crate) fn handle_pointer_press(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let pressed = ctx
            .ui
            .input(|i| i.pointer.button_pressed(egui::PointerButton::Primary));
        if !pressed || !ctx.response.contains_pointer() {
            return;
        }

        // press_origin() liefert die exakte Druckposition (vor der
        // Drag-Schwelle) — wichtig für symmetrische Hitboxen.
        let Some(pointer_pos) = ctx.ui.input(|i| i.pointer.press_origin()) else {
            return;
        };

        // Jeder neue Pointer-Down ersetzt die alte Session, egal wie die
        // vorherige Geste endete.
        self.drag_session = Some(DragSession::new(pointer_pos));

        let world_pos = screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);
        events.push(AppIntent::PointerPressed { world_pos });
    }

    /// Aktualisiert Drag-Session und Move-Intent bei Cursor-Bewegung.
    pub(crate) fn handle_pointer_move(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let delta = ctx.ui.input(|i| i.pointer.delta());
        if delta == egui::Vec2::ZERO {
            return;
        }

        let pointer_pos = ctx
            .response
            .interact_pointer_pos()
            .or_else(|| ctx.response.hover_pos());
        let Some(pointer_pos) = pointer_pos else {
            return;
        };

        if let Some(session) = self.drag_session.as_mut() {
            session.update(pointer_pos, ctx.options.drag_threshold_px);
        } else if !ctx.response.contains_pointer() {
            // Reine Hover-Bewegung außerhalb des Canvas ignorieren
            return;
        }

        let world_pos = screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);
        events.push(AppIntent::PointerMoved { world_pos });
    }

    /// Beendet die Geste: Release-Intent mit dem Ergebnis der
    /// Drag-Disambiguierung (`was_drag`).
    pub(crate) fn handle_pointer_release(
        &mut self,
        ctx: &ViewportContext,
        events: &mut Vec<AppIntent>,
    ) {
        let released = ctx
            .ui
            .input(|i| i.pointer.button_released(egui::PointerButton::Primary));
        if !released {
            return;
        }

        // Release ohne vorherigen Press im Canvas (z.B. Klick in ein Panel)
        let Some(session) = self.drag_session.take() else {
            return;
        };

        let pointer_pos = ctx
            .response
            .interact_pointer_pos()
            .or_else(|| ctx.ui.input(|i| i.pointer.latest_pos()))
            .unwrap_or(session.origin_screen);

        let world_pos = screen_pos_to_world(pointer_pos, ctx.response, ctx.viewport_size, ctx.camera);
        events.push(AppIntent::PointerReleased {
            world_pos,
            was_drag: session.exceeded,
        });
    }
}
