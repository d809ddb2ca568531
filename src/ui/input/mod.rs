//! Viewport-Input-Handling: Maus-Events, Drag-Disambiguierung, Scroll → AppIntent.
//!
//! Aufgeteilt in phasenbasierte Submodule:
//! - `pointer` — Press/Release inkl. Drag-Session (Klick-vs-Drag-Schwelle)
//! - `pointer_delta` — Kamera-Pan und Move-Intents während Bewegung
//! - `zoom` — Scroll-Zoom auf Mausposition
//!
//! Der `InputState` lebt über die gesamte Canvas-Lebensdauer; alle
//! veränderlichen Eingaben (Modus, Kamera, Gate) kommen pro Frame frisch
//! über den `ViewportContext` herein. Re-Renders reißen so nie einen
//! laufenden Drag ab.

mod pointer;
mod pointer_delta;
mod zoom;

use super::keyboard;
use crate::app::{AppIntent, Camera2D};
use crate::shared::EditorOptions;

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
///
/// Wird jeden Frame aus dem aktuellen AppState neu gebaut — die Handler
/// lesen dadurch immer aktuelle Werte, ohne neu registriert zu werden.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a Camera2D,
    /// Pan-Gate-Zustand: `true` unterdrückt Kamera-Pan über den Primär-Drag
    pub pan_paused: bool,
    pub options: &'a EditorOptions,
}

/// Transiente Drag-Session der Drag-Disambiguierung.
///
/// Entsteht bei Pointer-Down, stirbt bei Pointer-Up, wird nie persistiert.
/// `exceeded` ist monoton: einmal über der Schwelle, bleibt die Geste für
/// ihren Rest ein Drag.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DragSession {
    /// Ursprung in Screen-Koordinaten (exakte Druckposition)
    pub origin_screen: egui::Pos2,
    /// Schwelle überschritten → Geste ist ein Drag, kein Klick
    pub exceeded: bool,
}

impl DragSession {
    /// Startet eine neue Session am Druckpunkt.
    pub fn new(origin_screen: egui::Pos2) -> Self {
        Self {
            origin_screen,
            exceeded: false,
        }
    }

    /// Aktualisiert das Drag-Flag anhand der euklidischen Distanz zum Ursprung.
    pub fn update(&mut self, current: egui::Pos2, threshold_px: f32) {
        if !self.exceeded && self.origin_screen.distance(current) > threshold_px {
            self.exceeded = true;
        }
    }
}

/// Verwaltet den Input-Zustand für das Viewport (Drag-Session, Modifier).
#[derive(Default)]
pub struct InputState {
    pub(crate) drag_session: Option<DragSession>,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { drag_session: None }
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Diese Methode ist der zentrale UI→Intent-Einstieg für Maus-, Scroll-
    /// und Tastatur-Interaktionen im Viewport. Jede Pointer-Position wird
    /// genau einmal in Weltkoordinaten transformiert, bevor Modus-Logik
    /// läuft.
    #[allow(clippy::too_many_arguments)]
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
        camera: &Camera2D,
        pan_paused: bool,
        mode_active: bool,
        has_selection: bool,
        freehand_override_active: bool,
        options: &EditorOptions,
    ) -> Vec<AppIntent> {
        let ctx = ViewportContext {
            ui,
            response,
            viewport_size,
            camera,
            pan_paused,
            options,
        };

        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        // Keyboard-Shortcuts (ausgelagert in keyboard.rs)
        events.extend(keyboard::collect_keyboard_intents(
            ui,
            mode_active,
            has_selection,
            freehand_override_active,
        ));

        self.handle_pointer_press(&ctx, &mut events);
        self.handle_pointer_move(&ctx, &mut events);
        self.handle_pointer_release(&ctx, &mut events);
        self.handle_pointer_delta(&ctx, &mut events);
        self.handle_scroll_zoom(&ctx, &mut events);

        events
    }
}

/// Rechnet eine Bildschirmposition in Weltkoordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::new(viewport_size[0], viewport_size[1]),
    )
}

#[cfg(test)]
mod tests {
    use super::DragSession;

    #[test]
    fn drag_flag_is_monotonic_per_session() {
        let origin = egui::Pos2::new(100.0, 100.0);
        let mut session = DragSession::new(origin);
        assert!(!session.exceeded);

        // Innerhalb der Schwelle: weiterhin Klick
        session.update(egui::Pos2::new(103.0, 100.0), 5.0);
        assert!(!session.exceeded);

        // Schwelle überschritten: Drag
        session.update(egui::Pos2::new(100.0, 107.0), 5.0);
        assert!(session.exceeded);

        // Rückkehr zum Ursprung setzt das Flag NICHT zurück
        session.update(origin, 5.0);
        assert!(session.exceeded);
    }
}
