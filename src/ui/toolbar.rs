//! Toolbar für die Werkzeugauswahl.
//!
//! Werkzeug-Wechsel werden als Intents emittiert; die Ablehnung bei
//! aktivem Modus sitzt im Intent-Mapping (Aufrufort-Arbitrierung).

use crate::app::state::{DrawKind, ExclusiveMode, PathInput};
use crate::app::{AppIntent, AppState};
use crate::core::SeedKind;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let mode = &state.editor.mode;

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Werkzeug:");
            ui.separator();

            if ui
                .selectable_label(mode.is_idle(), "Selektieren (1)")
                .clicked()
            {
                events.push(AppIntent::SelectToolRequested);
            }

            ui.separator();

            for (kind, label) in [
                (DrawKind::Neighborhood, "Viertel (2)"),
                (DrawKind::CityLimits, "Stadtgrenze"),
                (DrawKind::Split, "Teilen"),
                (DrawKind::Road, "Straße (3)"),
                (DrawKind::Highway, "Highway (4)"),
            ] {
                let active = matches!(mode, ExclusiveMode::DrawingPath { kind: k, .. } if *k == kind);
                if ui.selectable_label(active, label).clicked() {
                    events.push(AppIntent::DrawToolRequested { kind });
                }
            }

            ui.separator();

            for kind in [
                SeedKind::Park,
                SeedKind::Forest,
                SeedKind::Lake,
                SeedKind::RailStation,
                SeedKind::SubwayStation,
            ] {
                let active = matches!(mode, ExclusiveMode::Placing { kind: k, .. } if *k == kind);
                if ui.selectable_label(active, kind.label()).clicked() {
                    events.push(AppIntent::SeedToolRequested { kind });
                }
            }

            ui.separator();

            let transit_active = matches!(mode, ExclusiveMode::DrawingTransitLine { .. });
            if ui
                .selectable_label(transit_active, "Transit (5)")
                .clicked()
            {
                events.push(AppIntent::TransitToolRequested);
            }

            ui.separator();

            // Eingabeart für Pfad-Werkzeuge (Shift halten = temporär Freihand)
            let input = state.editor.path_input;
            if ui
                .selectable_label(input == PathInput::Click, "Klick")
                .clicked()
            {
                events.push(AppIntent::PathInputChanged {
                    input: PathInput::Click,
                });
            }
            if ui
                .selectable_label(input == PathInput::Freehand, "Freihand")
                .clicked()
            {
                events.push(AppIntent::PathInputChanged {
                    input: PathInput::Freehand,
                });
            }
        });
    });

    events
}
