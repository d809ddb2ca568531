//! Options-Dialog für Laufzeit-Einstellungen.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !state.show_options_dialog {
        return events;
    }

    let mut options = state.options.clone();
    let mut open = true;

    egui::Window::new("Optionen")
        .open(&mut open)
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading("Gesten");
            ui.add(
                egui::Slider::new(&mut options.drag_threshold_px, 1.0..=20.0)
                    .text("Drag-Schwelle (px)"),
            );
            ui.add(
                egui::Slider::new(&mut options.selection_pick_radius_px, 4.0..=32.0)
                    .text("Pick-Radius (px)"),
            );

            ui.separator();
            ui.heading("Snap");
            ui.add(
                egui::Slider::new(&mut options.snap_threshold_world, 1.0..=100.0)
                    .text("Snap-Schwellwert (Welt)"),
            );
            ui.add(
                egui::Slider::new(&mut options.station_hover_radius_world, 5.0..=100.0)
                    .text("Stations-Hover-Radius (Welt)"),
            );
            ui.add(
                egui::Slider::new(&mut options.polygon_close_radius_world, 1.0..=50.0)
                    .text("Polygon-Schließ-Radius (Welt)"),
            );

            ui.separator();
            ui.heading("Seeds");
            ui.add(
                egui::Slider::new(&mut options.seed_size_min, 5.0..=100.0)
                    .text("Minimale Größe"),
            );
            ui.add(
                egui::Slider::new(&mut options.seed_size_max, 100.0..=1000.0)
                    .text("Maximale Größe"),
            );

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Zurücksetzen").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::CloseOptionsDialogRequested);
                }
            });
        });

    if options != state.options {
        events.push(AppIntent::OptionsChanged { options });
    }
    if !open {
        events.push(AppIntent::CloseOptionsDialogRequested);
    }

    events
}
