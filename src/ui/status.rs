//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if let Some(map) = &state.city_map {
                ui.label(format!(
                    "Straßen: {} | Distrikte: {} | Stationen: {} | Linien: {}",
                    map.roads.len(),
                    map.districts.len(),
                    map.stations.len(),
                    map.transit_lines.len()
                ));
            } else {
                ui.label("Kein Dokument");
            }

            ui.separator();

            ui.label(format!("Modus: {}", state.editor.mode.label()));

            ui.separator();

            ui.label(format!(
                "Zoom: {:.2}x | Kamera: ({:.0}, {:.0})",
                state.view.camera.zoom,
                state.view.camera.position.x,
                state.view.camera.position.y
            ));

            if let Some(cursor) = state.view.cursor_world {
                ui.separator();
                ui.label(format!("Cursor: ({:.0}, {:.0})", cursor.x, cursor.y));
            }

            if let Some(path) = &state.ui.current_file_path {
                ui.separator();
                let filename = std::path::Path::new(path)
                    .file_name()
                    .and_then(|n| n.to_str())
                    .unwrap_or("unbekannt");
                ui.label(format!("Datei: {filename}"));
            }
        });
    });
}
