//! Use-Case-Funktionen für Datei-I/O (JSON-Dokumente).

use std::sync::Arc;

use anyhow::Context;

use crate::app::handlers::modes;
use crate::app::AppState;
use crate::core::CityMap;
use crate::json;

/// Legt ein neues, leeres Dokument an und setzt Editor-Zustand zurück.
pub fn new_map(state: &mut AppState) {
    modes::cancel_active(state);
    state.city_map = Some(Arc::new(CityMap::new()));
    state.selection.clear();
    state.history = crate::app::history::EditHistory::new_with_capacity(200);
    state.ui.current_file_path = None;
    log::info!("Neues Dokument angelegt");
}

/// Fordert den Datei-Öffnen-Dialog an (im nächsten Frame angezeigt).
pub fn request_open_file(state: &mut AppState) {
    state.ui.show_file_dialog = true;
}

/// Fordert den Datei-Speichern-Dialog an.
pub fn request_save_file(state: &mut AppState) {
    state.ui.show_save_file_dialog = true;
}

/// Lädt ein Dokument aus dem Pfad und ersetzt den aktuellen Zustand.
pub fn load_selected_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Datei konnte nicht gelesen werden: {path}"))?;
    let map = json::parse_city_map(&content)
        .with_context(|| format!("Dokument konnte nicht geparst werden: {path}"))?;

    // Laufende Gesten beziehen sich auf das alte Dokument
    modes::cancel_active(state);
    state.selection.clear();
    state.history = crate::app::history::EditHistory::new_with_capacity(200);

    log::info!("Dokument geladen: {path} ({} Features)", map.feature_count());
    state.city_map = Some(Arc::new(map));
    state.ui.current_file_path = Some(path);

    Ok(())
}

/// Speichert das Dokument.
///
/// `None` nutzt den bekannten Pfad oder fordert den Dialog an.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let target = match path.or_else(|| state.ui.current_file_path.clone()) {
        Some(p) => p,
        None => {
            request_save_file(state);
            return Ok(());
        }
    };

    let Some(map) = state.city_map.as_deref() else {
        return Ok(());
    };

    let content = json::write_city_map(map)?;
    std::fs::write(&target, content)
        .with_context(|| format!("Datei konnte nicht geschrieben werden: {target}"))?;

    log::info!("Dokument gespeichert: {target}");
    state.ui.current_file_path = Some(target);
    Ok(())
}
