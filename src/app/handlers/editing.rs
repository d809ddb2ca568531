//! Handler für Domänen-Mutationen (Zeichnen, Platzieren, Endpunkte, Transit).
//!
//! Jede Mutation nimmt vorher einen Undo-Snapshot auf und delegiert an die
//! Use-Cases.

use glam::Vec2;

use crate::app::state::DrawKind;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{LineProperties, RoadEnd, SeedKind};

/// Committet einen abgeschlossenen Pfad (Distrikt, Straße oder Split-Linie).
pub fn complete_drawing(state: &mut AppState, kind: DrawKind, vertices: Vec<Vec2>) {
    state.record_undo_snapshot();
    use_cases::editing::complete_drawing(state, kind, vertices);
}

/// Bestätigt eine Seed-Platzierung (`size = None` → Standardgröße).
pub fn confirm_placement(state: &mut AppState, kind: SeedKind, position: Vec2, size: Option<f32>) {
    state.record_undo_snapshot();
    use_cases::editing::confirm_placement(state, kind, position, size);
}

/// Schreibt die finale Position eines gezogenen Straßen-Endpunkts.
pub fn update_road_endpoint(state: &mut AppState, road_id: u64, end: RoadEnd, position: Vec2) {
    state.record_undo_snapshot();
    use_cases::editing::update_road_endpoint(state, road_id, end, position);
}

/// Committet eine fertig verkettete Transit-Linie.
pub fn commit_transit_line(state: &mut AppState, stations: Vec<u64>, properties: LineProperties) {
    state.record_undo_snapshot();
    use_cases::editing::commit_transit_line(state, stations, properties);
}

/// Löscht das aktuell selektierte Feature.
pub fn delete_selected(state: &mut AppState) {
    if state.selection.has_selection() {
        state.record_undo_snapshot();
        use_cases::editing::delete_selected_feature(state);
    }
}
