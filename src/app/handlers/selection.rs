//! Handler für Selektions-Operationen.

use crate::app::history::Snapshot;
use crate::app::use_cases;
use crate::app::{AppState, SelectionState};

/// Zeichnet einen Undo-Snapshot auf, wenn sich die Selektion geändert hat.
fn record_if_selection_changed(state: &mut AppState, old_selection: SelectionState) {
    if old_selection != state.selection {
        let snap = Snapshot {
            city_map: state.city_map.clone(),
            selection: old_selection,
        };
        state.history.record_snapshot(snap);
    }
}

/// Fallback-Klick: Feature unter dem Punkt selektieren oder Selektion aufheben.
pub fn pick_feature(state: &mut AppState, world_pos: glam::Vec2) {
    let old = state.selection.clone();
    use_cases::selection::pick_feature(state, world_pos);
    record_if_selection_changed(state, old);
}

/// Hebt die aktuelle Selektion auf.
pub fn clear(state: &mut AppState) {
    let old = state.selection.clone();
    use_cases::selection::clear_selection(state);
    record_if_selection_changed(state, old);
}
