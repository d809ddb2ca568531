//! Handler für Undo/Redo.

use crate::app::history::Snapshot;
use crate::app::AppState;

/// Macht die letzte Aktion rückgängig.
pub fn undo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    if let Some(snap) = state.history.undo(current) {
        snap.apply_to(state);
        log::info!("Undo ausgeführt");
    }
}

/// Stellt die zuletzt rückgängig gemachte Aktion wieder her.
pub fn redo(state: &mut AppState) {
    let current = Snapshot::from_state(state);
    if let Some(snap) = state.history.redo(current) {
        snap.apply_to(state);
        log::info!("Redo ausgeführt");
    }
}
