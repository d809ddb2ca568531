//! Snapshot-basiertes Undo/Redo über Arc-Copy-on-Write.

use std::sync::Arc;

use super::state::SelectionState;
use crate::core::CityMap;

/// Snapshot reduziert auf die für Undo/Redo relevanten Teile.
///
/// Nutzt Arc-Clone (Copy-on-Write): Das Erstellen eines Snapshots ist O(1) —
/// der teure CityMap-Klon findet erst beim nächsten `Arc::make_mut()` in
/// einem Use-Case statt.
#[derive(Clone)]
pub struct Snapshot {
    /// Optionale CityMap (Arc-Klon für O(1)-Snapshot)
    pub city_map: Option<Arc<CityMap>>,
    /// Selektionszustand zum Zeitpunkt des Snapshots
    pub selection: SelectionState,
}

impl Snapshot {
    /// Erstellt einen O(1)-Snapshot durch Arc-Clone statt Deep-Clone.
    pub fn from_state(state: &crate::app::AppState) -> Self {
        Self {
            city_map: state.city_map.clone(), // O(1): nur Arc-Ref-Count erhöhen
            selection: state.selection.clone(),
        }
    }

    /// Stellt den Snapshot wieder her (O(1) Arc-Zuweisung).
    pub fn apply_to(self, state: &mut crate::app::AppState) {
        state.city_map = self.city_map;
        state.selection = self.selection;
    }
}

/// Einfacher Undo/Redo-Manager mit Snapshotting.
#[derive(Default)]
pub struct EditHistory {
    undo_stack: Vec<Snapshot>,
    redo_stack: Vec<Snapshot>,
    max_depth: usize,
}

impl EditHistory {
    /// Erstellt einen neuen History-Manager mit maximaler Tiefe.
    pub fn new_with_capacity(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::with_capacity(max_depth),
            redo_stack: Vec::with_capacity(max_depth),
            max_depth,
        }
    }

    /// Zeichnet einen vorbereiteten Snapshot auf und leert den Redo-Stack.
    pub fn record_snapshot(&mut self, snap: Snapshot) {
        if self.undo_stack.len() >= self.max_depth {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(snap);
        self.redo_stack.clear();
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Nimmt den obersten Undo-Snapshot und legt den Gegenwarts-Snapshot
    /// auf den Redo-Stack.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let snap = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(snap)
    }

    /// Nimmt den obersten Redo-Snapshot und legt den Gegenwarts-Snapshot
    /// auf den Undo-Stack.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let snap = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(snap)
    }
}
