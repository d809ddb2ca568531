//! Hauptzustand der Anwendung.

use std::sync::Arc;

use crate::app::history::Snapshot;
use crate::app::CommandLog;
use crate::core::CityMap;
use crate::shared::EditorOptions;

use super::{EditorToolState, SelectionState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell geladener Stadtplan (None = Dokument noch nicht initialisiert)
    pub city_map: Option<Arc<CityMap>>,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Selection-State
    pub selection: SelectionState,
    /// Editor-Werkzeug-State
    pub editor: EditorToolState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Undo/Redo-History (Snapshot-basiert)
    pub history: crate::app::history::EditHistory,
    /// Laufzeit-Optionen (Schwellwerte, Farben, Größen)
    pub options: EditorOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen App-State mit leerem Stadtplan.
    pub fn new() -> Self {
        Self {
            city_map: Some(Arc::new(CityMap::new())),
            view: ViewState::new(),
            ui: UiState::new(),
            selection: SelectionState::new(),
            editor: EditorToolState::new(),
            command_log: CommandLog::new(),
            history: crate::app::history::EditHistory::new_with_capacity(200),
            options: EditorOptions::default(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Gibt die Gesamtzahl aller Features zurück (für UI-Anzeige)
    pub fn feature_count(&self) -> usize {
        self.city_map.as_ref().map_or(0, |map| map.feature_count())
    }

    /// Gibt zurück, ob ein Undo-Schritt verfügbar ist.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Gibt zurück, ob ein Redo-Schritt verfügbar ist.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Erstellt einen Undo-Snapshot des aktuellen Zustands.
    /// Reduziert Boilerplate in mutierenden Use-Cases.
    pub fn record_undo_snapshot(&mut self) {
        let snap = Snapshot::from_state(self);
        self.history.record_snapshot(snap);
    }

    /// Berechnet den aktuellen Pick-Radius in Welteinheiten.
    pub fn pick_radius_world(&self) -> f32 {
        self.view.camera.pick_radius_world(
            self.view.viewport_size[1],
            self.options.selection_pick_radius_px,
        )
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// UI-State: Dialog-Flags und aktueller Dateipfad.
#[derive(Default)]
pub struct UiState {
    /// Pfad der aktuell geladenen/gespeicherten Datei
    pub current_file_path: Option<String>,
    /// Open-Dialog im nächsten Frame anzeigen
    pub show_file_dialog: bool,
    /// Save-Dialog im nächsten Frame anzeigen
    pub show_save_file_dialog: bool,
}

impl UiState {
    /// Erstellt einen leeren UI-State.
    pub fn new() -> Self {
        Self::default()
    }
}
