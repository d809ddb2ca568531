//! Zustand des Editor-Werkzeugs: aktiver Modus und persistierte Defaults.

use crate::core::LineProperties;

use super::mode::{ExclusiveMode, PathInput};

/// Zustand des aktuellen Editor-Werkzeugs.
pub struct EditorToolState {
    /// Aktiver exklusiver Modus (genau einer, Default: Idle)
    pub mode: ExclusiveMode,
    /// Persistierte Eingabeart für Pfad-Werkzeuge
    pub path_input: PathInput,
    /// Freihand-Override solange die Modifier-Taste gehalten wird.
    /// Ändert die persistierte Eingabeart nicht.
    pub freehand_override: bool,
    /// Default-Eigenschaften für neue Transit-Linien
    pub line_properties: LineProperties,
}

impl Default for EditorToolState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorToolState {
    /// Erstellt den Standard-Werkzeugzustand (Idle, Klick-Eingabe).
    pub fn new() -> Self {
        Self {
            mode: ExclusiveMode::Idle,
            path_input: PathInput::Click,
            freehand_override: false,
            line_properties: LineProperties::default(),
        }
    }

    /// Effektive Eingabeart: persistierter Wert oder gehaltener Override.
    pub fn effective_path_input(&self) -> PathInput {
        if self.freehand_override {
            PathInput::Freehand
        } else {
            self.path_input
        }
    }
}
