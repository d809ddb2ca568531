//! Selektions-State: das aktuell selektierte Feature.

use crate::core::FeatureRef;

/// Aktuelle Selektion (höchstens ein Feature).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Selektiertes Feature oder `None`
    pub selected: Option<FeatureRef>,
}

impl SelectionState {
    /// Erstellt eine leere Selektion.
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Selektiert ein Feature (ersetzt die bisherige Selektion).
    pub fn select(&mut self, feature: FeatureRef) {
        self.selected = Some(feature);
    }

    /// Hebt die Selektion auf.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Gibt `true` zurück, wenn ein Feature selektiert ist.
    pub fn has_selection(&self) -> bool {
        self.selected.is_some()
    }
}
