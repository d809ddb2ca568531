//! Der exklusive Editier-Modus als Summentyp.
//!
//! Genau eine Variante ist zu jedem Zeitpunkt aktiv. Modus-spezifische
//! Felder existieren nur in ihrer Variante — zwei gleichzeitig aktive Modi
//! oder verwaiste Gesten-Daten sind damit nicht darstellbar.

use glam::Vec2;

use crate::core::{LineProperties, RoadEnd, SeedKind, SnapGeometry};

/// Eingabeart beim Pfad-Zeichnen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathInput {
    /// Klick-für-Klick mit Gummiband-Vorschau
    #[default]
    Click,
    /// Freihand: Punkte werden während des Drags gesammelt
    Freehand,
}

/// Art des gezeichneten Pfads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKind {
    /// Wohnviertel (geschlossene Fläche)
    Neighborhood,
    /// Stadtgrenze (geschlossene Fläche)
    CityLimits,
    /// Split-Linie durch einen Distrikt (offene Linie)
    Split,
    /// Straße (offene Linie)
    Road,
    /// Highway (offene Linie)
    Highway,
}

impl DrawKind {
    /// Geschlossene Flächen-Geometrie (Distrikt) vs. offene Linie.
    pub fn is_area(&self) -> bool {
        matches!(self, DrawKind::Neighborhood | DrawKind::CityLimits)
    }

    /// Flächen-Arten schließen per Klick nahe dem ersten Vertex;
    /// Linien-Arten (Road/Highway/Split) nur per Enter.
    pub fn closes_by_click(&self) -> bool {
        self.is_area()
    }

    /// Mindestanzahl Vertices für einen gültigen Abschluss.
    pub fn min_vertices(&self) -> usize {
        if self.is_area() {
            3
        } else {
            2
        }
    }

    /// Anzeige-Name für Toolbar und Statusleiste.
    pub fn label(&self) -> &'static str {
        match self {
            DrawKind::Neighborhood => "Viertel",
            DrawKind::CityLimits => "Stadtgrenze",
            DrawKind::Split => "Teilen",
            DrawKind::Road => "Straße",
            DrawKind::Highway => "Highway",
        }
    }
}

/// Snap-Ziel eines laufenden Endpunkt-Drags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapTarget {
    /// ID der Geometrie, auf die gesnappt wurde
    pub geometry_id: u64,
    /// Typ der Geometrie
    pub geometry: SnapGeometry,
}

/// Der exklusive Editier-Modus.
///
/// Selektion ist KEIN exklusiver Modus, sondern der Fallback bei `Idle`.
#[derive(Debug, Clone, PartialEq)]
pub enum ExclusiveMode {
    /// Kein Modus aktiv; Klicks selektieren Features.
    Idle,
    /// Seed-Platzierung mit Vorschau und optionalem Drag-to-Size.
    Placing {
        /// Art des platzierten Seeds
        kind: SeedKind,
        /// Vorschau-Position unter dem Cursor
        preview: Vec2,
        /// Ursprung eines laufenden Sizing-Drags
        drag_origin: Option<Vec2>,
        /// Aktueller Sizing-Radius (roh, nach oben gekappt)
        drag_size: Option<f32>,
    },
    /// Polygon-/Linien-Zeichnen (Klick oder Freihand).
    DrawingPath {
        /// Art des Pfads
        kind: DrawKind,
        /// Bisher gesammelte Vertices in Weltkoordinaten
        vertices: Vec<Vec2>,
        /// Persistierte Eingabeart
        input: PathInput,
        /// Läuft gerade ein Freihand-Strich?
        freehand_active: bool,
        /// Vorschau-Punkt für das Gummiband (nur Klick-Modus)
        preview: Option<Vec2>,
    },
    /// Drag eines Straßen-Endpunkts mit Snapping.
    DraggingEndpoint {
        /// ID der Straße
        road_id: u64,
        /// Welches Ende gezogen wird
        end: RoadEnd,
        /// Aktuelle Drag-Position (gesnappt oder frei)
        position: Vec2,
        /// Liegt die Position auf einem Snap-Punkt?
        snapped: bool,
        /// Geometrie, auf die gesnappt wurde
        snap_target: Option<SnapTarget>,
    },
    /// Transit-Linie über Stationen verketten.
    DrawingTransitLine {
        /// Aktueller Ketten-Kopf (Start der nächsten Verbindung)
        first_station: Option<u64>,
        /// Verkettete Stationen in Reihenfolge
        stations: Vec<u64>,
        /// Eigenschaften der entstehenden Linie
        properties: LineProperties,
        /// Station unter dem Cursor (innerhalb des Hover-Radius)
        hovered_station: Option<u64>,
        /// Vorschau-Position unter dem Cursor
        preview: Option<Vec2>,
    },
}

impl ExclusiveMode {
    /// Gibt `true` zurück, wenn kein exklusiver Modus aktiv ist.
    pub fn is_idle(&self) -> bool {
        matches!(self, ExclusiveMode::Idle)
    }

    /// Kurzbeschreibung für die Statusleiste.
    pub fn label(&self) -> &'static str {
        match self {
            ExclusiveMode::Idle => "Selektieren",
            ExclusiveMode::Placing { kind, .. } => kind.label(),
            ExclusiveMode::DrawingPath { kind, .. } => kind.label(),
            ExclusiveMode::DraggingEndpoint { .. } => "Endpunkt ziehen",
            ExclusiveMode::DrawingTransitLine { .. } => "Transit-Linie",
        }
    }
}

impl Default for ExclusiveMode {
    fn default() -> Self {
        ExclusiveMode::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_kinds_close_by_click_line_kinds_do_not() {
        assert!(DrawKind::Neighborhood.closes_by_click());
        assert!(DrawKind::CityLimits.closes_by_click());
        assert!(!DrawKind::Road.closes_by_click());
        assert!(!DrawKind::Highway.closes_by_click());
        assert!(!DrawKind::Split.closes_by_click());
    }

    #[test]
    fn min_vertices_differ_by_kind() {
        assert_eq!(DrawKind::Neighborhood.min_vertices(), 3);
        assert_eq!(DrawKind::Road.min_vertices(), 2);
        assert_eq!(DrawKind::Split.min_vertices(), 2);
    }

    #[test]
    fn default_mode_is_idle() {
        assert!(ExclusiveMode::default().is_idle());
    }
}
