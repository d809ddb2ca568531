//! Render-Szene als expliziter Übergabevertrag zwischen App und Painter.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui::painter` sie konsumiert.
//! Die Gesten-Projektion ist eine read-only Sicht auf den aktiven Modus —
//! der Painter mutiert nie.

use std::sync::Arc;

use glam::Vec2;

use super::options::EditorOptions;
use crate::core::{Camera2D, CityMap, FeatureRef, RoadEnd, SeedKind};

/// Read-only Gesten-Feedback für einen Render-Frame.
#[derive(Debug, Clone, Default)]
pub enum GestureFeedback {
    /// Kein aktiver Modus
    #[default]
    None,
    /// Seed-Platzierung: Vorschau-Kreis (beim Sizing am Drag-Ursprung)
    PlacementPreview {
        /// Seed-Art
        kind: SeedKind,
        /// Kreis-Zentrum in Weltkoordinaten
        center: Vec2,
        /// Radius in Welteinheiten
        radius: f32,
        /// Läuft gerade ein Sizing-Drag?
        sizing: bool,
    },
    /// Pfad-Zeichnen: Vertices + Gummiband zur Vorschau
    PathPreview {
        /// Bisher gesammelte Vertices
        vertices: Vec<Vec2>,
        /// Gummiband-Endpunkt (Klick-Modus)
        preview: Option<Vec2>,
        /// Flächen-Art (geschlossen zeichnen)
        is_area: bool,
    },
    /// Endpunkt-Drag: aktuelle Position + Snap-Marker
    EndpointDrag {
        /// Aktuelle Drag-Position
        position: Vec2,
        /// Snap aktiv (Marker zeichnen)
        snapped: bool,
    },
    /// Transit-Linie: verkettete Stationen + Vorschau + Hover
    TransitPreview {
        /// Positionen der verketteten Stationen
        stations: Vec<Vec2>,
        /// Vorschau-Position unter dem Cursor
        preview: Option<Vec2>,
        /// Position der gehoverten Station
        hovered: Option<Vec2>,
        /// Linienfarbe
        color: [f32; 4],
    },
}

/// Read-only Daten für einen Render-Frame.
#[derive(Clone)]
pub struct RenderScene {
    /// Der aktuelle Stadtplan (Arc für O(1)-Clone pro Frame)
    pub city_map: Option<Arc<CityMap>>,
    /// Kamera-Zustand für diesen Frame
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Aktuell selektiertes Feature
    pub selected: Option<FeatureRef>,
    /// Endpunkt unter dem Cursor (Hover-Hervorhebung)
    pub hovered_endpoint: Option<(u64, RoadEnd)>,
    /// Gesten-Feedback des aktiven Modus
    pub gesture: GestureFeedback,
    /// Laufzeit-Optionen für Farben, Größen, Breiten
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob eine Karte für Rendering vorhanden ist.
    pub fn has_map(&self) -> bool {
        self.city_map.is_some()
    }
}
