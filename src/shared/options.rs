//! Zentrale Konfiguration für den CityPlan Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Kamera ──────────────────────────────────────────────────────────

/// Minimaler Zoom-Faktor.
pub const CAMERA_ZOOM_MIN: f32 = 0.1;
/// Maximaler Zoom-Faktor.
pub const CAMERA_ZOOM_MAX: f32 = 100.0;
/// Zoom-Schritt bei stufenweisem Zoom (Menü-Buttons / Shortcuts).
pub const CAMERA_ZOOM_STEP: f32 = 1.2;
/// Zoom-Schritt bei Mausrad-Scroll.
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.1;

// ── Gesten ──────────────────────────────────────────────────────────

/// Drag-Schwelle in Screen-Pixeln: ab dieser Bewegung gilt eine Geste
/// als Drag und nicht mehr als Klick (monoton pro Geste).
pub const DRAG_THRESHOLD_PX: f32 = 5.0;
/// Pick-Radius in Screen-Pixeln für Hit-Tests.
pub const SELECTION_PICK_RADIUS_PX: f32 = 12.0;
/// Mindestabstand zwischen Freihand-Punkten in Welteinheiten.
pub const FREEHAND_MIN_SPACING: f32 = 2.0;

// ── Snap & Hover ───────────────────────────────────────────────────

/// Snap-Schwellwert in Welteinheiten für Endpunkt-Drags.
pub const SNAP_THRESHOLD_WORLD: f32 = 20.0;
/// Hover-Radius in Welteinheiten für Stations-Erkennung (Transit-Modus).
pub const STATION_HOVER_RADIUS_WORLD: f32 = 30.0;
/// Schließ-Radius in Welteinheiten: Klick nahe dem ersten Vertex
/// schließt ein Flächen-Polygon.
pub const POLYGON_CLOSE_RADIUS_WORLD: f32 = 5.0;

// ── Seeds ───────────────────────────────────────────────────────────

/// Minimale Seed-Größe (Radius in Welteinheiten); kleinere Sizing-Drags
/// werden verworfen.
pub const SEED_SIZE_MIN: f32 = 30.0;
/// Maximale Seed-Größe (Radius in Welteinheiten).
pub const SEED_SIZE_MAX: f32 = 300.0;
/// Standard-Größe bei Klick-Platzierung ohne Sizing.
pub const SEED_SIZE_DEFAULT: f32 = 60.0;

// ── Rendering-Farben ───────────────────────────────────────────────

/// Farbe normaler Straßen (RGBA).
pub const ROAD_COLOR_STREET: [f32; 4] = [0.75, 0.75, 0.78, 1.0];
/// Farbe für Highways (RGBA).
pub const ROAD_COLOR_HIGHWAY: [f32; 4] = [0.95, 0.75, 0.2, 1.0];
/// Füllfarbe für Wohnviertel (RGBA).
pub const DISTRICT_COLOR_NEIGHBORHOOD: [f32; 4] = [0.3, 0.6, 0.35, 0.35];
/// Füllfarbe für Stadtgrenzen (RGBA).
pub const DISTRICT_COLOR_CITY_LIMITS: [f32; 4] = [0.5, 0.5, 0.9, 0.2];
/// Farbe für Stationen (RGBA).
pub const STATION_COLOR: [f32; 4] = [0.2, 0.4, 0.9, 1.0];
/// Farbe für Seeds (RGBA).
pub const SEED_COLOR: [f32; 4] = [0.3, 0.8, 0.4, 0.6];
/// Farbe für selektierte Features (RGBA).
pub const SELECTION_COLOR: [f32; 4] = [1.0, 0.0, 1.0, 1.0];
/// Farbe für Gesten-Vorschau (Gummiband, Sizing-Kreis) (RGBA).
pub const PREVIEW_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.7];
/// Farbe für Snap-Marker (RGBA).
pub const SNAP_MARKER_COLOR: [f32; 4] = [1.0, 0.4, 0.1, 1.0];

/// Linienstärke normaler Straßen in Welteinheiten.
pub const ROAD_THICKNESS_WORLD: f32 = 6.0;
/// Linienstärke von Highways in Welteinheiten.
pub const HIGHWAY_THICKNESS_WORLD: f32 = 10.0;
/// Stations-Radius in Welteinheiten.
pub const STATION_SIZE_WORLD: f32 = 12.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `cityplan_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorOptions {
    // ── Gesten ──────────────────────────────────────────────────
    /// Drag-Schwelle in Screen-Pixeln (Klick vs. Drag)
    pub drag_threshold_px: f32,
    /// Pick-Radius für Hit-Tests in Screen-Pixeln
    pub selection_pick_radius_px: f32,
    /// Mindestabstand zwischen Freihand-Punkten (Welteinheiten)
    pub freehand_min_spacing: f32,

    // ── Snap & Hover ────────────────────────────────────────────
    /// Snap-Schwellwert für Endpunkt-Drags (Welteinheiten)
    pub snap_threshold_world: f32,
    /// Stations-Hover-Radius im Transit-Modus (Welteinheiten)
    pub station_hover_radius_world: f32,
    /// Schließ-Radius für Flächen-Polygone (Welteinheiten)
    pub polygon_close_radius_world: f32,

    // ── Seeds ───────────────────────────────────────────────────
    /// Minimale Seed-Größe (Welteinheiten)
    pub seed_size_min: f32,
    /// Maximale Seed-Größe (Welteinheiten)
    pub seed_size_max: f32,
    /// Standard-Größe bei Klick-Platzierung
    pub seed_size_default: f32,

    // ── Kamera ──────────────────────────────────────────────────
    /// Minimaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_min: f32,
    /// Maximaler Zoom-Faktor (konfigurierbar)
    pub camera_zoom_max: f32,
    /// Zoom-Schritt bei Menü-Buttons / Shortcuts
    pub camera_zoom_step: f32,
    /// Zoom-Schritt bei Mausrad-Scroll
    pub camera_scroll_zoom_step: f32,

    // ── Rendering ───────────────────────────────────────────────
    /// Farbe normaler Straßen
    pub road_color_street: [f32; 4],
    /// Farbe für Highways
    pub road_color_highway: [f32; 4],
    /// Füllfarbe für Wohnviertel
    pub district_color_neighborhood: [f32; 4],
    /// Füllfarbe für Stadtgrenzen
    pub district_color_city_limits: [f32; 4],
    /// Farbe für Stationen
    pub station_color: [f32; 4],
    /// Farbe für Seeds
    pub seed_color: [f32; 4],
    /// Farbe für selektierte Features
    pub selection_color: [f32; 4],
    /// Farbe für Gesten-Vorschau
    pub preview_color: [f32; 4],
    /// Farbe für Snap-Marker
    pub snap_marker_color: [f32; 4],
    /// Linienstärke normaler Straßen (Welteinheiten)
    pub road_thickness_world: f32,
    /// Linienstärke von Highways (Welteinheiten)
    pub highway_thickness_world: f32,
    /// Stations-Radius (Welteinheiten)
    pub station_size_world: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            drag_threshold_px: DRAG_THRESHOLD_PX,
            selection_pick_radius_px: SELECTION_PICK_RADIUS_PX,
            freehand_min_spacing: FREEHAND_MIN_SPACING,

            snap_threshold_world: SNAP_THRESHOLD_WORLD,
            station_hover_radius_world: STATION_HOVER_RADIUS_WORLD,
            polygon_close_radius_world: POLYGON_CLOSE_RADIUS_WORLD,

            seed_size_min: SEED_SIZE_MIN,
            seed_size_max: SEED_SIZE_MAX,
            seed_size_default: SEED_SIZE_DEFAULT,

            camera_zoom_min: CAMERA_ZOOM_MIN,
            camera_zoom_max: CAMERA_ZOOM_MAX,
            camera_zoom_step: CAMERA_ZOOM_STEP,
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,

            road_color_street: ROAD_COLOR_STREET,
            road_color_highway: ROAD_COLOR_HIGHWAY,
            district_color_neighborhood: DISTRICT_COLOR_NEIGHBORHOOD,
            district_color_city_limits: DISTRICT_COLOR_CITY_LIMITS,
            station_color: STATION_COLOR,
            seed_color: SEED_COLOR,
            selection_color: SELECTION_COLOR,
            preview_color: PREVIEW_COLOR,
            snap_marker_color: SNAP_MARKER_COLOR,
            road_thickness_world: ROAD_THICKNESS_WORLD,
            highway_thickness_world: HIGHWAY_THICKNESS_WORLD,
            station_size_world: STATION_SIZE_WORLD,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("cityplan_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("cityplan_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let opts = EditorOptions::default();
        assert_eq!(opts.drag_threshold_px, DRAG_THRESHOLD_PX);
        assert_eq!(opts.snap_threshold_world, SNAP_THRESHOLD_WORLD);
        assert_eq!(opts.seed_size_min, SEED_SIZE_MIN);
        assert_eq!(opts.seed_size_max, SEED_SIZE_MAX);
    }

    #[test]
    fn toml_roundtrip_preserves_options() {
        let mut opts = EditorOptions::default();
        opts.snap_threshold_world = 42.0;
        opts.seed_size_default = 77.0;

        let content = toml::to_string_pretty(&opts).expect("Serialisierung");
        let back: EditorOptions = toml::from_str(&content).expect("Deserialisierung");

        assert_eq!(back, opts);
    }
}
