use crate::app::state::{DrawKind, PathInput};
use crate::core::{LineProperties, SeedKind};
use crate::shared::EditorOptions;

/// App-Intents: Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Pointer-Intents tragen bereits Weltkoordinaten — die Koordinaten-
/// Transformation passiert genau einmal in der Input-Schicht, bevor
/// irgendeine Modus-Logik läuft.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Neues, leeres Dokument anlegen
    NewFileRequested,
    /// Datei öffnen (zeigt Dateidialog)
    OpenFileRequested,
    /// Datei speichern (unter aktuellem Pfad oder mit Dialog)
    SaveRequested,
    /// Datei unter neuem Pfad speichern
    SaveAsRequested,
    /// Datei wurde im Dialog ausgewählt (Laden)
    FileSelected { path: String },
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveFilePathSelected { path: String },
    /// Anwendung beenden
    ExitRequested,

    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Stufenweise hineinzoomen
    ZoomInRequested,
    /// Stufenweise herauszoomen
    ZoomOutRequested,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Kamera um Delta verschieben (Welt-Einheiten)
    CameraPan { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf einen Fokuspunkt)
    CameraZoom {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    /// Primärtaste gedrückt (Weltposition)
    PointerPressed { world_pos: glam::Vec2 },
    /// Cursor bewegt (Weltposition; Hover und aktive Gesten)
    PointerMoved { world_pos: glam::Vec2 },
    /// Primärtaste losgelassen.
    /// `was_drag` ist das Ergebnis der Drag-Disambiguierung (5-px-Schwelle):
    /// `true` unterdrückt Klick-Semantik beim Fallback.
    PointerReleased {
        world_pos: glam::Vec2,
        was_drag: bool,
    },

    /// Escape: aktiven Modus bzw. Endpunkt-Drag abbrechen
    CancelRequested,
    /// Enter: aktiven Modus abschließen (wenn Vorbedingung erfüllt)
    CompleteRequested,
    /// Freihand-Modifier gedrückt/losgelassen (gehaltener Override)
    FreehandOverrideChanged { active: bool },

    /// Seed-Werkzeug aktivieren (Platzierungsmodus)
    SeedToolRequested { kind: SeedKind },
    /// Zeichen-Werkzeug aktivieren (Polygon/Linie)
    DrawToolRequested { kind: DrawKind },
    /// Transit-Linien-Werkzeug aktivieren
    TransitToolRequested,
    /// Zurück zum Selektions-Werkzeug (bricht aktiven Modus ab)
    SelectToolRequested,
    /// Persistierte Eingabeart für Pfad-Werkzeuge ändern
    PathInputChanged { input: PathInput },
    /// Eigenschaften der entstehenden Transit-Linie ändern
    LinePropertiesChanged { properties: LineProperties },

    /// Selektion aufheben
    ClearSelectionRequested,
    /// Selektiertes Feature löschen
    DeleteSelectedRequested,

    /// Undo: Letzte Aktion rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Aktion wiederherstellen
    RedoRequested,

    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}
