use crate::app::state::{DrawKind, PathInput};
use crate::core::{LineProperties, SeedKind};
use crate::shared::EditorOptions;

/// App-Commands: ausführbare, mutierende Operationen auf dem AppState.
///
/// Entstehen ausschließlich über das Intent→Command-Mapping.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Neues, leeres Dokument anlegen
    NewMap,
    /// Open-Dialog anfordern
    RequestOpenFileDialog,
    /// Save-Dialog anfordern
    RequestSaveFileDialog,
    /// Stadtplan aus Datei laden
    LoadFile { path: String },
    /// Stadtplan speichern (`None` = aktueller Pfad oder Dialog)
    SaveFile { path: Option<String> },
    /// Anwendung beenden
    RequestExit,

    /// Kamera zurücksetzen
    ResetCamera,
    /// Stufenweise hineinzoomen
    ZoomIn,
    /// Stufenweise herauszoomen
    ZoomOut,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen (optional auf Fokuspunkt)
    ZoomCamera {
        factor: f32,
        focus_world: Option<glam::Vec2>,
    },

    /// Modus-Arbitrierung: Primärtaste gedrückt
    ModePointerPressed { world_pos: glam::Vec2 },
    /// Modus-Arbitrierung: Cursor bewegt
    ModePointerMoved { world_pos: glam::Vec2 },
    /// Modus-Arbitrierung: Primärtaste losgelassen
    ModePointerReleased {
        world_pos: glam::Vec2,
        was_drag: bool,
    },
    /// Aktiven Modus abbrechen (Escape)
    CancelActiveMode,
    /// Aktiven Modus abschließen (Enter)
    CompleteActiveMode,
    /// Gehaltenen Freihand-Override setzen/lösen
    SetFreehandOverride { active: bool },

    /// Platzierungsmodus betreten
    EnterPlacingMode { kind: SeedKind },
    /// Zeichenmodus betreten
    EnterDrawingMode { kind: DrawKind },
    /// Transit-Linien-Modus betreten
    EnterTransitMode,
    /// Persistierte Pfad-Eingabeart setzen
    SetPathInput { input: PathInput },
    /// Eigenschaften der entstehenden Transit-Linie setzen
    SetLineProperties { properties: LineProperties },

    /// Selektion aufheben
    ClearSelection,
    /// Selektiertes Feature löschen
    DeleteSelectedFeature,

    /// Letzte Aktion rückgängig machen
    Undo,
    /// Rückgängig gemachte Aktion wiederherstellen
    Redo,

    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen anwenden
    ApplyOptions { options: EditorOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
