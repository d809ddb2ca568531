//! View-State: Kamera, Viewport-Größe, Pan-Gate und Hover-Feedback.

use glam::Vec2;

use crate::core::{Camera2D, PanGate, RoadEnd};

/// Zustand von Kamera und Viewport.
pub struct ViewState {
    /// 2D-Kamera (Pan + Zoom)
    pub camera: Camera2D,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Gate für Drag-to-Pan; pausiert solange ein exklusiver Modus aktiv ist
    pub pan_gate: PanGate,
    /// Letzte bekannte Cursor-Position in Weltkoordinaten (Statusleiste)
    pub cursor_world: Option<Vec2>,
    /// Straßen-Endpunkt unter dem Cursor (Hover-Hervorhebung, nur informativ)
    pub hovered_endpoint: Option<(u64, RoadEnd)>,
}

impl ViewState {
    /// Erstellt den Standard-View-State.
    pub fn new() -> Self {
        Self {
            camera: Camera2D::new(),
            viewport_size: [1280.0, 720.0],
            pan_gate: PanGate::new(),
            cursor_world: None,
            hovered_endpoint: None,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
