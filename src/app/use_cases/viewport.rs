//! Use-Case-Funktionen für den Viewport.

use crate::app::AppState;

/// Aktualisiert die Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    if size[0] > 0.0 && size[1] > 0.0 {
        state.view.viewport_size = size;
    }
}
