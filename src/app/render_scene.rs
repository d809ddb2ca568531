//! Builder für Render-Szenen aus dem AppState.

use crate::app::state::ExclusiveMode;
use crate::app::AppState;
use crate::shared::{GestureFeedback, RenderScene};

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Die Gesten-Projektion ist die einzige Sicht des Painters auf den
/// aktiven Modus (Gummiband, Snap-Marker, Sizing-Vorschau).
pub fn build(state: &AppState, viewport_size: [f32; 2]) -> RenderScene {
    RenderScene {
        city_map: state.city_map.clone(),
        camera: state.view.camera.clone(),
        viewport_size,
        selected: state.selection.selected,
        hovered_endpoint: state.view.hovered_endpoint,
        gesture: build_gesture_feedback(state),
        options: state.options.clone(),
    }
}

/// Projiziert den aktiven Modus auf das Gesten-Feedback.
fn build_gesture_feedback(state: &AppState) -> GestureFeedback {
    match &state.editor.mode {
        ExclusiveMode::Idle => GestureFeedback::None,

        ExclusiveMode::Placing {
            kind,
            preview,
            drag_origin,
            drag_size,
        } => {
            // Während des Sizings zeigt die Vorschau am Drag-Ursprung;
            // der Radius ist auf die Platzierungs-Grenzen geklemmt.
            let sizing = drag_origin.is_some();
            let center = drag_origin.unwrap_or(*preview);
            let radius = drag_size
                .unwrap_or(state.options.seed_size_default)
                .clamp(state.options.seed_size_min, state.options.seed_size_max);
            GestureFeedback::PlacementPreview {
                kind: *kind,
                center,
                radius,
                sizing,
            }
        }

        ExclusiveMode::DrawingPath {
            kind,
            vertices,
            preview,
            ..
        } => GestureFeedback::PathPreview {
            vertices: vertices.clone(),
            preview: *preview,
            is_area: kind.is_area(),
        },

        ExclusiveMode::DraggingEndpoint {
            position, snapped, ..
        } => GestureFeedback::EndpointDrag {
            position: *position,
            snapped: *snapped,
        },

        ExclusiveMode::DrawingTransitLine {
            stations,
            properties,
            hovered_station,
            preview,
            ..
        } => {
            let positions = |id: &u64| {
                state
                    .city_map
                    .as_deref()
                    .and_then(|map| map.stations.get(id))
                    .map(|s| s.position)
            };
            GestureFeedback::TransitPreview {
                stations: stations.iter().filter_map(|id| positions(id)).collect(),
                preview: *preview,
                hovered: hovered_station.as_ref().and_then(positions),
                color: properties.color,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::state::ExclusiveMode;
    use crate::app::AppState;
    use crate::shared::GestureFeedback;
    use glam::Vec2;

    #[test]
    fn idle_mode_has_no_gesture_feedback() {
        let state = AppState::new();
        let scene = build(&state, [800.0, 600.0]);
        assert!(matches!(scene.gesture, GestureFeedback::None));
        assert!(scene.has_map());
    }

    #[test]
    fn drawing_mode_projects_vertices_and_preview() {
        let mut state = AppState::new();
        state.editor.mode = ExclusiveMode::DrawingPath {
            kind: crate::app::state::DrawKind::Neighborhood,
            vertices: vec![Vec2::ZERO, Vec2::new(10.0, 0.0)],
            input: Default::default(),
            freehand_active: false,
            preview: Some(Vec2::new(10.0, 10.0)),
        };

        let scene = build(&state, [800.0, 600.0]);
        match scene.gesture {
            GestureFeedback::PathPreview {
                vertices,
                preview,
                is_area,
            } => {
                assert_eq!(vertices.len(), 2);
                assert_eq!(preview, Some(Vec2::new(10.0, 10.0)));
                assert!(is_area);
            }
            other => panic!("Unerwartetes Feedback: {other:?}"),
        }
    }
}
