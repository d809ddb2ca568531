use glam::Vec2;

use super::map_intent_to_commands;
use crate::app::state::{DrawKind, ExclusiveMode};
use crate::app::{AppCommand, AppIntent, AppState};
use crate::core::SeedKind;

#[test]
fn pointer_intents_map_one_to_one() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerReleased {
            world_pos: Vec2::new(1.0, 2.0),
            was_drag: true,
        },
    );

    assert_eq!(commands.len(), 1);
    match &commands[0] {
        AppCommand::ModePointerReleased { was_drag, .. } => assert!(*was_drag),
        other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn tool_entry_from_idle_is_mapped() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SeedToolRequested {
            kind: SeedKind::Park,
        },
    );

    assert!(matches!(
        commands.as_slice(),
        [AppCommand::EnterPlacingMode {
            kind: SeedKind::Park
        }]
    ));
}

#[test]
fn tool_entry_is_rejected_while_mode_active() {
    let mut state = AppState::new();
    state.editor.mode = ExclusiveMode::DrawingPath {
        kind: DrawKind::Road,
        vertices: vec![Vec2::ZERO],
        input: Default::default(),
        freehand_active: false,
        preview: None,
    };

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SeedToolRequested {
            kind: SeedKind::Park,
        },
    );

    // Ablehnung am Aufrufort: keine Commands, laufender Modus unangetastet
    assert!(commands.is_empty());
    assert!(matches!(
        state.editor.mode,
        ExclusiveMode::DrawingPath { ref vertices, .. } if vertices.len() == 1
    ));
}

#[test]
fn select_tool_maps_to_cancel() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SelectToolRequested);
    assert!(matches!(
        commands.as_slice(),
        [AppCommand::CancelActiveMode]
    ));
}

#[test]
fn transit_tool_respects_exclusivity() {
    let mut state = AppState::new();
    state.editor.mode = ExclusiveMode::Placing {
        kind: SeedKind::Lake,
        preview: Vec2::ZERO,
        drag_origin: None,
        drag_size: None,
    };

    assert!(map_intent_to_commands(&state, AppIntent::TransitToolRequested).is_empty());
}
