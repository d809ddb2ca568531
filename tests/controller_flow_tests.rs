//! Integrationstests für Controller-Flows: Datei-I/O, Dokument-Lifecycle,
//! Command-Log und Kamera-Commands.

use std::sync::Arc;

use glam::Vec2;

use cityplan_editor::{
    AppCommand, AppController, AppIntent, AppState, CityMap, RoadClass, StationKind,
};

fn make_state_with_content() -> AppState {
    let mut map = CityMap::new();
    map.add_road(
        RoadClass::Street,
        vec![Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0)],
    );
    map.add_station(StationKind::Rail, Vec2::new(50.0, 200.0));

    let mut state = AppState::new();
    state.city_map = Some(Arc::new(map));
    state.view.viewport_size = [1280.0, 720.0];
    state
}

#[test]
fn test_save_requested_without_path_opens_dialog() {
    let mut controller = AppController::new();
    let mut state = make_state_with_content();

    controller
        .handle_intent(&mut state, AppIntent::SaveRequested)
        .expect("SaveRequested sollte ohne Fehler durchlaufen");

    // Kein bekannter Pfad: Save-Dialog wird angefordert
    assert!(state.ui.show_save_file_dialog);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::SaveFile { path } => assert!(path.is_none()),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);

    controller
        .handle_intent(&mut state, AppIntent::ExitRequested)
        .expect("ExitRequested sollte ohne Fehler durchlaufen");

    assert!(state.should_exit);

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::RequestExit => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_save_and_load_roundtrip_via_temp_file() {
    let mut controller = AppController::new();
    let mut state = make_state_with_content();

    let path = std::env::temp_dir().join("cityplan_editor_roundtrip_test.json");
    let path_str = path.to_string_lossy().into_owned();

    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveFilePathSelected {
                path: path_str.clone(),
            },
        )
        .expect("Speichern sollte funktionieren");
    assert_eq!(state.ui.current_file_path.as_deref(), Some(path_str.as_str()));

    // In frischen State laden
    let mut loaded = AppState::new();
    controller
        .handle_intent(&mut loaded, AppIntent::FileSelected { path: path_str })
        .expect("Laden sollte funktionieren");

    let map = loaded.city_map.as_deref().expect("Dokument geladen");
    assert_eq!(map.roads.len(), 1);
    assert_eq!(map.stations.len(), 1);
    // Indizes sind nach dem Laden einsatzbereit
    assert!(map.nearest_station(Vec2::new(50.0, 200.0)).is_some());

    let _ = std::fs::remove_file(path);
}

#[test]
fn test_load_missing_file_propagates_error() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::FileSelected {
            path: String::from("/definitiv/nicht/vorhanden.json"),
        },
    );

    assert!(result.is_err());
}

#[test]
fn test_new_map_resets_document_and_mode() {
    let mut controller = AppController::new();
    let mut state = make_state_with_content();

    // Aktiven Modus und Selektion herstellen
    controller
        .handle_intent(&mut state, AppIntent::TransitToolRequested)
        .unwrap();
    assert!(!state.editor.mode.is_idle());

    controller
        .handle_intent(&mut state, AppIntent::NewFileRequested)
        .unwrap();

    assert!(state.editor.mode.is_idle());
    assert!(!state.view.pan_gate.is_paused());
    assert_eq!(state.feature_count(), 0);
    assert!(state.ui.current_file_path.is_none());
}

#[test]
fn test_camera_pan_and_zoom_commands() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraPan {
                delta: Vec2::new(100.0, -50.0),
            },
        )
        .unwrap();
    assert_eq!(state.view.camera.position, Vec2::new(100.0, -50.0));

    let before = state.view.camera.zoom;
    controller
        .handle_intent(&mut state, AppIntent::ZoomInRequested)
        .unwrap();
    assert!(state.view.camera.zoom > before);

    controller
        .handle_intent(&mut state, AppIntent::ResetCameraRequested)
        .unwrap();
    assert_eq!(state.view.camera.position, Vec2::ZERO);
    assert_eq!(state.view.camera.zoom, 1.0);
}

#[test]
fn test_zoom_towards_focus_keeps_world_point_stable() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.viewport_size = [800.0, 600.0];

    let focus = Vec2::new(200.0, 100.0);
    let viewport = Vec2::new(800.0, 600.0);
    let screen_before = state.view.camera.world_to_screen(focus, viewport);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CameraZoom {
                factor: 2.0,
                focus_world: Some(focus),
            },
        )
        .unwrap();

    let screen_after = state.view.camera.world_to_screen(focus, viewport);
    assert!((screen_before.x - screen_after.x).abs() < 0.5);
    assert!((screen_before.y - screen_after.y).abs() < 0.5);
}

#[test]
fn test_delete_selected_feature_via_intents() {
    let mut controller = AppController::new();
    let mut state = make_state_with_content();

    // Station selektieren, dann löschen
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerPressed {
                world_pos: Vec2::new(50.0, 200.0),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PointerReleased {
                world_pos: Vec2::new(50.0, 200.0),
                was_drag: false,
            },
        )
        .unwrap();
    assert!(state.selection.has_selection());

    controller
        .handle_intent(&mut state, AppIntent::DeleteSelectedRequested)
        .unwrap();

    assert!(state.city_map.as_deref().unwrap().stations.is_empty());
    assert!(!state.selection.has_selection());
}

#[test]
fn test_command_log_records_dispatched_commands() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(state.command_log.is_empty());

    controller
        .handle_intent(&mut state, AppIntent::ZoomInRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ZoomOutRequested)
        .unwrap();

    assert_eq!(state.command_log.len(), 2);
    assert!(matches!(
        state.command_log.entries()[0],
        AppCommand::ZoomIn
    ));
}
