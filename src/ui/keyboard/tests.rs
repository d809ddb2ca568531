use super::*;

fn collect_with_key_event(event: egui::Event, mode_active: bool) -> Vec<AppIntent> {
    collect_with_key_event_full(event, mode_active, false)
}

fn collect_with_key_event_full(
    event: egui::Event,
    mode_active: bool,
    has_selection: bool,
) -> Vec<AppIntent> {
    let ctx = egui::Context::default();
    let mut raw_input = egui::RawInput::default();
    // Modifier-Zustand des Frames aus dem Key-Event übernehmen
    if let egui::Event::Key { modifiers, .. } = &event {
        raw_input.modifiers = *modifiers;
    }
    raw_input.events.push(event);

    let mut events = Vec::new();
    let _ = ctx.run(raw_input, |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            events = collect_keyboard_intents(ui, mode_active, has_selection, false);
        });
    });

    events
}

fn key_event(key: egui::Key, modifiers: egui::Modifiers) -> egui::Event {
    egui::Event::Key {
        key,
        physical_key: None,
        pressed: true,
        repeat: false,
        modifiers,
    }
}

#[test]
fn test_escape_cancels_active_mode() {
    let events = collect_with_key_event(
        key_event(egui::Key::Escape, egui::Modifiers::default()),
        true,
    );

    assert!(events
        .iter()
        .any(|e| matches!(e, AppIntent::CancelRequested)));
}

#[test]
fn test_escape_clears_selection_when_idle() {
    let events = collect_with_key_event_full(
        key_event(egui::Key::Escape, egui::Modifiers::default()),
        false,
        true,
    );

    assert!(events
        .iter()
        .any(|e| matches!(e, AppIntent::ClearSelectionRequested)));
    assert!(!events
        .iter()
        .any(|e| matches!(e, AppIntent::CancelRequested)));
}

#[test]
fn test_enter_completes_only_with_active_mode() {
    let with_mode = collect_with_key_event(
        key_event(egui::Key::Enter, egui::Modifiers::default()),
        true,
    );
    assert!(with_mode
        .iter()
        .any(|e| matches!(e, AppIntent::CompleteRequested)));

    let without_mode = collect_with_key_event(
        key_event(egui::Key::Enter, egui::Modifiers::default()),
        false,
    );
    assert!(!without_mode
        .iter()
        .any(|e| matches!(e, AppIntent::CompleteRequested)));
}

#[test]
fn test_ctrl_z_emits_undo() {
    let events = collect_with_key_event(
        key_event(egui::Key::Z, egui::Modifiers::COMMAND),
        false,
    );

    assert!(events.iter().any(|e| matches!(e, AppIntent::UndoRequested)));
}

#[test]
fn test_num2_requests_neighborhood_draw_tool() {
    let events = collect_with_key_event(
        key_event(egui::Key::Num2, egui::Modifiers::default()),
        false,
    );

    assert!(events.iter().any(|e| matches!(
        e,
        AppIntent::DrawToolRequested {
            kind: DrawKind::Neighborhood
        }
    )));
}

#[test]
fn test_num5_requests_transit_tool() {
    let events = collect_with_key_event(
        key_event(egui::Key::Num5, egui::Modifiers::default()),
        false,
    );

    assert!(events
        .iter()
        .any(|e| matches!(e, AppIntent::TransitToolRequested)));
}

#[test]
fn test_delete_requires_selection() {
    let with_selection = collect_with_key_event_full(
        key_event(egui::Key::Delete, egui::Modifiers::default()),
        false,
        true,
    );
    assert!(with_selection
        .iter()
        .any(|e| matches!(e, AppIntent::DeleteSelectedRequested)));

    let without_selection = collect_with_key_event(
        key_event(egui::Key::Delete, egui::Modifiers::default()),
        false,
    );
    assert!(!without_selection
        .iter()
        .any(|e| matches!(e, AppIntent::DeleteSelectedRequested)));
}

#[test]
fn test_shift_toggles_freehand_override() {
    // Shift gedrückt, Override noch inaktiv → aktivieren
    let events = collect_with_key_event(
        key_event(egui::Key::A, egui::Modifiers::SHIFT),
        true,
    );
    assert!(events
        .iter()
        .any(|e| matches!(e, AppIntent::FreehandOverrideChanged { active: true })));
}
