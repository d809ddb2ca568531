//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tastenkombinationen und mappt sie auf `AppIntent`s.
//! Escape/Enter wirken unabhängig vom Pointer-Zustand auf den aktiven
//! Modus; der gehaltene Shift-Modifier togglet Freihand-Eingabe.

use crate::app::state::DrawKind;
use crate::app::AppIntent;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    mode_active: bool,
    has_selection: bool,
    freehand_override_active: bool,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    // Undo / Redo (Cmd/Ctrl + Z / Y, Shift+Cmd+Z)
    let (modifiers, key_z_pressed, key_y_pressed) = ui.input(|i| {
        (
            i.modifiers,
            i.key_pressed(egui::Key::Z),
            i.key_pressed(egui::Key::Y),
        )
    });

    if modifiers.command && key_z_pressed && !modifiers.shift {
        events.push(AppIntent::UndoRequested);
    }

    if modifiers.command && (key_y_pressed || (modifiers.shift && key_z_pressed)) {
        events.push(AppIntent::RedoRequested);
    }

    // Ctrl+N (Neu), Ctrl+O (Öffnen), Ctrl+S (Speichern)
    let (key_n_pressed, key_o_pressed, key_s_pressed, key_escape_pressed, key_enter_pressed) = ui
        .input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::O),
                i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::Escape),
                i.key_pressed(egui::Key::Enter),
            )
        });

    if modifiers.command && key_n_pressed {
        events.push(AppIntent::NewFileRequested);
    }

    if modifiers.command && key_o_pressed {
        events.push(AppIntent::OpenFileRequested);
    }

    if modifiers.command && key_s_pressed && !modifiers.shift {
        events.push(AppIntent::SaveRequested);
    }

    // Escape-Kaskade: aktiven Modus abbrechen, sonst Selektion aufheben
    if key_escape_pressed {
        if mode_active {
            events.push(AppIntent::CancelRequested);
        } else if has_selection {
            events.push(AppIntent::ClearSelectionRequested);
        }
    }

    // Enter: aktiven Modus abschließen (Vorbedingung prüft der Arbitrator)
    if key_enter_pressed && mode_active {
        events.push(AppIntent::CompleteRequested);
    }

    // Gehaltener Shift-Modifier togglet Freihand für die Dauer des Haltens,
    // ohne die persistierte Eingabeart zu ändern.
    if modifiers.shift != freehand_override_active {
        events.push(AppIntent::FreehandOverrideChanged {
            active: modifiers.shift,
        });
    }

    // Delete / Backspace: selektiertes Feature löschen
    let key_del_pressed = ui.input(|i| {
        i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace)
    });
    if key_del_pressed && has_selection {
        events.push(AppIntent::DeleteSelectedRequested);
    }

    // Tool-Wechsel (Ablehnung bei aktivem Modus übernimmt das Intent-Mapping)
    let (key_1, key_2, key_3, key_4, key_5) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Num1),
            i.key_pressed(egui::Key::Num2),
            i.key_pressed(egui::Key::Num3),
            i.key_pressed(egui::Key::Num4),
            i.key_pressed(egui::Key::Num5),
        )
    });

    if key_1 && !modifiers.command {
        events.push(AppIntent::SelectToolRequested);
    }
    if key_2 && !modifiers.command {
        events.push(AppIntent::DrawToolRequested {
            kind: DrawKind::Neighborhood,
        });
    }
    if key_3 && !modifiers.command {
        events.push(AppIntent::DrawToolRequested {
            kind: DrawKind::Road,
        });
    }
    if key_4 && !modifiers.command {
        events.push(AppIntent::DrawToolRequested {
            kind: DrawKind::Highway,
        });
    }
    if key_5 && !modifiers.command {
        events.push(AppIntent::TransitToolRequested);
    }

    events
}

#[cfg(test)]
mod tests;
