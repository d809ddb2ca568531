//! Mapping von UI-Intents auf mutierende App-Commands.
//!
//! Hier sitzt auch die Werkzeug-Arbitrierung: ein exklusiver Modus darf nur
//! betreten werden, wenn kein anderer aktiv ist. Abgelehnte Versuche
//! erzeugen keine Commands — der Arbitrator selbst prüft das nicht erneut.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::NewFileRequested => vec![AppCommand::NewMap],
        AppIntent::OpenFileRequested => vec![AppCommand::RequestOpenFileDialog],
        AppIntent::SaveRequested => vec![AppCommand::SaveFile { path: None }],
        AppIntent::SaveAsRequested => vec![AppCommand::RequestSaveFileDialog],
        AppIntent::FileSelected { path } => vec![AppCommand::LoadFile { path }],
        AppIntent::SaveFilePathSelected { path } => vec![AppCommand::SaveFile { path: Some(path) }],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],

        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],

        AppIntent::PointerPressed { world_pos } => {
            vec![AppCommand::ModePointerPressed { world_pos }]
        }
        AppIntent::PointerMoved { world_pos } => {
            vec![AppCommand::ModePointerMoved { world_pos }]
        }
        AppIntent::PointerReleased {
            world_pos,
            was_drag,
        } => vec![AppCommand::ModePointerReleased {
            world_pos,
            was_drag,
        }],

        AppIntent::CancelRequested => vec![AppCommand::CancelActiveMode],
        AppIntent::CompleteRequested => vec![AppCommand::CompleteActiveMode],
        AppIntent::FreehandOverrideChanged { active } => {
            vec![AppCommand::SetFreehandOverride { active }]
        }

        // ── Werkzeug-Auswahl: nur aus Idle heraus ───────────────────
        AppIntent::SeedToolRequested { kind } => {
            if state.editor.mode.is_idle() {
                vec![AppCommand::EnterPlacingMode { kind }]
            } else {
                reject_tool_entry(state, "Seed-Werkzeug")
            }
        }
        AppIntent::DrawToolRequested { kind } => {
            if state.editor.mode.is_idle() {
                vec![AppCommand::EnterDrawingMode { kind }]
            } else {
                reject_tool_entry(state, "Zeichen-Werkzeug")
            }
        }
        AppIntent::TransitToolRequested => {
            if state.editor.mode.is_idle() {
                vec![AppCommand::EnterTransitMode]
            } else {
                reject_tool_entry(state, "Transit-Werkzeug")
            }
        }
        AppIntent::SelectToolRequested => vec![AppCommand::CancelActiveMode],
        AppIntent::PathInputChanged { input } => vec![AppCommand::SetPathInput { input }],
        AppIntent::LinePropertiesChanged { properties } => {
            vec![AppCommand::SetLineProperties { properties }]
        }

        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        AppIntent::DeleteSelectedRequested => vec![AppCommand::DeleteSelectedFeature],

        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],

        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}

/// Lehnt einen Werkzeug-Wechsel ab, solange ein exklusiver Modus aktiv ist.
/// Der laufende Modus bleibt unangetastet.
fn reject_tool_entry(state: &AppState, tool: &str) -> Vec<AppCommand> {
    log::warn!(
        "{} abgelehnt: Modus '{}' ist aktiv",
        tool,
        state.editor.mode.label()
    );
    Vec::new()
}

#[cfg(test)]
mod tests;
