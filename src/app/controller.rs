//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Datei-I/O ===
            AppCommand::NewMap => handlers::file_io::new_map(state),
            AppCommand::RequestOpenFileDialog => handlers::file_io::request_open(state),
            AppCommand::RequestSaveFileDialog => handlers::file_io::request_save(state),
            AppCommand::LoadFile { path } => handlers::file_io::load(state, path)?,
            AppCommand::SaveFile { path } => handlers::file_io::save(state, path)?,
            AppCommand::RequestExit => state.should_exit = true,

            // === Kamera & Viewport ===
            AppCommand::ResetCamera => handlers::view::reset_camera(state),
            AppCommand::ZoomIn => handlers::view::zoom_in(state),
            AppCommand::ZoomOut => handlers::view::zoom_out(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera {
                factor,
                focus_world,
            } => handlers::view::zoom_towards(state, factor, focus_world),

            // === Modus-Arbitrierung ===
            AppCommand::ModePointerPressed { world_pos } => {
                handlers::modes::pointer_pressed(state, world_pos)
            }
            AppCommand::ModePointerMoved { world_pos } => {
                handlers::modes::pointer_moved(state, world_pos)
            }
            AppCommand::ModePointerReleased {
                world_pos,
                was_drag,
            } => handlers::modes::pointer_released(state, world_pos, was_drag),
            AppCommand::CancelActiveMode => handlers::modes::cancel_active(state),
            AppCommand::CompleteActiveMode => handlers::modes::complete_active(state),
            AppCommand::SetFreehandOverride { active } => {
                handlers::modes::set_freehand_override(state, active)
            }
            AppCommand::EnterPlacingMode { kind } => handlers::modes::enter_placing(state, kind),
            AppCommand::EnterDrawingMode { kind } => handlers::modes::enter_drawing(state, kind),
            AppCommand::EnterTransitMode => handlers::modes::enter_transit(state),
            AppCommand::SetPathInput { input } => handlers::modes::set_path_input(state, input),
            AppCommand::SetLineProperties { properties } => {
                handlers::modes::set_line_properties(state, properties)
            }

            // === Selektion & Editing ===
            AppCommand::ClearSelection => handlers::selection::clear(state),
            AppCommand::DeleteSelectedFeature => handlers::editing::delete_selected(state),

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Optionen ===
            AppCommand::OpenOptionsDialog => state.show_options_dialog = true,
            AppCommand::CloseOptionsDialog => state.show_options_dialog = false,
            AppCommand::ApplyOptions { options } => state.options = options,
            AppCommand::ResetOptions => state.options = Default::default(),
        }

        Ok(())
    }
}
