//! CityPlan Editor.
//!
//! Interaktiver 2D-Stadtplan-Editor: Seed-Platzierung, Polygon- und
//! Linien-Werkzeuge, Endpunkt-Snapping und Transit-Linien auf einer
//! pan-/zoombaren Welt-Leinwand.

use cityplan_editor::{app, ui, AppController, AppIntent, AppState, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("CityPlan Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 720.0])
                .with_title("CityPlan Editor"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "CityPlan Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let mut state = AppState::new();
        state.options = editor_options;

        Self {
            state,
            controller: AppController::new(),
            input: ui::InputState::new(),
        }
    }

    /// Leitet gesammelte Intents durch den Controller.
    fn dispatch(&mut self, intents: Vec<AppIntent>) {
        for intent in intents {
            if let Err(e) = self.controller.handle_intent(&mut self.state, intent) {
                log::error!("Intent-Verarbeitung fehlgeschlagen: {e:#}");
            }
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut intents = Vec::new();

        intents.extend(ui::render_menu(ctx, &self.state));
        intents.extend(ui::render_toolbar(ctx, &self.state));
        intents.extend(ui::render_properties_panel(ctx, &self.state));
        intents.extend(ui::show_options_dialog(ctx, &self.state));
        intents.extend(ui::handle_file_dialogs(&mut self.state.ui));
        ui::render_status_bar(ctx, &self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::from_gray(24)))
            .show(ctx, |ui_panel| {
                let size = ui_panel.available_size();
                let (response, painter) =
                    ui_panel.allocate_painter(size, egui::Sense::click_and_drag());
                let viewport_size = [size.x, size.y];

                // Szene zeichnen (read-only Projektion inkl. Gesten-Feedback)
                let scene = app::build_render_scene(&self.state, viewport_size);
                ui::draw_scene(&painter, &scene, response.rect.min);

                // Input einsammeln — der InputState überlebt Re-Renders,
                // alle veränderlichen Werte kommen frisch aus dem State
                intents.extend(self.input.collect_viewport_events(
                    ui_panel,
                    &response,
                    viewport_size,
                    &self.state.view.camera,
                    self.state.view.pan_gate.is_paused(),
                    !self.state.editor.mode.is_idle(),
                    self.state.selection.has_selection(),
                    self.state.editor.freehand_override,
                    &self.state.options,
                ));
            });

        self.dispatch(intents);

        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Optionen persistieren
        let config_path = EditorOptions::config_path();
        if let Err(e) = self.state.options.save_to_file(&config_path) {
            log::warn!("Optionen konnten nicht gespeichert werden: {e:#}");
        }
    }
}
