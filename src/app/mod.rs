//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Dokument, View, Modus).
pub mod state;
pub mod use_cases;

pub use crate::core::Camera2D;
pub use crate::core::{CityMap, FeatureRef, LineProperties, SeedKind};
pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use render_scene::build as build_render_scene;
pub use state::{
    AppState, DrawKind, EditorToolState, ExclusiveMode, PathInput, SelectionState, UiState,
    ViewState,
};
