//! CityPlan Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod json;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, DrawKind, ExclusiveMode, PathInput, UiState,
    ViewState,
};
pub use core::{
    Camera2D, CityMap, District, DistrictKind, FeatureRef, HitTestRegistry, LineProperties,
    PanGate, Road, RoadClass, RoadEnd, Seed, SeedKind, SnapGeometry, SnapHit, SnapIndex, Station,
    StationIndex, StationKind, TransitKind, TransitLine,
};
pub use json::{parse_city_map, write_city_map};
pub use shared::{EditorOptions, GestureFeedback, RenderScene};
