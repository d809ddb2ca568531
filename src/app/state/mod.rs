//! Application State: Modus, View, Selektion, Werkzeug-Defaults.

mod app_state;
mod editor;
mod mode;
mod selection;
mod view;

pub use app_state::{AppState, UiState};
pub use editor::EditorToolState;
pub use mode::{DrawKind, ExclusiveMode, PathInput, SnapTarget};
pub use selection::SelectionState;
pub use view::ViewState;
