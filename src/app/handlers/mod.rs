//! Feature-Handler: dispatchte Command-Ausführung auf dem AppState.

pub mod editing;
pub mod file_io;
pub mod history;
pub mod modes;
pub mod selection;
pub mod view;
