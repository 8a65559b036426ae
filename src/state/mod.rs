// State management module
// Holds the in-memory book registry and its seed catalog

pub mod app_state;
pub mod seed;

pub use app_state::{AppState, Book};
