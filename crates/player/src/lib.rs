//! Zbierka Player crate.
//!
//! Contains the editor view-model and its backend client, plus the game shell
//! that will eventually present the collected artifacts.

pub mod application;
pub mod game;
pub mod infrastructure;
pub mod ports;

pub use application::editor::{EditorState, EditorTab, EditorViewModel};
pub use application::services::EditorService;
pub use game::{Game, GameState, GameStateDefinition, Ui, UiError, World};
