//! Editor view-model.

mod view_model;

pub use view_model::{EditorState, EditorTab, EditorViewModel};
