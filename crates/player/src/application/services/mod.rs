//! Application services wrapping the backend API.

mod editor_service;

pub use editor_service::EditorService;
