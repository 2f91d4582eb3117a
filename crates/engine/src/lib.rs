//! Zbierka Engine library.
//!
//! Editor backend: serves the artifact and possibility collections over HTTP
//! and persists each one as a JSON file.
//!
//! ## Structure
//!
//! - `use_cases/` - collection read/replace with validation
//! - `infrastructure/` - configuration, port traits, JSON file store
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
