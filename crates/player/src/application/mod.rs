//! Application layer - services and view-models.

pub mod editor;
pub mod error;
pub mod services;

pub use error::ServiceError;
