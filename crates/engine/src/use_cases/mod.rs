//! User story orchestration over the collection ports.

pub mod management;

pub use management::{ArtifactCrud, ManagementError, ManagementUseCases, PossibilityCrud};
