//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::json_store::JsonCollectionStore;
use crate::infrastructure::ports::{ArtifactRepo, PossibilityRepo};
use crate::use_cases::{ArtifactCrud, ManagementUseCases, PossibilityCrud};

/// Main application state.
///
/// Holds the use cases built on the collection ports.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub use_cases: UseCases,
}

/// Container for all use cases.
pub struct UseCases {
    pub management: ManagementUseCases,
}

impl App {
    /// Create a new App with all dependencies wired up.
    pub fn new(artifact: Arc<dyn ArtifactRepo>, possibility: Arc<dyn PossibilityRepo>) -> Self {
        let management = ManagementUseCases::new(
            ArtifactCrud::new(artifact, possibility.clone()),
            PossibilityCrud::new(possibility),
        );

        Self {
            use_cases: UseCases { management },
        }
    }

    /// Both collections backed by one JSON store.
    pub fn with_json_store(store: Arc<JsonCollectionStore>) -> Self {
        Self::new(store.clone(), store)
    }
}
