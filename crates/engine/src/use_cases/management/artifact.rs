//! Artifact collection operations.

use std::collections::HashSet;
use std::sync::Arc;

use serde_json::Value;
use zbierka_domain::{normalize_artifacts, Artifact, PossibilityId};

use crate::infrastructure::ports::{
    ArtifactRepo, CollectionVersion, ExpectedVersions, PossibilityRepo, Versioned,
};

use super::{duplicate_ids, ManagementError};

pub struct ArtifactCrud {
    artifacts: Arc<dyn ArtifactRepo>,
    possibilities: Arc<dyn PossibilityRepo>,
}

impl ArtifactCrud {
    pub fn new(artifacts: Arc<dyn ArtifactRepo>, possibilities: Arc<dyn PossibilityRepo>) -> Self {
        Self {
            artifacts,
            possibilities,
        }
    }

    pub async fn list(&self) -> Result<Versioned<Artifact>, ManagementError> {
        Ok(self.artifacts.list().await?)
    }

    /// Replace the whole artifact collection with `records`.
    ///
    /// Duplicate ids and references to unknown possibilities are logged and
    /// stored as given.
    pub async fn replace_all(
        &self,
        records: Vec<Value>,
        expected: Option<ExpectedVersions>,
    ) -> Result<CollectionVersion, ManagementError> {
        let artifacts = normalize_artifacts(records)?;

        for id in duplicate_ids(artifacts.iter().map(|a| &a.id)) {
            tracing::warn!(artifact_id = %id, "Artifact id is used more than once");
        }
        self.warn_dangling_refs(&artifacts).await;

        Ok(self.artifacts.replace_all(artifacts, expected).await?)
    }

    async fn warn_dangling_refs(&self, artifacts: &[Artifact]) {
        if artifacts.iter().all(|a| a.possibilities.is_empty()) {
            return;
        }

        let known = match self.possibilities.list().await {
            Ok(known) => known.records,
            Err(e) => {
                tracing::warn!(error = %e, "Could not load possibilities to check artifact references");
                return;
            }
        };
        let known: HashSet<&PossibilityId> = known.iter().map(|p| &p.id).collect();

        for artifact in artifacts {
            for possibility in artifact.referenced_possibilities() {
                if !known.contains(possibility) {
                    tracing::warn!(
                        artifact_id = %artifact.id,
                        possibility_id = %possibility,
                        "Artifact references an unknown possibility"
                    );
                }
            }
        }
    }
}
