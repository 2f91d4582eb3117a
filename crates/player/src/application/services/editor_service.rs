//! Editor Service - typed access to the two editor collections
//!
//! Every call moves a whole collection: loads fetch the full array, saves PUT
//! the full array back.

use std::sync::Arc;

use serde_json::Value;
use zbierka_domain::{
    normalize_artifacts, normalize_possibilities, Artifact, CollectionKind, Possibility,
};

use crate::application::ServiceError;
use crate::ports::outbound::RawApiPort;

pub struct EditorService {
    api: Arc<dyn RawApiPort>,
}

impl EditorService {
    pub fn new(api: Arc<dyn RawApiPort>) -> Self {
        Self { api }
    }

    /// Load all artifacts. Records without an id get `artifact-<index>`.
    pub async fn load_artifacts(&self) -> Result<Vec<Artifact>, ServiceError> {
        let records = self.fetch(CollectionKind::Artifacts).await?;
        Ok(normalize_artifacts(records)?)
    }

    pub async fn load_possibilities(&self) -> Result<Vec<Possibility>, ServiceError> {
        let records = self.fetch(CollectionKind::Possibilities).await?;
        Ok(normalize_possibilities(records)?)
    }

    pub async fn save_artifacts(&self, artifacts: &[Artifact]) -> Result<(), ServiceError> {
        self.replace(CollectionKind::Artifacts, serde_json::to_value(artifacts)?)
            .await
    }

    pub async fn save_possibilities(
        &self,
        possibilities: &[Possibility],
    ) -> Result<(), ServiceError> {
        self.replace(
            CollectionKind::Possibilities,
            serde_json::to_value(possibilities)?,
        )
        .await
    }

    async fn fetch(&self, kind: CollectionKind) -> Result<Vec<Value>, ServiceError> {
        let value = self.api.get_json(kind.api_path()).await?;
        Ok(serde_json::from_value(value)?)
    }

    async fn replace(&self, kind: CollectionKind, body: Value) -> Result<(), ServiceError> {
        self.api.put_json(kind.api_path(), &body).await?;
        tracing::debug!(collection = %kind, "Collection saved");
        Ok(())
    }
}
