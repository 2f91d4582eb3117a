//! Possibility collection operations.

use std::sync::Arc;

use serde_json::Value;
use zbierka_domain::{normalize_possibilities, Possibility};

use crate::infrastructure::ports::{
    CollectionVersion, ExpectedVersions, PossibilityRepo, Versioned,
};

use super::{duplicate_ids, ManagementError};

pub struct PossibilityCrud {
    possibilities: Arc<dyn PossibilityRepo>,
}

impl PossibilityCrud {
    pub fn new(possibilities: Arc<dyn PossibilityRepo>) -> Self {
        Self { possibilities }
    }

    pub async fn list(&self) -> Result<Versioned<Possibility>, ManagementError> {
        Ok(self.possibilities.list().await?)
    }

    /// Replace the whole possibility collection. Artifacts pointing at removed
    /// possibilities are left alone.
    pub async fn replace_all(
        &self,
        records: Vec<Value>,
        expected: Option<ExpectedVersions>,
    ) -> Result<CollectionVersion, ManagementError> {
        let possibilities = normalize_possibilities(records)?;

        for id in duplicate_ids(possibilities.iter().map(|p| &p.id)) {
            tracing::warn!(possibility_id = %id, "Possibility id is used more than once");
        }

        Ok(self.possibilities.replace_all(possibilities, expected).await?)
    }
}
