//! Artifact entity - a collectible item composed of weighted possibility references
//!
//! # Wire shape
//!
//! ```json
//! {
//!     "id": "amber-ring",
//!     "name": "Amber ring",
//!     "description": "Found under the bridge",
//!     "possibilities": [{ "possibility": "dust", "count": 2 }]
//! }
//! ```
//!
//! Stored files and PUT bodies are read through [`RawArtifact`], which tolerates
//! the holes older files have (missing `id`, missing `possibilities`), and are
//! then normalized into [`Artifact`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;
use crate::ids::{ArtifactId, PossibilityId};
use crate::value_objects::{indexed_artifact_id, PossibilityCount};

/// Weighted pointer from an artifact to a possibility.
///
/// The referenced id is never checked against the possibility collection, so
/// dangling references are representable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibilityRef {
    pub possibility: PossibilityId,
    pub count: PossibilityCount,
}

impl PossibilityRef {
    pub fn new(possibility: PossibilityId) -> Self {
        Self {
            possibility,
            count: PossibilityCount::ONE,
        }
    }
}

/// A collectible game-design item.
///
/// Plain data struct: every field combination is valid, id uniqueness is a
/// collection-level convention that nothing enforces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub id: ArtifactId,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub possibilities: Vec<PossibilityRef>,
}

impl Artifact {
    pub fn new(id: ArtifactId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            possibilities: Vec::new(),
        }
    }

    /// Ids of every possibility this artifact points at, in order.
    pub fn referenced_possibilities(&self) -> impl Iterator<Item = &PossibilityId> {
        self.possibilities.iter().map(|r| &r.possibility)
    }
}

/// Lenient shape of a stored artifact.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawArtifact {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub possibilities: Option<Vec<RawPossibilityRef>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPossibilityRef {
    #[serde(default)]
    pub possibility: Option<String>,
    #[serde(default)]
    pub count: Option<i64>,
}

impl RawPossibilityRef {
    fn normalize(self) -> Result<PossibilityRef, DomainError> {
        let count = match self.count {
            Some(count) => PossibilityCount::new(count)?,
            None => PossibilityCount::ONE,
        };
        Ok(PossibilityRef {
            possibility: PossibilityId::new(self.possibility.unwrap_or_default()),
            count,
        })
    }
}

impl RawArtifact {
    /// Turn a raw record at `index` into a typed artifact.
    ///
    /// Missing or empty ids become `artifact-<index>`, a missing possibility
    /// list becomes empty, a missing description becomes empty. A missing name
    /// or a count below 1 is rejected.
    pub fn normalize(self, index: usize) -> Result<Artifact, DomainError> {
        let name = self
            .name
            .ok_or_else(|| DomainError::validation("artifact name is required"))?;

        let id = match self.id {
            Some(id) if !id.is_empty() => ArtifactId::new(id),
            _ => indexed_artifact_id(index),
        };

        let possibilities = self
            .possibilities
            .unwrap_or_default()
            .into_iter()
            .map(RawPossibilityRef::normalize)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Artifact {
            id,
            name,
            description: self.description.unwrap_or_default(),
            possibilities,
        })
    }
}

/// Normalize a whole artifact collection, reporting the first bad record.
pub fn normalize_artifacts(records: Vec<Value>) -> Result<Vec<Artifact>, DomainError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value::<RawArtifact>(value)
                .map_err(|e| DomainError::validation(e.to_string()))
                .and_then(|raw| raw.normalize(index))
                .map_err(|e| e.in_record("artifacts", index))
        })
        .collect()
}
