//! Zbierka domain types.
//!
//! Records shared by the editor backend (`zbierka-engine`) and the editor
//! client (`zbierka-player`): artifacts, possibilities, the references between
//! them, and the rules for turning loosely-shaped JSON into typed records.

pub mod collection;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use collection::CollectionKind;
pub use entities::{
    normalize_artifacts, normalize_possibilities, Artifact, Possibility, PossibilityRef,
    RawArtifact, RawPossibility, RawPossibilityRef,
};
pub use error::DomainError;
pub use ids::{ArtifactId, PossibilityId};
pub use value_objects::{indexed_artifact_id, slugify, timestamp_artifact_id, PossibilityCount};
