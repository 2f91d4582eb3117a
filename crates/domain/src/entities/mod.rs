//! Editor records.

mod artifact;
mod possibility;

pub use artifact::{normalize_artifacts, Artifact, PossibilityRef, RawArtifact, RawPossibilityRef};
pub use possibility::{normalize_possibilities, Possibility, RawPossibility};
