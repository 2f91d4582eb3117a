//! Port traits for infrastructure boundaries.
//!
//! The store is the only external dependency of the engine, so the repository
//! ports are the only abstractions. Everything else is concrete types.

mod error;
mod repos;

pub use error::RepoError;
pub use repos::{ArtifactRepo, CollectionVersion, ExpectedVersions, PossibilityRepo, Versioned};

#[cfg(test)]
pub use repos::{MockArtifactRepo, MockPossibilityRepo};
