//! Management use cases for full-collection reads and replaces.
//!
//! These use cases keep HTTP handlers thin: handlers pass raw JSON records in,
//! the use cases normalize them into typed records and hand them to the store.

mod artifact;
mod possibility;

pub use artifact::ArtifactCrud;
pub use possibility::PossibilityCrud;

use std::collections::HashSet;
use std::hash::Hash;

use zbierka_domain::DomainError;

use crate::infrastructure::ports::RepoError;

/// Shared error type for management use cases.
#[derive(Debug, thiserror::Error)]
pub enum ManagementError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl From<DomainError> for ManagementError {
    fn from(e: DomainError) -> Self {
        Self::InvalidInput(e.to_string())
    }
}

/// Container for management use cases.
pub struct ManagementUseCases {
    pub artifact: ArtifactCrud,
    pub possibility: PossibilityCrud,
}

impl ManagementUseCases {
    pub fn new(artifact: ArtifactCrud, possibility: PossibilityCrud) -> Self {
        Self {
            artifact,
            possibility,
        }
    }
}

/// Ids that occur more than once, in first-repeat order.
fn duplicate_ids<'a, T: Eq + Hash + 'a>(ids: impl IntoIterator<Item = &'a T>) -> Vec<&'a T> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for id in ids {
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(id);
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_ids_reports_each_once() {
        let ids = ["a", "b", "a", "c", "a", "b"];
        assert_eq!(duplicate_ids(ids.iter()), vec![&"a", &"b"]);
    }
}
