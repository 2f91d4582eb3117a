//! Repository port traits for collection storage.

use std::fmt;

use async_trait::async_trait;
use zbierka_domain::{Artifact, Possibility};

use super::error::RepoError;

/// Content hash of a stored collection, used as an optimistic-concurrency token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CollectionVersion(String);

impl CollectionVersion {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

}

impl fmt::Display for CollectionVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Versions a writer accepts. The write goes ahead when the stored version is
/// any one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpectedVersions(Vec<CollectionVersion>);

impl ExpectedVersions {
    /// `None` when `versions` is empty, since that would match nothing.
    pub fn any_of(versions: impl IntoIterator<Item = CollectionVersion>) -> Option<Self> {
        let versions: Vec<CollectionVersion> = versions.into_iter().collect();
        (!versions.is_empty()).then_some(Self(versions))
    }

    pub fn matches(&self, version: &CollectionVersion) -> bool {
        self.0.contains(version)
    }
}

impl From<CollectionVersion> for ExpectedVersions {
    fn from(version: CollectionVersion) -> Self {
        Self(vec![version])
    }
}

impl fmt::Display for ExpectedVersions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, version) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{version}")?;
        }
        Ok(())
    }
}

/// A full collection together with the version it was read at.
#[derive(Debug, Clone, PartialEq)]
pub struct Versioned<T> {
    pub records: Vec<T>,
    pub version: CollectionVersion,
}

// =============================================================================
// Collection Ports (one per record type)
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArtifactRepo: Send + Sync {
    /// Read every artifact. A collection that was never written is empty.
    async fn list(&self) -> Result<Versioned<Artifact>, RepoError>;

    /// Overwrite the whole collection. When `expected` is set and none of its
    /// versions match the stored one, nothing is written.
    async fn replace_all(
        &self,
        artifacts: Vec<Artifact>,
        expected: Option<ExpectedVersions>,
    ) -> Result<CollectionVersion, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PossibilityRepo: Send + Sync {
    async fn list(&self) -> Result<Versioned<Possibility>, RepoError>;

    async fn replace_all(
        &self,
        possibilities: Vec<Possibility>,
        expected: Option<ExpectedVersions>,
    ) -> Result<CollectionVersion, RepoError>;
}
