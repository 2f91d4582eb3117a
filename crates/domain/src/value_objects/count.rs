//! How many times a possibility appears in an artifact.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A validated reference count (>= 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct PossibilityCount(u32);

impl PossibilityCount {
    pub const ONE: PossibilityCount = PossibilityCount(1);

    /// Create a new validated count.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the count is below 1 or does not
    /// fit in a `u32`.
    pub fn new(count: i64) -> Result<Self, DomainError> {
        if count < 1 {
            return Err(DomainError::validation(format!(
                "possibility count must be at least 1, got {count}"
            )));
        }
        u32::try_from(count)
            .map(Self)
            .map_err(|_| DomainError::validation(format!("possibility count too large: {count}")))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

impl Default for PossibilityCount {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for PossibilityCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for PossibilityCount {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PossibilityCount> for u32 {
    fn from(count: PossibilityCount) -> u32 {
        count.0
    }
}
