//! The two named record sets the editor manages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A top-level collection, backed by one JSON file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionKind {
    Artifacts,
    Possibilities,
}

impl CollectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Artifacts => "artifacts",
            Self::Possibilities => "possibilities",
        }
    }

    /// Name of the backing file inside the assets directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Artifacts => "artifacts.json",
            Self::Possibilities => "possibilities.json",
        }
    }

    /// HTTP path serving this collection.
    pub fn api_path(&self) -> &'static str {
        match self {
            Self::Artifacts => "/api/artifacts",
            Self::Possibilities => "/api/possibilities",
        }
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
