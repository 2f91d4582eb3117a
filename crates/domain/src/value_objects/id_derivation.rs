//! Default ids for records created without one.

use crate::ids::{ArtifactId, PossibilityId};

/// Id for an artifact created at `millis` (unix epoch milliseconds).
pub fn timestamp_artifact_id(millis: i64) -> ArtifactId {
    ArtifactId::new(format!("artifact-{millis}"))
}

/// Id for a stored artifact that has none, based on its array position.
pub fn indexed_artifact_id(index: usize) -> ArtifactId {
    ArtifactId::new(format!("artifact-{index}"))
}

/// Possibility id derived from its display name: lower-cased, with every run
/// of whitespace replaced by a single `-`.
///
/// Leading and trailing whitespace is not trimmed, so `" Dust"` becomes `"-dust"`.
pub fn slugify(name: &str) -> PossibilityId {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for ch in name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(ch.to_lowercase());
            in_whitespace = false;
        }
    }
    PossibilityId::new(slug)
}
