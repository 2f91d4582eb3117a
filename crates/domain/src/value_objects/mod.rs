//! Value objects for record fields.

mod count;
mod id_derivation;

pub use count::PossibilityCount;
pub use id_derivation::{indexed_artifact_id, slugify, timestamp_artifact_id};
