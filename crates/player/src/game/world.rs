//! The artifact catalog as the game sees it.

use zbierka_domain::{Artifact, Possibility, PossibilityId, PossibilityRef};

use crate::application::editor::EditorState;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct World {
    artifacts: Vec<Artifact>,
    possibilities: Vec<Possibility>,
}

impl World {
    pub fn new(artifacts: Vec<Artifact>, possibilities: Vec<Possibility>) -> Self {
        Self {
            artifacts,
            possibilities,
        }
    }

    /// Snapshot of whatever the editor currently holds.
    pub fn from_editor(state: &EditorState) -> Self {
        Self::new(state.artifacts.clone(), state.possibilities.clone())
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn possibilities(&self) -> &[Possibility] {
        &self.possibilities
    }

    pub fn possibility(&self, id: &PossibilityId) -> Option<&Possibility> {
        self.possibilities.iter().find(|p| &p.id == id)
    }

    /// `None` for a dangling reference.
    pub fn resolve(&self, reference: &PossibilityRef) -> Option<&Possibility> {
        self.possibility(&reference.possibility)
    }
}
