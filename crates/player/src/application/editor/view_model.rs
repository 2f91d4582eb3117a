//! Editor view-model - in-memory collections plus edit/loading/saving flags
//!
//! A UI renders [`EditorState`] from a [`EditorViewModel::subscribe`] receiver
//! and calls the operations below. A fresh snapshot is published after every
//! operation and whenever `loading` or `saving` flips, so the indicators are
//! visible while a request is in flight. Every operation that changes a
//! collection saves the whole collection right away. Save and load failures
//! are logged and otherwise ignored: the state keeps whatever the user last saw
//! and `last_saved` is not advanced.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures_util::future::join;
use tokio::sync::watch;
use zbierka_domain::{
    slugify, timestamp_artifact_id, Artifact, ArtifactId, Possibility, PossibilityId,
    PossibilityRef,
};

use crate::application::services::EditorService;
use crate::ports::outbound::ClockPort;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorTab {
    #[default]
    Artifacts,
    Possibilities,
}

/// Everything the editor UI renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    pub active_tab: EditorTab,
    pub artifacts: Vec<Artifact>,
    pub possibilities: Vec<Possibility>,
    /// Working copy shown in the artifact modal; not part of `artifacts` until saved.
    pub editing_artifact: Option<Artifact>,
    pub editing_possibility: Option<Possibility>,
    pub saving: bool,
    pub loading: bool,
    pub last_saved: Option<DateTime<Utc>>,
}

pub struct EditorViewModel {
    state: EditorState,
    // Ids the edit copies had when editing started, so a renamed record can
    // still be found in its collection.
    editing_artifact_original_id: Option<ArtifactId>,
    editing_possibility_original_id: Option<PossibilityId>,
    service: EditorService,
    clock: Arc<dyn ClockPort>,
    updates: watch::Sender<EditorState>,
}

impl EditorViewModel {
    /// Starts in the loading state; call [`load`](Self::load) next.
    pub fn new(service: EditorService, clock: Arc<dyn ClockPort>) -> Self {
        let state = EditorState {
            loading: true,
            ..EditorState::default()
        };
        let (updates, _) = watch::channel(state.clone());
        Self {
            state,
            editing_artifact_original_id: None,
            editing_possibility_original_id: None,
            service,
            clock,
            updates,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Snapshots of the state, including the ones taken mid-request.
    pub fn subscribe(&self) -> watch::Receiver<EditorState> {
        self.updates.subscribe()
    }

    fn publish(&self) {
        self.updates.send_replace(self.state.clone());
    }

    /// Change the artifact working copy, if one is open.
    pub fn update_editing_artifact(&mut self, edit: impl FnOnce(&mut Artifact)) {
        if let Some(artifact) = self.state.editing_artifact.as_mut() {
            edit(artifact);
            self.publish();
        }
    }

    pub fn update_editing_possibility(&mut self, edit: impl FnOnce(&mut Possibility)) {
        if let Some(possibility) = self.state.editing_possibility.as_mut() {
            edit(possibility);
            self.publish();
        }
    }

    pub fn set_active_tab(&mut self, tab: EditorTab) {
        self.state.active_tab = tab;
        self.publish();
    }

    /// Fetch both collections concurrently. Nothing is replaced unless both
    /// loads succeed.
    pub async fn load(&mut self) {
        self.state.loading = true;
        self.publish();

        let (artifacts, possibilities) = join(
            self.service.load_artifacts(),
            self.service.load_possibilities(),
        )
        .await;

        match (artifacts, possibilities) {
            (Ok(artifacts), Ok(possibilities)) => {
                tracing::debug!(
                    artifacts = artifacts.len(),
                    possibilities = possibilities.len(),
                    "Editor data loaded"
                );
                self.state.artifacts = artifacts;
                self.state.possibilities = possibilities;
            }
            (Err(e), _) | (_, Err(e)) => {
                tracing::error!(error = %e, "Failed to load data");
            }
        }

        self.state.loading = false;
        self.publish();
    }

    // =========================================================================
    // Artifacts
    // =========================================================================

    /// Append a new artifact. Blank names are ignored; a blank id becomes
    /// `artifact-<unix millis>`.
    pub async fn add_artifact(&mut self, id: Option<&str>, name: &str, description: &str) {
        if name.trim().is_empty() {
            return;
        }

        let id = match id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => ArtifactId::new(id),
            None => timestamp_artifact_id(self.clock.now().timestamp_millis()),
        };
        self.state
            .artifacts
            .push(Artifact::new(id, name, description));

        self.save_artifacts().await;
    }

    /// Open a working copy of the first artifact with `id`.
    pub fn edit_artifact(&mut self, id: &ArtifactId) {
        let Some(artifact) = self.state.artifacts.iter().find(|a| &a.id == id) else {
            tracing::debug!(artifact_id = %id, "No artifact to edit");
            return;
        };
        self.editing_artifact_original_id = Some(artifact.id.clone());
        self.state.editing_artifact = Some(artifact.clone());
        self.publish();
    }

    pub fn cancel_edit_artifact(&mut self) {
        self.state.editing_artifact = None;
        self.editing_artifact_original_id = None;
        self.publish();
    }

    /// Put the working copy back at its original position (its id may have
    /// changed) and save.
    pub async fn save_artifact(&mut self) {
        let (Some(edited), Some(original_id)) = (
            self.state.editing_artifact.take(),
            self.editing_artifact_original_id.take(),
        ) else {
            return;
        };

        match self
            .state
            .artifacts
            .iter()
            .position(|a| a.id == original_id)
        {
            Some(index) => self.state.artifacts[index] = edited,
            None => {
                tracing::warn!(
                    artifact_id = %original_id,
                    "Edited artifact no longer exists, edit dropped"
                );
            }
        }

        self.save_artifacts().await;
    }

    /// Remove every artifact with `id`. Possibility references are not checked.
    pub async fn delete_artifact(&mut self, id: &ArtifactId) {
        self.state.artifacts.retain(|a| &a.id != id);
        self.save_artifacts().await;
    }

    /// Add a reference to the working copy, pointing at the first known
    /// possibility (or an empty id when there are none).
    pub fn add_possibility_to_artifact(&mut self) {
        let default_possibility = self
            .state
            .possibilities
            .first()
            .map(|p| p.id.clone())
            .unwrap_or_default();

        self.update_editing_artifact(|artifact| {
            artifact
                .possibilities
                .push(PossibilityRef::new(default_possibility));
        });
    }

    pub fn remove_possibility_from_artifact(&mut self, index: usize) {
        self.update_editing_artifact(|artifact| {
            if index < artifact.possibilities.len() {
                artifact.possibilities.remove(index);
            }
        });
    }

    // =========================================================================
    // Possibilities
    // =========================================================================

    /// Append a new possibility. Blank names are ignored; a blank id is
    /// derived from the name (`"My Thing"` -> `"my-thing"`).
    pub async fn add_possibility(&mut self, id: Option<&str>, name: &str, description: &str) {
        if name.trim().is_empty() {
            return;
        }

        let id = match id.map(str::trim).filter(|id| !id.is_empty()) {
            Some(id) => PossibilityId::new(id),
            None => slugify(name),
        };
        self.state
            .possibilities
            .push(Possibility::new(id, name).with_description(description));

        self.save_possibilities().await;
    }

    pub fn edit_possibility(&mut self, id: &PossibilityId) {
        let Some(possibility) = self.state.possibilities.iter().find(|p| &p.id == id) else {
            tracing::debug!(possibility_id = %id, "No possibility to edit");
            return;
        };
        self.editing_possibility_original_id = Some(possibility.id.clone());
        self.state.editing_possibility = Some(possibility.clone());
        self.publish();
    }

    pub fn cancel_edit_possibility(&mut self) {
        self.state.editing_possibility = None;
        self.editing_possibility_original_id = None;
        self.publish();
    }

    pub async fn save_possibility(&mut self) {
        let (Some(edited), Some(original_id)) = (
            self.state.editing_possibility.take(),
            self.editing_possibility_original_id.take(),
        ) else {
            return;
        };

        match self
            .state
            .possibilities
            .iter()
            .position(|p| p.id == original_id)
        {
            Some(index) => self.state.possibilities[index] = edited,
            None => {
                tracing::warn!(
                    possibility_id = %original_id,
                    "Edited possibility no longer exists, edit dropped"
                );
            }
        }

        self.save_possibilities().await;
    }

    pub async fn delete_possibility(&mut self, id: &PossibilityId) {
        self.state.possibilities.retain(|p| &p.id != id);
        self.save_possibilities().await;
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    async fn save_artifacts(&mut self) {
        self.state.saving = true;
        self.publish();
        match self.service.save_artifacts(&self.state.artifacts).await {
            Ok(()) => self.state.last_saved = Some(self.clock.now()),
            Err(e) => tracing::error!(error = %e, "Failed to save artifacts"),
        }
        self.state.saving = false;
        self.publish();
    }

    async fn save_possibilities(&mut self) {
        self.state.saving = true;
        self.publish();
        match self.service.save_possibilities(&self.state.possibilities).await {
            Ok(()) => self.state.last_saved = Some(self.clock.now()),
            Err(e) => tracing::error!(error = %e, "Failed to save possibilities"),
        }
        self.state.saving = false;
        self.publish();
    }
}
