//! Post-authentication destination decision.

use std::sync::Arc;

use anyhow::Result;
use atelier_types::ProjectDraft;
use tracing::debug;

use super::naming::{fresh_project_name, rescued_work_name};
use super::{AnonWorkStore, Clock, NameEntropy, Navigator, ProjectRepository, RandEntropy, SystemClock};

/// Decides where a freshly authenticated session lands and whether the
/// user's anonymous work gets materialized into a project on the way.
///
/// Runs only after a successful credential exchange; collaborator errors
/// propagate unchanged, with no local retry or recovery.
pub struct SessionReconciler {
    anon_work: Arc<dyn AnonWorkStore>,
    projects: Arc<dyn ProjectRepository>,
    navigator: Arc<dyn Navigator>,
    clock: Arc<dyn Clock>,
    entropy: Arc<dyn NameEntropy>,
}

impl SessionReconciler {
    pub fn new(
        anon_work: Arc<dyn AnonWorkStore>,
        projects: Arc<dyn ProjectRepository>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            anon_work,
            projects,
            navigator,
            clock: Arc::new(SystemClock),
            entropy: Arc::new(RandEntropy),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_entropy(mut self, entropy: Arc<dyn NameEntropy>) -> Self {
        self.entropy = entropy;
        self
    }

    /// Picks the post-login destination. First matching branch wins:
    ///
    /// 1. Staged anonymous work with at least one message: fold it into a
    ///    new project, clear the store, navigate there. Existing projects
    ///    are never consulted on this branch.
    /// 2. Existing projects: navigate to the most recent one. Work holding
    ///    only file data falls through to here and is left staged, not
    ///    cleared (flagged for product review; see DESIGN.md).
    /// 3. Nothing anywhere: create an empty project and navigate to it.
    pub async fn reconcile_and_navigate(&self) -> Result<()> {
        if let Some(work) = self.anon_work.get()
            && work.has_messages()
        {
            debug!(messages = work.messages.len(), "promoting anonymous work");
            let project = self
                .projects
                .create(ProjectDraft {
                    name: rescued_work_name(self.clock.now()),
                    messages: work.messages,
                    data: work.file_system_data,
                })
                .await?;
            self.anon_work.clear();
            return self.navigator.go_to(&format!("/{}", project.id));
        }

        let existing = self.projects.list().await?;
        if let Some(most_recent) = existing.first() {
            debug!(project = %most_recent.id, "resuming most recent project");
            return self.navigator.go_to(&format!("/{}", most_recent.id));
        }

        let project = self
            .projects
            .create(ProjectDraft::empty(fresh_project_name(
                self.entropy.as_ref(),
            )))
            .await?;
        debug!(project = %project.id, "created empty project");
        self.navigator.go_to(&format!("/{}", project.id))
    }
}
