//! Collaborator contracts consumed by the session flow.

use anyhow::Result;
use async_trait::async_trait;
use atelier_types::{AnonWork, AuthOutcome, Project, ProjectDraft};

/// Credential exchange backend.
///
/// A rejected credential resolves to `Ok` with `success: false`; `Err` is
/// reserved for transport-level failures (network, server unreachable).
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_in(&self, email: &str, password: &str) -> Result<AuthOutcome>;
    async fn sign_up(&self, email: &str, password: &str) -> Result<AuthOutcome>;
}

/// Holds the user's pre-authentication work, if any.
pub trait AnonWorkStore: Send + Sync {
    fn get(&self) -> Option<AnonWork>;
    /// Destroys the staged work. No-op when nothing is staged.
    fn clear(&self);
}

/// Persisted-project access.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// All of the user's projects, most-recent-first. The ordering is this
    /// repository's contract; callers do not re-sort.
    async fn list(&self) -> Result<Vec<Project>>;
    async fn create(&self, draft: ProjectDraft) -> Result<Project>;
}

/// Client-side route transition.
pub trait Navigator: Send + Sync {
    fn go_to(&self, path: &str) -> Result<()>;
}
