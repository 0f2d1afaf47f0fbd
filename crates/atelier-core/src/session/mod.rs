//! Authentication and session reconciliation.
//!
//! The flow is collaborator-driven: credential exchange, anonymous-work
//! storage, project persistence, and route transitions are all injected
//! behind traits so the orchestration logic stays deterministic under test.

mod auth_flow;
mod naming;
mod reconcile;
mod store;
mod traits;

pub use auth_flow::AuthFlow;
pub use naming::{Clock, NameEntropy, RandEntropy, SystemClock};
pub use reconcile::SessionReconciler;
pub use store::MemoryAnonWorkStore;
pub use traits::{AnonWorkStore, AuthProvider, Navigator, ProjectRepository};
