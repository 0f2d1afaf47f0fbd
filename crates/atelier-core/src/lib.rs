//! Session core for the atelier UI-building chat front-end.
//!
//! Owns the post-authentication reconciliation flow: deciding whether a
//! freshly signed-in user lands in a project materialized from their
//! anonymous work, their most recent existing project, or a brand-new
//! empty one. Also carries the pure formatting helpers for tool-call
//! progress badges and the generation prompt asset.

pub mod prompts;
pub mod session;
pub mod transcript;
