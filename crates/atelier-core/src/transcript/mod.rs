//! Transcript presentation helpers.
//!
//! Pure formatting; the rendering pipeline itself lives in the front-end
//! shell, not here.

mod badge;

pub use badge::{BadgeIndicator, ToolBadge, display_message};
