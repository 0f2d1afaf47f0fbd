//! Shared data types for the atelier workspace.
//!
//! Plain records passed between the session core and its collaborators.
//! The core treats chat messages and file contents as opaque payloads;
//! nothing here inspects their shape beyond existence.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Mapping from virtual-filesystem path to serialized file content.
pub type FileSystemData = serde_json::Map<String, Value>;

/// A single chat message, opaque to the session core.
///
/// Extra fields (tool invocations, attachments, ids) ride along via the
/// flattened map so round-trips preserve the original record shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// Chat and filesystem state accumulated before the user has a session.
///
/// Produced by the anonymous-work store; read-only to the session core,
/// which clears it at most once after folding it into a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnonWork {
    pub messages: Vec<ChatMessage>,
    pub file_system_data: FileSystemData,
}

impl AnonWork {
    /// Whether this work is worth promoting into a project. File data
    /// alone does not count; only messages do.
    pub fn has_messages(&self) -> bool {
        !self.messages.is_empty()
    }
}

/// A persisted project. Only `id` is consumed by the core after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub data: FileSystemData,
}

/// Creation request handed to the project repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDraft {
    pub name: String,
    pub messages: Vec<ChatMessage>,
    pub data: FileSystemData,
}

impl ProjectDraft {
    /// A draft with no messages and no file data.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            messages: Vec::new(),
            data: FileSystemData::new(),
        }
    }
}

/// Structured result of a credential exchange.
///
/// A rejected credential is a value (`success: false`), not an error;
/// transport failures surface as `Err` from the provider instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
        }
    }
}
