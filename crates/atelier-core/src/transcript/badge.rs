//! Tool-call progress badges.
//!
//! Maps a raw tool invocation to the short friendly headline shown next
//! to the spinner/done indicator in the conversation.

use serde_json::Value;

fn value_as_trimmed_str<'a>(input: &'a Value, key: &str) -> Option<&'a str> {
    let value = input.get(key)?.as_str()?.trim();
    (!value.is_empty()).then_some(value)
}

/// Last meaningful path segment, handling both `/` and `\` separators.
/// A trailing separator falls back to the segment before it.
fn file_name(path: &str) -> Option<&str> {
    if path.is_empty() {
        return None;
    }
    let mut segments = path.rsplit(['/', '\\']);
    let last = segments.next()?;
    if last.is_empty() {
        segments.next().filter(|s| !s.is_empty()).or(Some(path))
    } else {
        Some(last)
    }
}

fn arg_file_name<'a>(args: &'a Value, key: &str) -> Option<&'a str> {
    value_as_trimmed_str(args, key).and_then(file_name)
}

fn labeled(verb: &str, file: Option<&str>, fallback: &str) -> String {
    match file {
        Some(file) => format!("{verb} {file}"),
        None => format!("{verb} {fallback}"),
    }
}

fn editor_message(args: &Value) -> String {
    let file = arg_file_name(args, "path");
    match args.get("command").and_then(Value::as_str) {
        Some("view") => labeled("📄 Viewing", file, "file"),
        Some("create") => labeled("📝 Creating", file, "file"),
        Some("str_replace") => labeled("✏️ Editing", file, "file"),
        Some("insert") => labeled("📝 Updating", file, "file"),
        Some("undo_edit") => labeled("↩️ Reverting", file, "changes"),
        _ => labeled("📄 Processing", file, "file"),
    }
}

fn file_manager_message(args: &Value) -> String {
    let file = arg_file_name(args, "path");
    match args.get("command").and_then(Value::as_str) {
        Some("rename") => match (file, arg_file_name(args, "new_path")) {
            (Some(old), Some(new)) => format!("📂 Renaming {old} → {new}"),
            (Some(old), None) => format!("📂 Renaming {old}"),
            _ => "📂 Renaming file".to_string(),
        },
        Some("delete") => labeled("🗑️ Deleting", file, "file"),
        _ => labeled("📂 Managing", file, "file"),
    }
}

/// Friendly headline for a tool invocation. Unknown tools (and calls with
/// no arguments at all) fall back to the raw tool name.
pub fn display_message(tool_name: &str, args: Option<&Value>) -> String {
    let Some(args) = args else {
        return tool_name.to_string();
    };
    match tool_name {
        "str_replace_editor" => editor_message(args),
        "file_manager" => file_manager_message(args),
        _ => tool_name.to_string(),
    }
}

/// Progress indicator shown next to the headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeIndicator {
    /// Call still running.
    Spinner,
    /// Call finished with a result payload.
    Done,
}

/// One tool call's presentation state within the transcript.
#[derive(Debug, Clone)]
pub struct ToolBadge {
    pub tool_name: String,
    pub args: Option<Value>,
    pub state: String,
    pub result: Option<Value>,
}

impl ToolBadge {
    pub fn message(&self) -> String {
        display_message(&self.tool_name, self.args.as_ref())
    }

    /// `Done` only once the call reached the result state and actually
    /// carries a result; a result-state call with no payload keeps
    /// spinning, matching the conversation view.
    pub fn indicator(&self) -> BadgeIndicator {
        if self.state == "result" && self.result.is_some() {
            BadgeIndicator::Done
        } else {
            BadgeIndicator::Spinner
        }
    }
}
