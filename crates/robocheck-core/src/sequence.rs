//! Action sequences: entries, text files, and JSON requests.
//!
//! A sequence text file holds one action per line. Lines are trimmed and
//! blank lines skipped on load; saving writes each action on its own line.
//!
//! A JSON request has the shape `{"actions": [...]}`. Array elements that
//! are not strings are kept as [`SequenceEntry::Malformed`] so the verifier
//! can report them in place rather than rejecting the whole request.

use std::fmt::Write as _;
use std::path::Path;

use serde_json::Value;

/// Errors that can occur when loading or saving a sequence.
#[derive(Debug, thiserror::Error)]
pub enum SequenceError {
    /// Failed to read or write the sequence file.
    #[error("sequence file I/O failed: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The request body is not valid JSON.
    #[error("invalid JSON request: {source}")]
    Json {
        /// The underlying parse error.
        #[from]
        source: serde_json::Error,
    },

    /// The request object has no `actions` key.
    #[error("Missing 'actions' in request")]
    MissingActions,

    /// The `actions` value is not an array.
    #[error("Actions must be a list")]
    ActionsNotList,

    /// There is nothing to save.
    #[error("no actions to save")]
    Empty,
}

/// One submitted entry of a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceEntry {
    /// A raw action identifier, not yet normalized.
    Action(String),
    /// A non-string value, held as its JSON text.
    Malformed(String),
}

impl SequenceEntry {
    /// Build an entry from a JSON value.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(action) => Self::Action(action.clone()),
            other => Self::Malformed(other.to_string()),
        }
    }
}

impl From<&str> for SequenceEntry {
    fn from(action: &str) -> Self {
        Self::Action(action.to_owned())
    }
}

impl From<String> for SequenceEntry {
    fn from(action: String) -> Self {
        Self::Action(action)
    }
}

/// Trim, lowercase, and return the identifier the validator should see.
pub fn normalize_action(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Split sequence text into actions: one per line, trimmed, blanks skipped.
pub fn parse_sequence(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Render actions as sequence text, one per line.
pub fn render_sequence<S: AsRef<str>>(actions: &[S]) -> String {
    let mut out = String::new();
    for action in actions {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{}", action.as_ref());
    }
    out
}

/// Read a sequence text file.
///
/// # Errors
///
/// Returns [`SequenceError::Io`] if the file cannot be read.
pub fn load_sequence(path: &Path) -> Result<Vec<String>, SequenceError> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_sequence(&text))
}

/// Write a sequence text file.
///
/// # Errors
///
/// Returns [`SequenceError::Empty`] for an empty list, or
/// [`SequenceError::Io`] if the file cannot be written.
pub fn save_sequence<S: AsRef<str>>(path: &Path, actions: &[S]) -> Result<(), SequenceError> {
    if actions.is_empty() {
        return Err(SequenceError::Empty);
    }
    std::fs::write(path, render_sequence(actions))?;
    tracing::debug!(path = %path.display(), count = actions.len(), "Sequence saved");
    Ok(())
}

/// Parse a `{"actions": [...]}` request body.
///
/// # Errors
///
/// Returns [`SequenceError::Json`] for malformed JSON,
/// [`SequenceError::MissingActions`] if the key is absent (or the body is
/// not an object), and [`SequenceError::ActionsNotList`] if the value is
/// not an array.
pub fn parse_request(body: &str) -> Result<Vec<SequenceEntry>, SequenceError> {
    let value: Value = serde_json::from_str(body)?;
    let actions = value.get("actions").ok_or(SequenceError::MissingActions)?;
    let Value::Array(items) = actions else {
        return Err(SequenceError::ActionsNotList);
    };
    Ok(items.iter().map(SequenceEntry::from_value).collect())
}
