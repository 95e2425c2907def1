//! Session State
//!
//! Per-session value threaded through command dispatch: the current
//! directory and the rolling input/output history. History is capped;
//! the oldest entries fall off first.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::fs::path;

/// Whether a history entry records what the user typed or what a
/// command printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Input,
    Output,
}

/// One rendered line of terminal history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Display form of the directory the entry was made in: last path
    /// segment, or `~` at the root.
    pub path: String,
    pub value: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub timestamp: DateTime<Utc>,
}

/// Session state owned by the terminal controller. Commands never touch
/// this; the controller mutates it by applying their side effects.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub current_path: String,
    history: Vec<HistoryEntry>,
    max_history: usize,
}

impl SessionState {
    pub fn new(current_path: impl Into<String>, max_history: usize) -> Self {
        Self {
            current_path: current_path.into(),
            history: Vec::new(),
            max_history,
        }
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Record a submitted input line.
    pub fn push_input(&mut self, value: impl Into<String>) {
        self.push(EntryKind::Input, value.into());
    }

    /// Record command output, or a surfaced error message.
    pub fn push_output(&mut self, value: impl Into<String>) {
        self.push(EntryKind::Output, value.into());
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Display form of the current path for prompts and new entries.
    pub fn display_path(&self) -> &str {
        path::display_name(&self.current_path)
    }

    fn push(&mut self, kind: EntryKind, value: String) {
        let path = self.display_path().to_string();
        self.history.push(HistoryEntry {
            path,
            value,
            kind,
            timestamp: Utc::now(),
        });
        if self.history.len() > self.max_history {
            let excess = self.history.len() - self.max_history;
            self.history.drain(..excess);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_records_kind_and_path() {
        let mut state = SessionState::new("/", 10);
        state.push_input("ls");
        state.current_path = "/blog".to_string();
        state.push_output("building-a-terminal-site/");

        let history = state.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].kind, EntryKind::Input);
        assert_eq!(history[0].path, "~");
        assert_eq!(history[0].value, "ls");
        assert_eq!(history[1].kind, EntryKind::Output);
        assert_eq!(history[1].path, "blog");
    }

    #[test]
    fn test_history_cap_drops_oldest() {
        let mut state = SessionState::new("/", 3);
        for i in 0..5 {
            state.push_input(format!("cmd{}", i));
        }
        let values: Vec<&str> = state.history().iter().map(|e| e.value.as_str()).collect();
        assert_eq!(values, vec!["cmd2", "cmd3", "cmd4"]);
    }

    #[test]
    fn test_clear_history() {
        let mut state = SessionState::new("/", 10);
        state.push_input("help");
        state.push_output("Available commands:");
        state.clear_history();
        assert!(state.history().is_empty());
        // path survives a clear
        assert_eq!(state.current_path, "/");
    }

    #[test]
    fn test_display_path() {
        let mut state = SessionState::new("/", 10);
        assert_eq!(state.display_path(), "~");
        state.current_path = "/blog/building-a-terminal-site".to_string();
        assert_eq!(state.display_path(), "building-a-terminal-site");
    }

    #[test]
    fn test_entry_serialization_uses_type_key() {
        let mut state = SessionState::new("/", 10);
        state.push_input("ls");
        let value = serde_json::to_value(&state.history()[0]).unwrap();
        assert_eq!(value["type"], "input");
        assert_eq!(value["path"], "~");
        assert!(value.get("timestamp").is_some());
    }
}
