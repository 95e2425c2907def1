// src/commands/types.rs
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::fs::VirtualFs;

/// Side effects a command asks the session layer to apply. Commands
/// never mutate session state themselves; they describe the change and
/// the dispatcher applies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SideEffect {
    /// Move the session to a new current directory.
    Navigation { new_path: String },
    /// Wipe the visible history.
    HistoryClear,
    /// Reserved for lazily fetched route content; the built-in commands
    /// never emit it.
    ContentLoad { path: String },
}

/// Stable identifiers for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    EmptyCommand,
    UnknownCommand,
    MissingOperand,
    NoSuchFile,
    NoSuchDirectory,
    NotADirectory,
    CommandError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::EmptyCommand => "EMPTY_COMMAND",
            ErrorCode::UnknownCommand => "UNKNOWN_COMMAND",
            ErrorCode::MissingOperand => "MISSING_OPERAND",
            ErrorCode::NoSuchFile => "NO_SUCH_FILE",
            ErrorCode::NoSuchDirectory => "NO_SUCH_DIRECTORY",
            ErrorCode::NotADirectory => "NOT_A_DIRECTORY",
            ErrorCode::CommandError => "COMMAND_ERROR",
        }
    }
}

/// A failed command's error descriptor. The message is the user-facing
/// line; details carry internal diagnostics when available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// The outcome of one command execution: output text, side effects for
/// the session layer, and the error descriptor on failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub success: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub output: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub side_effects: Vec<SideEffect>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResult {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            side_effects: Vec::new(),
            error: None,
        }
    }

    pub fn with_side_effect(mut self, effect: SideEffect) -> Self {
        self.side_effects.push(effect);
        self
    }

    pub fn failure(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            side_effects: Vec::new(),
            error: Some(CommandError {
                code,
                message: message.into(),
                details: None,
            }),
        }
    }

    pub fn failure_with_details(
        code: ErrorCode,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            success: false,
            output: String::new(),
            side_effects: Vec::new(),
            error: Some(CommandError {
                code,
                message: message.into(),
                details: Some(details.into()),
            }),
        }
    }
}

/// Execution context handed to every command: the parsed arguments, the
/// session's current directory, and a shared handle to the site tree.
#[derive(Clone)]
pub struct CommandContext {
    pub args: Vec<String>,
    pub current_path: String,
    pub fs: Arc<VirtualFs>,
}

impl CommandContext {
    /// Fresh context with no arguments.
    pub fn new(current_path: impl Into<String>, fs: Arc<VirtualFs>) -> Self {
        Self {
            args: Vec::new(),
            current_path: current_path.into(),
            fs,
        }
    }
}

/// A named command over the read-only site tree.
#[async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    async fn execute(&self, ctx: &CommandContext) -> CommandResult;
}

// ============================================================================
// Tests
// ============================================================================
