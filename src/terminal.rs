//! Terminal Session
//!
//! Main entry point for the portfolio terminal.
//! Ties together the content source, filesystem tree, command registry,
//! and session state. The embedding frontend submits raw input lines
//! and renders the returned results; every state change flows through a
//! declared side effect.

use std::sync::Arc;

use crate::commands::{
    default_registry, CommandContext, CommandRegistry, CommandResult, ErrorCode, SideEffect,
};
use crate::content::{ContentError, ContentSource};
use crate::fs::VirtualFs;
use crate::session::{HistoryEntry, SessionState};

/// Options for creating a terminal session.
#[derive(Debug, Clone)]
pub struct TerminalConfig {
    /// Oldest history entries are dropped past this count.
    pub max_history_size: usize,
    /// Symbol rendered after the path in the prompt.
    pub prompt_symbol: String,
    /// Directory the session starts in. Falls back to `/` when it does
    /// not exist in the loaded site.
    pub default_path: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            max_history_size: 1000,
            prompt_symbol: "→".to_string(),
            default_path: "/".to_string(),
        }
    }
}

/// What the embedding frontend needs after one submitted line: the
/// per-command results, plus the final navigation target if any `cd`
/// succeeded.
#[derive(Debug, Clone)]
pub struct ExecOutcome {
    pub results: Vec<CommandResult>,
    pub navigation: Option<String>,
}

/// An initialized terminal session over an immutable site filesystem.
pub struct Terminal {
    fs: Arc<VirtualFs>,
    registry: CommandRegistry,
    state: SessionState,
    config: TerminalConfig,
}

impl Terminal {
    /// Create a terminal with default configuration.
    pub async fn new(source: &dyn ContentSource) -> Result<Self, ContentError> {
        Self::with_config(source, TerminalConfig::default()).await
    }

    /// Create a terminal session. All content is loaded and the tree
    /// built before this returns; commands only ever see the finished
    /// filesystem.
    pub async fn with_config(
        source: &dyn ContentSource,
        config: TerminalConfig,
    ) -> Result<Self, ContentError> {
        let pairs = source.load().await?;
        let fs = Arc::new(VirtualFs::from_pairs(pairs));

        let start = match fs.node(&config.default_path) {
            Some(node) if node.is_dir() => config.default_path.clone(),
            _ => "/".to_string(),
        };

        Ok(Self {
            fs,
            registry: default_registry(),
            state: SessionState::new(start, config.max_history_size),
            config,
        })
    }

    /// Execute one submitted line: record it, run the (possibly chained)
    /// commands, record their outputs, and apply side effects in order.
    pub async fn exec(&mut self, input: &str) -> ExecOutcome {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            // blank input is not recorded in history
            return ExecOutcome {
                results: vec![CommandResult::failure(
                    ErrorCode::EmptyCommand,
                    "No command provided",
                )],
                navigation: None,
            };
        }

        self.state.push_input(trimmed);

        let mut ctx = CommandContext::new(self.state.current_path.clone(), self.fs.clone());
        let results = self.registry.execute_chain(trimmed, &mut ctx).await;

        let mut navigation = None;
        for result in &results {
            if let Some(error) = &result.error {
                self.state.push_output(error.message.clone());
            } else if !result.output.is_empty() {
                self.state.push_output(result.output.clone());
            }

            for effect in &result.side_effects {
                match effect {
                    SideEffect::Navigation { new_path } => {
                        self.state.current_path = new_path.clone();
                        navigation = Some(new_path.clone());
                    }
                    SideEffect::HistoryClear => self.state.clear_history(),
                    SideEffect::ContentLoad { .. } => {}
                }
            }
        }

        ExecOutcome {
            results,
            navigation,
        }
    }

    /// Current directory, always an absolute path.
    pub fn current_path(&self) -> &str {
        &self.state.current_path
    }

    pub fn history(&self) -> &[HistoryEntry] {
        self.state.history()
    }

    /// Prompt line for interactive frontends: display path plus symbol.
    pub fn prompt(&self) -> String {
        format!("{} {}", self.state.display_path(), self.config.prompt_symbol)
    }

    /// The site filesystem, for frontends that render the tree directly.
    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    /// Registered command names, for completion.
    pub fn command_names(&self) -> Vec<&str> {
        self.registry.names()
    }
}

// ============================================================================
// Tests
// ============================================================================
