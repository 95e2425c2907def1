// src/commands/registry.rs
use std::collections::HashMap;

use super::types::{Command, CommandContext, CommandResult, ErrorCode, SideEffect};

/// Token separating chained sub-commands in one input line.
pub const CHAIN_OPERATOR: &str = "&&";

const EMPTY_COMMAND_MESSAGE: &str = "No command provided";

/// One parsed sub-command: name plus whitespace-split arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

/// Split an input into a command name and arguments. Returns `None` for
/// blank input. Any run of whitespace separates tokens; there is no
/// quoting.
pub fn parse_command(input: &str) -> Option<ParsedCommand> {
    let mut parts = input.split_whitespace();
    let name = parts.next()?;
    Some(ParsedCommand {
        name: name.to_string(),
        args: parts.map(str::to_string).collect(),
    })
}

pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Execute a single sub-command against the context.
    pub async fn execute(&self, input: &str, ctx: &mut CommandContext) -> CommandResult {
        let Some(parsed) = parse_command(input) else {
            return CommandResult::failure(ErrorCode::EmptyCommand, EMPTY_COMMAND_MESSAGE);
        };
        let Some(command) = self.get(&parsed.name) else {
            return CommandResult::failure(
                ErrorCode::UnknownCommand,
                format!("Unknown command: {}", parsed.name),
            );
        };
        ctx.args = parsed.args;
        command.execute(ctx).await
    }

    /// Execute a full input line, splitting on [`CHAIN_OPERATOR`].
    ///
    /// Sub-commands run left to right. A `Navigation` side effect from a
    /// successful sub-command moves the context's current path before
    /// the next one runs, and the chain halts at the first failure; the
    /// skipped remainder produces no results.
    pub async fn execute_chain(&self, input: &str, ctx: &mut CommandContext) -> Vec<CommandResult> {
        let commands: Vec<&str> = input
            .split(CHAIN_OPERATOR)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if commands.is_empty() {
            return vec![CommandResult::failure(
                ErrorCode::EmptyCommand,
                EMPTY_COMMAND_MESSAGE,
            )];
        }

        let mut results = Vec::with_capacity(commands.len());
        for command_str in commands {
            let result = self.execute(command_str, ctx).await;

            if result.success {
                for effect in &result.side_effects {
                    if let SideEffect::Navigation { new_path } = effect {
                        ctx.current_path = new_path.clone();
                    }
                }
            }

            let halt = !result.success;
            results.push(result);
            if halt {
                break;
            }
        }
        results
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

use super::cat_cmd::CatCommand;
use super::cd_cmd::CdCommand;
use super::clear_cmd::ClearCommand;
use super::help_cmd::HelpCommand;
use super::ls_cmd::LsCommand;
use super::neofetch_cmd::NeofetchCommand;
use super::rm_cmd::RmCommand;

/// Register the built-in command set.
pub fn register_builtins(registry: &mut CommandRegistry) {
    registry.register(Box::new(HelpCommand));
    registry.register(Box::new(CdCommand));
    registry.register(Box::new(LsCommand));
    registry.register(Box::new(CatCommand));
    registry.register(Box::new(NeofetchCommand));
    registry.register(Box::new(RmCommand));
    registry.register(Box::new(ClearCommand));
}

/// Registry with all built-in commands registered.
pub fn default_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    register_builtins(&mut registry);
    registry
}

// ============================================================================
// Tests
// ============================================================================
