// src/commands/mod.rs
pub mod cat_cmd;
pub mod cd_cmd;
pub mod clear_cmd;
pub mod help_cmd;
pub mod ls_cmd;
pub mod neofetch_cmd;
pub mod registry;
pub mod rm_cmd;
pub mod types;

pub use registry::{
    default_registry, parse_command, CommandRegistry, ParsedCommand, CHAIN_OPERATOR,
};
pub use types::{Command, CommandContext, CommandError, CommandResult, ErrorCode, SideEffect};
