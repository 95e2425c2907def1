// src/commands/cat_cmd.rs
use async_trait::async_trait;

use super::types::{Command, CommandContext, CommandResult, ErrorCode};
use crate::fs::path;

pub struct CatCommand;

#[async_trait]
impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    async fn execute(&self, ctx: &CommandContext) -> CommandResult {
        let Some(file_name) = ctx.args.first() else {
            return CommandResult::failure(ErrorCode::MissingOperand, "cat: missing operand");
        };

        // naive join: the operand is not run through the resolver, so
        // `..` and `.` are never interpreted
        let file_path = path::join(&ctx.current_path, file_name);
        match ctx.fs.read_file(&file_path) {
            Ok(file) => CommandResult::success(file.content.clone()),
            Err(_) => CommandResult::failure(
                ErrorCode::NoSuchFile,
                format!("cat: {}: No such file or directory", file_name),
            ),
        }
    }
}
