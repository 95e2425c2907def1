// src/commands/ls_cmd.rs
use async_trait::async_trait;

use super::types::{Command, CommandContext, CommandResult, ErrorCode};
use crate::fs::VfsError;

pub struct LsCommand;

#[async_trait]
impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    async fn execute(&self, ctx: &CommandContext) -> CommandResult {
        let dir_path = match ctx.args.first() {
            Some(target) => match ctx.fs.navigate(&ctx.current_path, target) {
                Ok(path) => path,
                Err(err) => return access_error(target, err),
            },
            None => ctx.current_path.clone(),
        };

        match ctx.fs.list_dir(&dir_path) {
            Ok(entries) => {
                let listing: Vec<String> = entries
                    .iter()
                    .map(|entry| {
                        if entry.is_dir {
                            format!("{}/", entry.name)
                        } else {
                            entry.name.clone()
                        }
                    })
                    .collect();
                CommandResult::success(listing.join("\n"))
            }
            Err(err) => access_error(&dir_path, err),
        }
    }
}

fn access_error(target: &str, err: VfsError) -> CommandResult {
    match err {
        VfsError::NotFound { .. } => CommandResult::failure(
            ErrorCode::NoSuchDirectory,
            format!("ls: cannot access '{}': No such file or directory", target),
        ),
        VfsError::NotADirectory { .. } => CommandResult::failure(
            ErrorCode::NotADirectory,
            format!("ls: cannot access '{}': Not a directory", target),
        ),
        other => CommandResult::failure_with_details(
            ErrorCode::CommandError,
            format!("ls: cannot access '{}'", target),
            other.to_string(),
        ),
    }
}
