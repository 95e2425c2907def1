// src/commands/cd_cmd.rs
use async_trait::async_trait;

use super::types::{Command, CommandContext, CommandResult, ErrorCode, SideEffect};
use crate::fs::VfsError;

pub struct CdCommand;

#[async_trait]
impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    async fn execute(&self, ctx: &CommandContext) -> CommandResult {
        // bare `cd` goes home, i.e. to the root
        let target = ctx.args.first().map(String::as_str).unwrap_or("/");

        match ctx.fs.navigate(&ctx.current_path, target) {
            Ok(new_path) => {
                CommandResult::success("").with_side_effect(SideEffect::Navigation { new_path })
            }
            Err(err @ VfsError::NotFound { .. }) => {
                CommandResult::failure(ErrorCode::NoSuchDirectory, format!("cd: {}", err))
            }
            Err(err @ VfsError::NotADirectory { .. }) => {
                CommandResult::failure(ErrorCode::NotADirectory, format!("cd: {}", err))
            }
            Err(err) => CommandResult::failure_with_details(
                ErrorCode::CommandError,
                "cd: cannot change directory",
                err.to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::VirtualFs;
    use std::sync::Arc;

    fn create_ctx(current_path: &str, args: Vec<&str>) -> CommandContext {
        let fs = Arc::new(VirtualFs::from_pairs([
            ("/about/content.md", "# About"),
            ("/blog/building-a-terminal-site/content.md", "# Post"),
        ]));
        let mut ctx = CommandContext::new(current_path, fs);
        ctx.args = args.into_iter().map(String::from).collect();
        ctx
    }

    #[tokio::test]
    async fn test_cd_into_directory() {
        let result = CdCommand.execute(&create_ctx("/", vec!["about"])).await;
        assert!(result.success);
        assert!(result.output.is_empty());
        assert_eq!(
            result.side_effects,
            vec![SideEffect::Navigation {
                new_path: "/about".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_cd_without_args_goes_to_root() {
        let result = CdCommand.execute(&create_ctx("/about", vec![])).await;
        assert_eq!(
            result.side_effects,
            vec![SideEffect::Navigation {
                new_path: "/".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_cd_dotdot() {
        let result = CdCommand
            .execute(&create_ctx("/blog/building-a-terminal-site", vec![".."]))
            .await;
        assert_eq!(
            result.side_effects,
            vec![SideEffect::Navigation {
                new_path: "/blog".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_cd_missing_directory() {
        let result = CdCommand.execute(&create_ctx("/", vec!["bogus"])).await;
        assert!(!result.success);
        let err = result.error.unwrap();
        assert_eq!(err.code, ErrorCode::NoSuchDirectory);
        assert_eq!(err.message, "cd: no such file or directory: bogus");
    }

    #[tokio::test]
    async fn test_cd_into_file() {
        let result = CdCommand
            .execute(&create_ctx("/about", vec!["content.md"]))
            .await;
        assert!(!result.success);
        let err = result.error.unwrap();
        assert_eq!(err.code, ErrorCode::NotADirectory);
        assert_eq!(err.message, "cd: not a directory: content.md");
    }

    #[tokio::test]
    async fn test_cd_home_alias() {
        let result = CdCommand.execute(&create_ctx("/about", vec!["~"])).await;
        assert_eq!(
            result.side_effects,
            vec![SideEffect::Navigation {
                new_path: "/".to_string()
            }]
        );
    }
}
