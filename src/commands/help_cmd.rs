use async_trait::async_trait;

use super::types::{Command, CommandContext, CommandResult};

/// Name/description pairs shown by `help`, in display order.
const COMMANDS: &[(&str, &str)] = &[
    ("help", "Show this help message"),
    ("cd", "Change directory"),
    ("ls", "List directory contents"),
    ("cat", "Display file contents"),
    ("neofetch", "Show system information"),
    ("rm", "Remove files"),
    ("clear", "Clear terminal history"),
];

pub struct HelpCommand;

#[async_trait]
impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }

    async fn execute(&self, _ctx: &CommandContext) -> CommandResult {
        let lines: Vec<String> = COMMANDS
            .iter()
            .map(|(name, description)| format!("  {:<9} - {}", name, description))
            .collect();
        CommandResult::success(format!("Available commands:\n\n{}", lines.join("\n")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::VirtualFs;
    use std::sync::Arc;

    fn create_ctx() -> CommandContext {
        CommandContext::new("/", Arc::new(VirtualFs::new()))
    }

    #[tokio::test]
    async fn test_help_lists_every_command() {
        let result = HelpCommand.execute(&create_ctx()).await;
        assert!(result.success);
        assert!(result.output.starts_with("Available commands:"));
        for name in ["help", "cd", "ls", "cat", "neofetch", "rm", "clear"] {
            assert!(result.output.contains(name), "missing {name}");
        }
    }

    #[tokio::test]
    async fn test_help_line_format() {
        let result = HelpCommand.execute(&create_ctx()).await;
        assert!(result.output.contains("  help      - Show this help message"));
        assert!(result.output.contains("  neofetch  - Show system information"));
    }
}
