use async_trait::async_trait;

use super::types::{Command, CommandContext, CommandResult, SideEffect};

pub struct ClearCommand;

#[async_trait]
impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }

    async fn execute(&self, _ctx: &CommandContext) -> CommandResult {
        CommandResult::success("").with_side_effect(SideEffect::HistoryClear)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::VirtualFs;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_clear_emits_history_clear() {
        let ctx = CommandContext::new("/", Arc::new(VirtualFs::new()));
        let result = ClearCommand.execute(&ctx).await;
        assert!(result.success);
        assert!(result.output.is_empty());
        assert_eq!(result.side_effects, vec![SideEffect::HistoryClear]);
    }
}
