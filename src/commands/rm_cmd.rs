use async_trait::async_trait;

use super::types::{Command, CommandContext, CommandResult};

pub struct RmCommand;

#[async_trait]
impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    // decorative: nothing is ever deleted
    async fn execute(&self, _ctx: &CommandContext) -> CommandResult {
        CommandResult::success("oh come on, don't delete my site 😢")
    }
}
