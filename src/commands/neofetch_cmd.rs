use async_trait::async_trait;

use super::types::{Command, CommandContext, CommandResult};

/// Fixed info card. Nothing here is probed at runtime; the point is the
/// look, not the facts.
const INFO_CARD: &str = concat!(
    "       .---.        visitor@portfolio\n",
    "      /     \\       -----------------\n",
    "      | ._. |       OS: termfolio ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "      | \\_/ |       Host: a static site\n",
    "      '-----'       Shell: termfolio\n",
    "                    Uptime: as long as this tab\n",
    "                    Packages: 7 (built-in)"
);

pub struct NeofetchCommand;

#[async_trait]
impl Command for NeofetchCommand {
    fn name(&self) -> &'static str {
        "neofetch"
    }

    async fn execute(&self, _ctx: &CommandContext) -> CommandResult {
        CommandResult::success(INFO_CARD)
    }
}
