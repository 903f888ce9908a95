use teloxide::utils::command::BotCommands;

use crate::bot::texts::{ORDER_BOT_LABEL, RANDOM_IDEA_LABEL};

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Date Idea Bot commands:")]
pub enum Command {
    #[command(description = "Start the bot")]
    Start,
    #[command(description = "Show the welcome message")]
    Help,
}

/// What an inbound message asks the bot to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Start,
    OrderInfo,
    RandomIdea,
}

impl Intent {
    /// Maps the reply keyboard labels. Matching is exact.
    pub fn from_label(text: &str) -> Option<Self> {
        match text {
            RANDOM_IDEA_LABEL => Some(Intent::RandomIdea),
            ORDER_BOT_LABEL => Some(Intent::OrderInfo),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Intent::Start => "start",
            Intent::OrderInfo => "order_info",
            Intent::RandomIdea => "random_idea",
        }
    }
}

impl From<Command> for Intent {
    fn from(cmd: Command) -> Self {
        match cmd {
            Command::Start | Command::Help => Intent::Start,
        }
    }
}
