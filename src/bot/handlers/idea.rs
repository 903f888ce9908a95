use std::path::{Path, PathBuf};

use teloxide::prelude::*;
use teloxide::types::InputFile;

use super::{send_failure_reply, BotHandler, HandlerResult, Sender};
use crate::bot::keyboards::idea_keyboard;
use crate::bot::texts::{idea_caption, FAILURE_TEXT, IDEAS_EXHAUSTED_TEXT, SEARCHING_TEXT};
use crate::services::idea_selector::IdeaOutcome;
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};

/// The final message of the random-idea flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdeaReply {
    Text(String),
    Photo { path: PathBuf, caption: String },
    Exhausted,
    Failure,
}

impl IdeaReply {
    pub fn has_attachment(&self) -> bool {
        matches!(self, IdeaReply::Photo { .. })
    }

    /// Message text, or the photo caption.
    pub fn text(&self) -> &str {
        match self {
            IdeaReply::Text(text) => text,
            IdeaReply::Photo { caption, .. } => caption,
            IdeaReply::Exhausted => IDEAS_EXHAUSTED_TEXT,
            IdeaReply::Failure => FAILURE_TEXT,
        }
    }
}

/// Decides how to present a selection outcome. An image is attached only
/// when its path points to an existing file.
pub fn compose_idea_reply(outcome: IdeaOutcome) -> IdeaReply {
    match outcome {
        IdeaOutcome::Empty => IdeaReply::Exhausted,
        IdeaOutcome::Failed(_) => IdeaReply::Failure,
        IdeaOutcome::Found(idea) => {
            let caption = idea_caption(&idea.text);
            match idea.image_path.as_deref().map(Path::new) {
                Some(path) if path.is_file() => IdeaReply::Photo {
                    path: path.to_path_buf(),
                    caption,
                },
                Some(path) => {
                    tracing::warn!("Image for idea {} not found at {}", idea.id, path.display());
                    IdeaReply::Text(caption)
                }
                None => IdeaReply::Text(caption),
            }
        }
    }
}

pub async fn handle_random_idea(bot: &Bot, msg: &Message, handler: &BotHandler) -> HandlerResult {
    let sender = Sender::from_message(msg);
    log_command_start("random_idea", &sender.name, sender.user_id, sender.chat_id, None);

    match deliver_random_idea(bot, msg, handler).await {
        Ok(reply) => match delivery_detail(&reply) {
            Ok(details) => {
                log_command_success("random_idea", &sender.name, sender.user_id, sender.chat_id, Some(details));
            }
            Err(reason) => {
                log_command_error("random_idea", &sender.name, sender.user_id, sender.chat_id, reason);
            }
        },
        Err(e) => {
            log_command_error("random_idea", &sender.name, sender.user_id, sender.chat_id, &format!("{e:#}"));
            send_failure_reply(bot, msg).await?;
        }
    }
    Ok(())
}

/// Log detail for a delivered reply; `Err` when the user only got the
/// generic failure text.
fn delivery_detail(reply: &IdeaReply) -> Result<&'static str, &'static str> {
    match reply {
        IdeaReply::Photo { .. } => Ok("with image"),
        IdeaReply::Text(_) => Ok("text only"),
        IdeaReply::Exhausted => Ok("ideas exhausted"),
        IdeaReply::Failure => Err("idea store unavailable, sent failure reply"),
    }
}

async fn deliver_random_idea(bot: &Bot, msg: &Message, handler: &BotHandler) -> anyhow::Result<IdeaReply> {
    bot.send_message(msg.chat.id, SEARCHING_TEXT)
        .reply_to_message_id(msg.id)
        .await?;

    tokio::time::sleep(handler.settings.idea_delay).await;

    let reply = compose_idea_reply(handler.selector.select().await);
    send_idea_reply(bot, msg, &reply).await?;
    Ok(reply)
}

async fn send_idea_reply(bot: &Bot, msg: &Message, reply: &IdeaReply) -> anyhow::Result<()> {
    match reply {
        IdeaReply::Photo { path, caption } => {
            let bytes = tokio::fs::read(path).await?;
            bot.send_photo(msg.chat.id, InputFile::memory(bytes).file_name("idea.jpg"))
                .caption(caption.clone())
                .reply_markup(idea_keyboard())
                .await?;
        }
        other => {
            bot.send_message(msg.chat.id, other.text().to_string())
                .reply_to_message_id(msg.id)
                .reply_markup(idea_keyboard())
                .await?;
        }
    }
    Ok(())
}
