use teloxide::prelude::*;
use teloxide::types::ParseMode;

use super::{ensure_user, send_failure_reply, BotHandler, HandlerResult, Sender};
use crate::bot::keyboards::{idea_keyboard, manager_keyboard};
use crate::bot::texts::{CONTACT_TEXT, WELCOME_TEXT};
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};

/// `/start` and `/help`: greet, show the main keyboard, then offer the manager contact.
pub async fn handle_welcome(bot: &Bot, msg: &Message, handler: &BotHandler) -> HandlerResult {
    let sender = Sender::from_message(msg);
    log_command_start("start", &sender.name, sender.user_id, sender.chat_id, None);

    ensure_user(&handler.db, msg).await;

    match send_welcome(bot, msg, handler).await {
        Ok(()) => log_command_success("start", &sender.name, sender.user_id, sender.chat_id, None),
        Err(e) => {
            log_command_error("start", &sender.name, sender.user_id, sender.chat_id, &e.to_string());
            send_failure_reply(bot, msg).await?;
        }
    }
    Ok(())
}

async fn send_welcome(bot: &Bot, msg: &Message, handler: &BotHandler) -> ResponseResult<()> {
    bot.send_message(msg.chat.id, WELCOME_TEXT)
        .reply_to_message_id(msg.id)
        .parse_mode(ParseMode::Html)
        .reply_markup(idea_keyboard())
        .await?;

    bot.send_message(msg.chat.id, CONTACT_TEXT)
        .reply_markup(manager_keyboard(&handler.settings.manager_url))
        .await?;

    Ok(())
}
