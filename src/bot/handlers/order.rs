use teloxide::prelude::*;
use teloxide::types::ParseMode;

use super::{ensure_user, send_failure_reply, BotHandler, HandlerResult, Sender};
use crate::bot::keyboards::manager_keyboard;
use crate::bot::texts::ORDER_TEXT;
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};

pub async fn handle_order_info(bot: &Bot, msg: &Message, handler: &BotHandler) -> HandlerResult {
    let sender = Sender::from_message(msg);
    log_command_start("order_info", &sender.name, sender.user_id, sender.chat_id, None);

    ensure_user(&handler.db, msg).await;

    let sent = bot.send_message(msg.chat.id, ORDER_TEXT)
        .reply_to_message_id(msg.id)
        .parse_mode(ParseMode::Html)
        .reply_markup(manager_keyboard(&handler.settings.manager_url))
        .await;

    match sent {
        Ok(_) => log_command_success("order_info", &sender.name, sender.user_id, sender.chat_id, None),
        Err(e) => {
            log_command_error("order_info", &sender.name, sender.user_id, sender.chat_id, &e.to_string());
            send_failure_reply(bot, msg).await?;
        }
    }
    Ok(())
}
