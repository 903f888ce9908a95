pub mod idea;
pub mod order;
pub mod welcome;

use std::time::Duration;

use teloxide::{
    dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler},
    prelude::*,
};
use url::Url;

use crate::bot::commands::{Command, Intent};
use crate::bot::keyboards::idea_keyboard;
use crate::bot::texts::FAILURE_TEXT;
use crate::config::Config;
use crate::database::connection::DatabaseManager;
use crate::database::models::User;
use crate::services::idea_selector::IdeaSelector;
use crate::utils::logging::{log_command_error, log_database_error};

pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;
pub type HandlerResult = Result<(), HandlerError>;

/// Tunables the handlers need at runtime.
#[derive(Debug, Clone)]
pub struct BotSettings {
    pub idea_delay: Duration,
    pub manager_url: Url,
}

impl BotSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            idea_delay: config.idea_delay,
            manager_url: config.manager_url.clone(),
        }
    }
}

#[derive(Clone)]
pub struct BotHandler {
    pub db: DatabaseManager,
    pub selector: IdeaSelector,
    pub settings: BotSettings,
}

impl BotHandler {
    pub fn new(db: DatabaseManager, settings: BotSettings) -> Self {
        let selector = IdeaSelector::new(db.clone());
        Self { db, selector, settings }
    }

    pub fn schema(&self) -> UpdateHandler<HandlerError> {
        let on_command = self.clone();
        let on_label = self.clone();

        Update::filter_message()
            .branch(
                dptree::entry()
                    .filter_command::<Command>()
                    .map(|cmd: Command| Intent::from(cmd))
                    .endpoint(move |bot: Bot, msg: Message, intent: Intent| {
                        let handler = on_command.clone();
                        async move { handle_intent(bot, msg, intent, handler).await }
                    }),
            )
            .branch(
                dptree::filter_map(|msg: Message| msg.text().and_then(Intent::from_label))
                    .endpoint(move |bot: Bot, msg: Message, intent: Intent| {
                        let handler = on_label.clone();
                        async move { handle_intent(bot, msg, intent, handler).await }
                    }),
            )
    }
}

/// Routes a classified message to its handler. Failures are logged here and
/// never reach the dispatcher.
pub async fn handle_intent(bot: Bot, msg: Message, intent: Intent, handler: BotHandler) -> HandlerResult {
    let result = match intent {
        Intent::Start => welcome::handle_welcome(&bot, &msg, &handler).await,
        Intent::OrderInfo => order::handle_order_info(&bot, &msg, &handler).await,
        Intent::RandomIdea => idea::handle_random_idea(&bot, &msg, &handler).await,
    };

    if let Err(e) = result {
        let sender = Sender::from_message(&msg);
        log_command_error(intent.name(), &sender.name, sender.user_id, sender.chat_id, &e.to_string());
    }
    Ok(())
}

/// Best-effort generic apology sent after a handler failed mid-flow.
pub async fn send_failure_reply(bot: &Bot, msg: &Message) -> HandlerResult {
    bot.send_message(msg.chat.id, FAILURE_TEXT)
        .reply_to_message_id(msg.id)
        .reply_markup(idea_keyboard())
        .await?;
    Ok(())
}

/// Who sent a message, flattened for logging.
#[derive(Debug, Clone)]
pub struct Sender {
    pub name: String,
    pub user_id: i64,
    pub chat_id: i64,
}

impl Sender {
    pub fn from_message(msg: &Message) -> Self {
        let (name, user_id) = match msg.from() {
            Some(user) => (
                user.username.clone().unwrap_or_else(|| user.full_name()),
                user.id.0 as i64,
            ),
            None => ("unknown".to_string(), 0),
        };

        Self {
            name,
            user_id,
            chat_id: msg.chat.id.0,
        }
    }
}

/// Records the sender on first contact. Storage failures are logged and
/// swallowed so the reply still goes out.
pub async fn ensure_user(db: &DatabaseManager, msg: &Message) -> Option<User> {
    let from = msg.from()?;

    match User::get_or_create(
        &db.pool,
        from.id.0 as i64,
        from.username.clone(),
        Some(from.first_name.clone()),
        from.last_name.clone(),
    )
    .await
    {
        Ok((user, created)) => {
            if created {
                tracing::info!("New user created: {}", user.user_id);
            } else {
                tracing::info!("Existing user interacted: {}", user.user_id);
            }
            Some(user)
        }
        Err(e) => {
            log_database_error("GET_OR_CREATE", "users", &e.to_string(), Some(&format!("user_id={}", from.id.0)));
            None
        }
    }
}
