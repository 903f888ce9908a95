use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};
use url::Url;

use crate::bot::texts::{MANAGER_BUTTON_LABEL, ORDER_BOT_LABEL, RANDOM_IDEA_LABEL};

/// Persistent keyboard with the two main actions.
pub fn idea_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![
        vec![KeyboardButton::new(RANDOM_IDEA_LABEL)],
        vec![KeyboardButton::new(ORDER_BOT_LABEL)],
    ])
    .resize_keyboard(true)
}

/// Inline button that opens a chat with the manager.
pub fn manager_keyboard(manager_url: &Url) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![InlineKeyboardButton::url(
        MANAGER_BUTTON_LABEL,
        manager_url.clone(),
    )]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    #[test]
    fn test_idea_keyboard_layout() {
        let keyboard = idea_keyboard();
        assert_eq!(keyboard.keyboard.len(), 2);
        assert_eq!(keyboard.keyboard[0][0].text, RANDOM_IDEA_LABEL);
        assert_eq!(keyboard.keyboard[1][0].text, ORDER_BOT_LABEL);
    }

    #[test]
    fn test_manager_keyboard_links_to_url() {
        let url = Url::parse("https://t.me/hellobotstudio").unwrap();
        let keyboard = manager_keyboard(&url);
        let button = &keyboard.inline_keyboard[0][0];
        assert_eq!(button.text, MANAGER_BUTTON_LABEL);
        match &button.kind {
            InlineKeyboardButtonKind::Url(link) => assert_eq!(link, &url),
            other => panic!("unexpected button kind: {other:?}"),
        }
    }
}
